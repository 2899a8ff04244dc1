//! Knowledge-base candidates and the ranking wire format.
//!
//! A [`Candidate`] is a knowledge-base entry proposed as the referent of a
//! mention. Candidates come out of KB lookup unscored; a ranker assigns
//! scores and reorders them. The original collection handed to a ranker is
//! never mutated — ranking always produces a new `Vec`.
//!
//! # Wire format
//!
//! The external scoring service receives a [`RankingRequest`]:
//!
//! ```json
//! {
//!   "mention": "Paris",
//!   "context": "Paris is a city.",
//!   "candidates": [{"id": "Q90", "label": "Paris"}, ...]
//! }
//! ```
//!
//! and answers with a [`RankingResponse`]:
//!
//! ```json
//! {"scores": [{"id": "Q90", "score": 0.93}, ...]}
//! ```
//!
//! Unknown ids in a response are ignored; candidates the response does not
//! score keep their relative input order behind all scored ones.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// A knowledge-base entry proposed as the referent of a mention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Knowledge-base identifier (e.g., "Q7186" for Wikidata).
    pub id: String,
    /// Display label (the canonical name shown to annotators).
    pub label: String,
    /// Description from the knowledge base, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ranking score, assigned by a ranker. `None` until ranked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Candidate {
    /// Create an unscored candidate.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            score: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the score.
    #[must_use]
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Check whether a ranker has assigned a score.
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.score.is_some()
    }
}

/// One ranking call: a mention, its surrounding context, and the candidates
/// to order.
///
/// Constructed per call and discarded after use. Serde round-trips preserve
/// mention, context, and candidate order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRequest {
    /// The span of text under annotation.
    pub mention: String,
    /// Free text surrounding the mention (usually the containing sentence).
    pub context: String,
    /// Candidates to rank, in KB lookup order.
    pub candidates: Vec<Candidate>,
}

impl RankingRequest {
    /// Create a ranking request.
    ///
    /// Candidates are unique by identifier: later duplicates of an id are
    /// dropped, keeping the first occurrence and its position.
    #[must_use]
    pub fn new(
        mention: impl Into<String>,
        context: impl Into<String>,
        candidates: Vec<Candidate>,
    ) -> Self {
        let mut seen = HashSet::new();
        let candidates = candidates
            .into_iter()
            .filter(|c| seen.insert(c.id.clone()))
            .collect();
        Self {
            mention: mention.into(),
            context: context.into(),
            candidates,
        }
    }

    /// Number of candidates in this request.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check if the request carries no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// A single scored candidate in a [`RankingResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    /// Candidate identifier the score applies to.
    pub id: String,
    /// Relevance score; higher ranks earlier.
    pub score: f64,
}

/// Response of the external scoring service: `{id, score}` pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingResponse {
    /// Scores keyed by candidate id. Order is not significant.
    pub scores: Vec<CandidateScore>,
}

impl RankingResponse {
    /// Build a response from `(id, score)` pairs.
    #[must_use]
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            scores: pairs
                .into_iter()
                .map(|(id, score)| CandidateScore {
                    id: id.into(),
                    score,
                })
                .collect(),
        }
    }
}

/// Apply a scoring response to a candidate list and reorder by score.
///
/// Pure reordering: the output ids are always a permutation of the input
/// ids — nothing is invented, nothing is dropped.
///
/// - Scored candidates come first, descending by score (stable for ties).
/// - Unscored candidates keep their relative input order behind them.
/// - Ids in the response that match no candidate are ignored.
/// - If the response scores one id twice, the first entry wins.
///
/// # Example
///
/// ```
/// use annolink::{apply_scores, Candidate, RankingResponse};
///
/// let candidates = vec![
///     Candidate::new("Q1", "Paris, Texas"),
///     Candidate::new("Q2", "Paris"),
/// ];
/// let response = RankingResponse::from_pairs([("Q1", 0.2), ("Q2", 0.9)]);
///
/// let ranked = apply_scores(&candidates, &response);
/// assert_eq!(ranked[0].id, "Q2");
/// assert_eq!(ranked[1].id, "Q1");
/// ```
#[must_use]
pub fn apply_scores(candidates: &[Candidate], response: &RankingResponse) -> Vec<Candidate> {
    let mut score_of: HashMap<&str, f64> = HashMap::new();
    for entry in &response.scores {
        score_of.entry(entry.id.as_str()).or_insert(entry.score);
    }

    let mut ranked: Vec<Candidate> = candidates
        .iter()
        .map(|c| {
            let mut c = c.clone();
            if let Some(score) = score_of.get(c.id.as_str()) {
                c.score = Some(*score);
            }
            c
        })
        .collect();

    // Stable sort: ties and the unscored tail keep input order.
    ranked.sort_by(|a, b| match (a.score, b.score) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    ranked
}
