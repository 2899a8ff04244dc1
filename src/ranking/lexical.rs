//! Local fallback ranker scoring candidates by lexical similarity.

use crate::candidate::{apply_scores, Candidate, RankingRequest, RankingResponse};
use crate::ranking::Ranker;
use std::collections::HashSet;

/// Rank candidates by lexical similarity between mention and label.
///
/// No network, no model files: useful as the default when no external
/// scoring endpoint is configured, and as the floor an external ranker is
/// expected to beat.
///
/// Scoring tiers (after lowercasing):
///
/// 1. exact label match → 1.0
/// 2. one string contains the other → 0.8
/// 3. otherwise word-level Jaccard overlap
///
/// # Example
///
/// ```
/// use annolink::{Candidate, LexicalRanker, Ranker, RankingRequest};
///
/// let request = RankingRequest::new(
///     "Paris",
///     "Paris is a city.",
///     vec![
///         Candidate::new("Q1", "Paris Hilton"),
///         Candidate::new("Q2", "Paris"),
///     ],
/// );
/// let ranked = LexicalRanker::new().rank(&request);
/// assert_eq!(ranked[0].id, "Q2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LexicalRanker;

impl LexicalRanker {
    /// Create a lexical ranker.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Ranker for LexicalRanker {
    fn name(&self) -> &str {
        "lexical"
    }

    fn rank(&self, request: &RankingRequest) -> Vec<Candidate> {
        let response = RankingResponse::from_pairs(
            request
                .candidates
                .iter()
                .map(|c| (c.id.clone(), label_similarity(&request.mention, &c.label))),
        );
        apply_scores(&request.candidates, &response)
    }
}

/// Similarity between a mention and a candidate label in `[0, 1]`.
fn label_similarity(mention: &str, label: &str) -> f64 {
    let mention = mention.to_lowercase();
    let label = label.to_lowercase();

    if mention == label {
        return 1.0;
    }
    if mention.contains(&label) || label.contains(&mention) {
        return 0.8;
    }
    jaccard_words(&mention, &label)
}

/// Word-level Jaccard coefficient of two lowercased strings.
fn jaccard_words(a: &str, b: &str) -> f64 {
    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();

    let intersection = words_a.intersection(&words_b).count();
    let union = words_a.union(&words_b).count();

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_scores_highest() {
        assert!((label_similarity("Paris", "paris") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn substring_beats_word_overlap() {
        let substring = label_similarity("Paris", "Paris Hilton");
        let overlap = label_similarity("Paris France", "France Telecom");
        assert!((substring - 0.8).abs() < 1e-9);
        assert!(overlap < substring);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(label_similarity("Paris", "Berlin"), 0.0);
        assert_eq!(label_similarity("", ""), 1.0);
    }

    #[test]
    fn ranking_preserves_ids() {
        let request = RankingRequest::new(
            "Paris",
            "",
            vec![
                Candidate::new("Q1", "Berlin"),
                Candidate::new("Q2", "Paris"),
                Candidate::new("Q3", "Paris, Texas"),
            ],
        );
        let ranked = LexicalRanker::new().rank(&request);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].id, "Q2");
        let mut ids: Vec<&str> = ranked.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, ["Q1", "Q2", "Q3"]);
    }
}
