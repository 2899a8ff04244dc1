//! Candidate rankers.
//!
//! All rankers implement the [`Ranker`] trait and share one contract:
//! ranking is **best-effort and never fatal**. A ranker returns a new list
//! holding exactly the input candidates — possibly reordered and scored,
//! never added to or dropped from. Whatever goes wrong internally (network,
//! bad response, missing model), the caller gets the input order back and a
//! log line, not an error.
//!
//! | Ranker | Scoring | When to use |
//! |--------|---------|-------------|
//! | [`ExternalRanker`] | remote scoring service | a learning-to-rank endpoint is deployed |
//! | [`LexicalRanker`] | mention/label similarity | no endpoint, local fallback |
//! | [`MockRanker`] | canned response | tests |

mod external;
mod lexical;

pub use external::{ExternalRanker, DEFAULT_TIMEOUT};
pub use lexical::LexicalRanker;

use crate::candidate::{apply_scores, Candidate, RankingRequest, RankingResponse};

/// A candidate ranker.
///
/// Implementations are `Send + Sync` so a single shared instance can serve
/// concurrent request-scoped callers; `rank` takes `&self` and mutates no
/// shared state.
pub trait Ranker: Send + Sync {
    /// Human-readable ranker name, for logging.
    fn name(&self) -> &str;

    /// Rank the request's candidates, best first.
    ///
    /// Returns a permutation of the input candidates. Must not panic and
    /// must not drop or invent candidates, regardless of internal failures.
    fn rank(&self, request: &RankingRequest) -> Vec<Candidate>;
}

/// Deterministic ranker for tests: applies a canned response.
///
/// Without a response it behaves like a ranker whose backend is
/// unavailable and returns the input order unchanged.
///
/// # Example
///
/// ```
/// use annolink::{Candidate, MockRanker, Ranker, RankingRequest, RankingResponse};
///
/// let request = RankingRequest::new(
///     "Paris",
///     "Paris is a city.",
///     vec![Candidate::new("Q1", "Paris, Texas"), Candidate::new("Q2", "Paris")],
/// );
///
/// let ranker = MockRanker::new("test").with_response(
///     RankingResponse::from_pairs([("Q2", 0.9), ("Q1", 0.1)]),
/// );
/// assert_eq!(ranker.rank(&request)[0].id, "Q2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockRanker {
    name: String,
    response: Option<RankingResponse>,
}

impl MockRanker {
    /// Create a mock ranker that returns candidates unchanged.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            response: None,
        }
    }

    /// Set the response every `rank` call applies.
    #[must_use]
    pub fn with_response(mut self, response: RankingResponse) -> Self {
        self.response = Some(response);
        self
    }
}

impl Ranker for MockRanker {
    fn name(&self) -> &str {
        &self.name
    }

    fn rank(&self, request: &RankingRequest) -> Vec<Candidate> {
        match &self.response {
            Some(response) => apply_scores(&request.candidates, response),
            None => request.candidates.clone(),
        }
    }
}
