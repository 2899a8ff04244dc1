//! Re-ranking through an external scoring service.

use crate::candidate::{apply_scores, Candidate, RankingRequest, RankingResponse};
use crate::error::{Error, Result};
use crate::ranking::Ranker;
use std::time::Duration;

/// Default overall timeout for one scoring call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Ranker that POSTs each request to an external scoring endpoint.
///
/// The endpoint receives a JSON [`RankingRequest`] and answers with a
/// [`RankingResponse`]; returned scores are applied and candidates
/// reordered descending. On **any** failure — connect error, timeout,
/// non-200 status, unparseable body — the failure is logged and the input
/// candidates come back unchanged: ranking is best-effort, never fatal,
/// and a dead endpoint must not take annotation down with it.
///
/// One `ExternalRanker` owns one HTTP agent with its connection pool;
/// construct it once at startup and share it, rather than per call.
///
/// # Example
///
/// ```no_run
/// use annolink::{Candidate, ExternalRanker, Ranker, RankingRequest};
///
/// let ranker = ExternalRanker::new("http://localhost:5000/rank");
/// let request = RankingRequest::new(
///     "Paris",
///     "Paris is a city.",
///     vec![Candidate::new("Q90", "Paris")],
/// );
/// let ranked = ranker.rank(&request);
/// assert_eq!(ranked.len(), 1);
/// ```
#[derive(Clone)]
pub struct ExternalRanker {
    agent: ureq::Agent,
    endpoint: String,
}

impl std::fmt::Debug for ExternalRanker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalRanker")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl ExternalRanker {
    /// Create a ranker for the given endpoint with [`DEFAULT_TIMEOUT`].
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Create a ranker with an explicit per-call timeout.
    ///
    /// The timeout covers the whole call (connect, send, receive); expiry
    /// degrades like any other transport failure.
    #[must_use]
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }

    /// The configured endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One scoring round-trip. Failures are typed here and swallowed in
    /// [`Ranker::rank`].
    fn request_scores(&self, request: &RankingRequest) -> Result<RankingResponse> {
        let response = self
            .agent
            .post(&self.endpoint)
            .send_json(request)
            .map_err(|e| Error::transport(format!("POST {}: {}", self.endpoint, e)))?;

        if response.status() != 200 {
            return Err(Error::transport(format!(
                "HTTP {} from {}",
                response.status(),
                self.endpoint
            )));
        }

        response
            .into_json::<RankingResponse>()
            .map_err(|e| Error::invalid_response(format!("from {}: {}", self.endpoint, e)))
    }
}

impl Ranker for ExternalRanker {
    fn name(&self) -> &str {
        "external"
    }

    fn rank(&self, request: &RankingRequest) -> Vec<Candidate> {
        match self.request_scores(request) {
            Ok(response) => apply_scores(&request.candidates, &response),
            Err(e) => {
                log::warn!(
                    "External re-ranking failed, keeping candidate order: {}",
                    e
                );
                request.candidates.clone()
            }
        }
    }
}
