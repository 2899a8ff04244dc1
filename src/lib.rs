//! # annolink
//!
//! Coordination core for a collaborative text-annotation platform:
//! knowledge-base candidate re-ranking and per-document annotation
//! progress.
//!
//! - **Ranking**: order KB candidates for a mention, optionally through an
//!   external scoring service, degrading to the input order on any failure
//! - **Progress**: derive finished/in-progress counts per document from
//!   completion records
//! - **Workload**: permission-checked monitoring view over injected
//!   repositories
//! - **Navigation / Curation**: document cursor and per-user curation
//!   settings
//!
//! ## Quick start
//!
//! ```rust
//! use annolink::{Candidate, LexicalRanker, Ranker, RankingRequest};
//!
//! let request = RankingRequest::new(
//!     "Paris",
//!     "Paris is a city.",
//!     vec![
//!         Candidate::new("Q1", "Paris Hilton"),
//!         Candidate::new("Q2", "Paris"),
//!     ],
//! );
//!
//! let ranked = LexicalRanker::new().rank(&request);
//! assert_eq!(ranked[0].id, "Q2");
//! ```
//!
//! With a deployed scoring endpoint, swap in the remote ranker; callers
//! never learn whether the endpoint was reachable:
//!
//! ```rust,ignore
//! use annolink::{ExternalRanker, Ranker};
//!
//! let ranker = ExternalRanker::new("http://localhost:5000/rank");
//! let ranked = ranker.rank(&request); // input order if the call failed
//! ```
//!
//! ## Rankers
//!
//! | Ranker | Scoring | Network |
//! |--------|---------|---------|
//! | [`ExternalRanker`] | remote learning-to-rank service | yes, blocking + timeout |
//! | [`LexicalRanker`] | mention/label similarity | no |
//! | [`MockRanker`] | canned response | no |
//!
//! ## Design Philosophy
//!
//! - **Best-effort ranking**: a dead scoring endpoint degrades the order,
//!   never the annotation workflow
//! - **Derived, read-only views**: progress and workload are recomputed
//!   snapshots; inputs are never mutated
//! - **Trait seams**: rankers and repositories are traits, injected by the
//!   caller — no global singletons
//! - **Request-scoped synchronous calls**: one blocking scoring call per
//!   ranking request, bounded by an explicit timeout

#![warn(missing_docs)]

pub mod candidate;
pub mod context;
pub mod curation;
mod error;
pub mod navigation;
pub mod progress;
pub mod ranking;
pub mod workload;

pub use candidate::{apply_scores, Candidate, CandidateScore, RankingRequest, RankingResponse};
pub use curation::CurationSettings;
pub use error::{Error, Result};
pub use navigation::DocumentNavigator;
pub use progress::{
    compute_progress, AnnotationRecord, AnnotationState, ProgressSnapshot, SourceDocument,
};
pub use ranking::{ExternalRanker, LexicalRanker, MockRanker, Ranker};
pub use workload::{
    DocumentRepository, Project, ProjectRepository, Role, WorkloadMonitor, WorkloadOverview,
    WorkloadRow,
};
