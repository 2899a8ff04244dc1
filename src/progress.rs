//! Per-document annotation progress aggregation.
//!
//! Progress is a derived, read-only view: given the documents of a project,
//! the finished-annotation records of that project, and the number of
//! assigned annotators, compute per-document finished and in-progress
//! counts. Nothing here mutates the underlying records, and snapshots are
//! recomputed on every request rather than persisted.
//!
//! # Counting policy
//!
//! A finished record is evidence that one annotator completed one document;
//! duplicates are legitimate (one mark per annotator). `in_progress` is
//! `annotators - finished`, **clamped at zero**: stale data can leave more
//! finished marks than currently assigned annotators, and a negative count
//! is a data-quality signal, not a displayable number. The raw signal stays
//! visible through [`ProgressSnapshot::overcounted`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A document under annotation, owned by a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Stable document identifier.
    pub id: u64,
    /// Document name; progress records match on this.
    pub name: String,
}

impl SourceDocument {
    /// Create a document.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Completion state of one annotator's work on one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationState {
    /// The annotator is still working on the document.
    InProgress,
    /// The annotator marked the document as done.
    Finished,
}

/// One annotator's state on one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// Name of the document the record belongs to.
    pub document_name: String,
    /// Username of the annotator.
    pub annotator: String,
    /// Completion state.
    pub state: AnnotationState,
}

impl AnnotationRecord {
    /// Create a record.
    #[must_use]
    pub fn new(
        document_name: impl Into<String>,
        annotator: impl Into<String>,
        state: AnnotationState,
    ) -> Self {
        Self {
            document_name: document_name.into(),
            annotator: annotator.into(),
            state,
        }
    }

    /// Create a finished record.
    #[must_use]
    pub fn finished(document_name: impl Into<String>, annotator: impl Into<String>) -> Self {
        Self::new(document_name, annotator, AnnotationState::Finished)
    }

    /// Check whether this record marks completed work.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == AnnotationState::Finished
    }
}

/// Derived finished/in-progress counts for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Number of annotators who finished the document.
    pub finished: usize,
    /// Number of assigned annotators who have not finished, clamped at zero.
    pub in_progress: usize,
    /// Number of annotators assigned to the project.
    pub annotators: usize,
}

impl ProgressSnapshot {
    /// Build a snapshot from a finished count and the annotator count.
    #[must_use]
    pub fn new(finished: usize, annotators: usize) -> Self {
        Self {
            finished,
            in_progress: annotators.saturating_sub(finished),
            annotators,
        }
    }

    /// True when more finished marks exist than assigned annotators.
    ///
    /// Stale records after unassignment are the usual cause. The clamped
    /// `in_progress` hides the negative arithmetic; this flag keeps the
    /// data-quality signal observable.
    #[must_use]
    pub fn overcounted(&self) -> bool {
        self.finished > self.annotators
    }

    /// True when every assigned annotator finished the document.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.annotators > 0 && self.finished >= self.annotators
    }
}

/// Compute per-document progress, keyed by document name.
///
/// `finished` for a document is the number of **finished** records whose
/// document name matches; records in other states are ignored. Input
/// collections are read, never mutated. Documents sharing a name collapse
/// into one entry, matching the name-based record bookkeeping.
///
/// # Example
///
/// ```
/// use annolink::{compute_progress, AnnotationRecord, SourceDocument};
///
/// let documents = vec![SourceDocument::new(1, "intro.txt")];
/// let records = vec![
///     AnnotationRecord::finished("intro.txt", "alice"),
///     AnnotationRecord::finished("intro.txt", "bob"),
/// ];
///
/// let progress = compute_progress(&documents, &records, 3);
/// let snapshot = &progress["intro.txt"];
/// assert_eq!(snapshot.finished, 2);
/// assert_eq!(snapshot.in_progress, 1);
/// ```
#[must_use]
pub fn compute_progress(
    documents: &[SourceDocument],
    records: &[AnnotationRecord],
    annotator_count: usize,
) -> BTreeMap<String, ProgressSnapshot> {
    let mut finished_by_name: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records.iter().filter(|r| r.is_finished()) {
        *finished_by_name.entry(record.document_name.as_str()).or_insert(0) += 1;
    }

    documents
        .iter()
        .map(|doc| {
            let finished = finished_by_name.get(doc.name.as_str()).copied().unwrap_or(0);
            (doc.name.clone(), ProgressSnapshot::new(finished, annotator_count))
        })
        .collect()
}
