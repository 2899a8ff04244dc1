//! Per-user curation settings.
//!
//! A curator reviewing a project picks which annotators' work to merge and
//! remembers the document they were last working on. These settings belong
//! to one (user, project) pair; storing them is the caller's concern.

use serde::{Deserialize, Serialize};

/// Curation preferences of one user within one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurationSettings {
    /// Username the settings belong to.
    pub username: String,
    /// Project the settings apply to.
    pub project_id: u64,
    /// Annotators whose work is shown during curation, in selection order.
    selected_annotators: Vec<String>,
    /// Document the curator last had open, if any.
    current_document: Option<u64>,
}

impl CurationSettings {
    /// Create empty settings for a (user, project) pair.
    #[must_use]
    pub fn new(username: impl Into<String>, project_id: u64) -> Self {
        Self {
            username: username.into(),
            project_id,
            selected_annotators: Vec::new(),
            current_document: None,
        }
    }

    /// Annotators currently selected for curation.
    #[must_use]
    pub fn selected_annotators(&self) -> &[String] {
        &self.selected_annotators
    }

    /// Check whether an annotator is selected.
    #[must_use]
    pub fn is_selected(&self, annotator: &str) -> bool {
        self.selected_annotators.iter().any(|a| a == annotator)
    }

    /// Select an annotator. Selecting twice is a no-op.
    pub fn select(&mut self, annotator: impl Into<String>) {
        let annotator = annotator.into();
        if !self.is_selected(&annotator) {
            self.selected_annotators.push(annotator);
        }
    }

    /// Deselect an annotator. Unknown names are ignored.
    pub fn deselect(&mut self, annotator: &str) {
        self.selected_annotators.retain(|a| a != annotator);
    }

    /// Replace the whole selection, keeping order and dropping duplicates.
    pub fn set_selection<I, S>(&mut self, annotators: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_annotators.clear();
        for annotator in annotators {
            self.select(annotator);
        }
    }

    /// The document the curator last had open.
    #[must_use]
    pub fn current_document(&self) -> Option<u64> {
        self.current_document
    }

    /// Remember the currently open document.
    pub fn set_current_document(&mut self, document_id: u64) {
        self.current_document = Some(document_id);
    }

    /// Forget the currently open document.
    pub fn clear_current_document(&mut self) {
        self.current_document = None;
    }
}
