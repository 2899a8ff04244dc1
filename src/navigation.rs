//! Document navigation for the annotation action bar.

use crate::progress::SourceDocument;

/// Cursor over a project's ordered document list.
///
/// Backs next/previous document actions. No wraparound: stepping past
/// either end leaves the cursor where it is and returns `None`, so the UI
/// can simply disable the corresponding button via [`has_next`] /
/// [`has_previous`].
///
/// [`has_next`]: DocumentNavigator::has_next
/// [`has_previous`]: DocumentNavigator::has_previous
///
/// # Example
///
/// ```
/// use annolink::{DocumentNavigator, SourceDocument};
///
/// let mut nav = DocumentNavigator::new(vec![
///     SourceDocument::new(1, "a"),
///     SourceDocument::new(2, "b"),
/// ]);
/// assert_eq!(nav.current().unwrap().name, "a");
/// assert_eq!(nav.next().unwrap().name, "b");
/// assert!(nav.next().is_none());
/// assert_eq!(nav.current().unwrap().name, "b");
/// ```
#[derive(Debug, Clone)]
pub struct DocumentNavigator {
    documents: Vec<SourceDocument>,
    cursor: usize,
}

impl DocumentNavigator {
    /// Create a navigator positioned on the first document.
    #[must_use]
    pub fn new(documents: Vec<SourceDocument>) -> Self {
        Self {
            documents,
            cursor: 0,
        }
    }

    /// The document under the cursor. `None` for an empty list.
    #[must_use]
    pub fn current(&self) -> Option<&SourceDocument> {
        self.documents.get(self.cursor)
    }

    /// Zero-based cursor position. `None` for an empty list.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        if self.documents.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Check whether a document follows the cursor.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.documents.len()
    }

    /// Check whether a document precedes the cursor.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.cursor > 0 && !self.documents.is_empty()
    }

    /// Advance to the next document.
    pub fn next(&mut self) -> Option<&SourceDocument> {
        if self.has_next() {
            self.cursor += 1;
            self.current()
        } else {
            None
        }
    }

    /// Step back to the previous document.
    pub fn previous(&mut self) -> Option<&SourceDocument> {
        if self.has_previous() {
            self.cursor -= 1;
            self.current()
        } else {
            None
        }
    }

    /// Jump to the first document.
    pub fn first(&mut self) -> Option<&SourceDocument> {
        self.cursor = 0;
        self.current()
    }

    /// Jump to the last document.
    pub fn last(&mut self) -> Option<&SourceDocument> {
        if self.documents.is_empty() {
            return None;
        }
        self.cursor = self.documents.len() - 1;
        self.current()
    }

    /// Jump to the document with the given id.
    ///
    /// Returns `false` (cursor unchanged) when no document has that id.
    pub fn open(&mut self, document_id: u64) -> bool {
        match self.documents.iter().position(|d| d.id == document_id) {
            Some(idx) => {
                self.cursor = idx;
                true
            }
            None => false,
        }
    }
}
