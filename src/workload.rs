//! Project workload monitoring.
//!
//! [`WorkloadMonitor`] is the coordination layer behind a monitoring view:
//! it resolves the project, checks that the requesting user may see its
//! workload, and assembles per-document progress rows. Data comes from
//! caller-supplied repositories ([`ProjectRepository`],
//! [`DocumentRepository`]) — explicit constructor injection instead of
//! framework-managed singletons, so the monitor stays testable with plain
//! in-memory fakes.

use crate::error::{Error, Result};
use crate::progress::{compute_progress, AnnotationRecord, ProgressSnapshot, SourceDocument};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Role of a user within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Project manager: full access, including workload monitoring.
    Manager,
    /// Curator: merges annotations, may monitor workload.
    Curator,
    /// Annotator: works on documents, no monitoring access.
    Annotator,
}

/// An annotation project with per-user roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable project identifier.
    pub id: u64,
    /// Project name.
    pub name: String,
    roles: BTreeMap<String, Role>,
}

impl Project {
    /// Create a project without members.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            roles: BTreeMap::new(),
        }
    }

    /// Assign a role to a user. A user holds one role per project; a second
    /// assignment replaces the first.
    #[must_use]
    pub fn with_role(mut self, username: impl Into<String>, role: Role) -> Self {
        self.roles.insert(username.into(), role);
        self
    }

    /// Role of the given user, if a member.
    #[must_use]
    pub fn role_of(&self, username: &str) -> Option<Role> {
        self.roles.get(username).copied()
    }

    /// Check whether the user may view workload monitoring.
    ///
    /// Curators and managers may; annotators and non-members may not.
    #[must_use]
    pub fn can_monitor(&self, username: &str) -> bool {
        matches!(self.role_of(username), Some(Role::Manager | Role::Curator))
    }
}

/// Supplies projects by id.
pub trait ProjectRepository {
    /// Look up a project. `None` when it does not exist.
    fn project(&self, project_id: u64) -> Option<Project>;
}

/// Supplies per-project documents and annotation bookkeeping.
pub trait DocumentRepository {
    /// All source documents of the project, in display order.
    fn documents(&self, project_id: u64) -> Vec<SourceDocument>;

    /// All annotation records of the project (finished and in-progress).
    fn records(&self, project_id: u64) -> Vec<AnnotationRecord>;

    /// Number of annotators assigned to the project.
    fn annotator_count(&self, project_id: u64) -> usize;
}

/// One row of the monitoring view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadRow {
    /// The document.
    pub document: SourceDocument,
    /// Derived progress counts for the document.
    pub progress: ProgressSnapshot,
}

/// The assembled monitoring view for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadOverview {
    /// The monitored project.
    pub project: Project,
    /// Per-document rows, in repository order.
    pub rows: Vec<WorkloadRow>,
}

impl WorkloadOverview {
    /// Total finished marks across all documents.
    #[must_use]
    pub fn total_finished(&self) -> usize {
        self.rows.iter().map(|r| r.progress.finished).sum()
    }

    /// Documents where every assigned annotator finished.
    #[must_use]
    pub fn complete_documents(&self) -> usize {
        self.rows.iter().filter(|r| r.progress.is_complete()).count()
    }
}

/// Assembles workload overviews from injected repositories.
///
/// # Example
///
/// ```
/// use annolink::{
///     AnnotationRecord, DocumentRepository, Project, ProjectRepository, Role,
///     SourceDocument, WorkloadMonitor,
/// };
///
/// struct Fixture;
///
/// impl ProjectRepository for Fixture {
///     fn project(&self, _: u64) -> Option<Project> {
///         Some(Project::new(1, "demo").with_role("carol", Role::Curator))
///     }
/// }
///
/// impl DocumentRepository for Fixture {
///     fn documents(&self, _: u64) -> Vec<SourceDocument> {
///         vec![SourceDocument::new(1, "intro.txt")]
///     }
///     fn records(&self, _: u64) -> Vec<AnnotationRecord> {
///         vec![AnnotationRecord::finished("intro.txt", "alice")]
///     }
///     fn annotator_count(&self, _: u64) -> usize {
///         2
///     }
/// }
///
/// let monitor = WorkloadMonitor::new(Fixture, Fixture);
/// let overview = monitor.overview(1, "carol").unwrap();
/// assert_eq!(overview.rows[0].progress.finished, 1);
/// assert_eq!(overview.rows[0].progress.in_progress, 1);
/// ```
#[derive(Debug)]
pub struct WorkloadMonitor<P, D> {
    projects: P,
    documents: D,
}

impl<P, D> WorkloadMonitor<P, D>
where
    P: ProjectRepository,
    D: DocumentRepository,
{
    /// Create a monitor over the given repositories.
    #[must_use]
    pub fn new(projects: P, documents: D) -> Self {
        Self {
            projects,
            documents,
        }
    }

    /// Assemble the monitoring view for a project.
    ///
    /// # Errors
    ///
    /// [`Error::ProjectNotFound`] when the project does not exist;
    /// [`Error::PermissionDenied`] when the user is neither curator nor
    /// manager of it. Callers are expected to surface both and fall back to
    /// a safe default view.
    pub fn overview(&self, project_id: u64, username: &str) -> Result<WorkloadOverview> {
        let project = self
            .projects
            .project(project_id)
            .ok_or(Error::ProjectNotFound(project_id))?;

        if !project.can_monitor(username) {
            return Err(Error::permission_denied(username, project_id));
        }

        let documents = self.documents.documents(project_id);
        let records = self.documents.records(project_id);
        let annotators = self.documents.annotator_count(project_id);

        let progress = compute_progress(&documents, &records, annotators);
        let rows = documents
            .into_iter()
            .map(|document| {
                let snapshot = progress
                    .get(&document.name)
                    .copied()
                    .unwrap_or_else(|| ProgressSnapshot::new(0, annotators));
                WorkloadRow {
                    document,
                    progress: snapshot,
                }
            })
            .collect();

        Ok(WorkloadOverview { project, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_assignment_replaces() {
        let project = Project::new(1, "p")
            .with_role("ann", Role::Annotator)
            .with_role("ann", Role::Curator);
        assert_eq!(project.role_of("ann"), Some(Role::Curator));
    }

    #[test]
    fn only_curators_and_managers_monitor() {
        let project = Project::new(1, "p")
            .with_role("mgr", Role::Manager)
            .with_role("cur", Role::Curator)
            .with_role("ann", Role::Annotator);
        assert!(project.can_monitor("mgr"));
        assert!(project.can_monitor("cur"));
        assert!(!project.can_monitor("ann"));
        assert!(!project.can_monitor("stranger"));
    }
}
