//! Workload monitor integration: permissions, missing projects, rows.

use annolink::{
    AnnotationRecord, DocumentRepository, Error, Project, ProjectRepository, Role, SourceDocument,
    WorkloadMonitor,
};
use std::collections::HashMap;

/// In-memory repositories standing in for the persistence layer.
#[derive(Default)]
struct InMemory {
    projects: HashMap<u64, Project>,
    documents: HashMap<u64, Vec<SourceDocument>>,
    records: HashMap<u64, Vec<AnnotationRecord>>,
    annotators: HashMap<u64, usize>,
}

impl ProjectRepository for &InMemory {
    fn project(&self, project_id: u64) -> Option<Project> {
        self.projects.get(&project_id).cloned()
    }
}

impl DocumentRepository for &InMemory {
    fn documents(&self, project_id: u64) -> Vec<SourceDocument> {
        self.documents.get(&project_id).cloned().unwrap_or_default()
    }

    fn records(&self, project_id: u64) -> Vec<AnnotationRecord> {
        self.records.get(&project_id).cloned().unwrap_or_default()
    }

    fn annotator_count(&self, project_id: u64) -> usize {
        self.annotators.get(&project_id).copied().unwrap_or(0)
    }
}

fn fixture() -> InMemory {
    let mut store = InMemory::default();
    store.projects.insert(
        7,
        Project::new(7, "treebank")
            .with_role("mara", Role::Manager)
            .with_role("carol", Role::Curator)
            .with_role("alice", Role::Annotator),
    );
    store.documents.insert(
        7,
        vec![
            SourceDocument::new(1, "intro.txt"),
            SourceDocument::new(2, "body.txt"),
        ],
    );
    store.records.insert(
        7,
        vec![
            AnnotationRecord::finished("intro.txt", "alice"),
            AnnotationRecord::finished("intro.txt", "bob"),
        ],
    );
    store.annotators.insert(7, 2);
    store
}

#[test]
fn curator_sees_per_document_rows() {
    let store = fixture();
    let monitor = WorkloadMonitor::new(&store, &store);

    let overview = monitor.overview(7, "carol").unwrap();
    assert_eq!(overview.project.name, "treebank");
    assert_eq!(overview.rows.len(), 2);

    let intro = &overview.rows[0];
    assert_eq!(intro.document.name, "intro.txt");
    assert_eq!(intro.progress.finished, 2);
    assert_eq!(intro.progress.in_progress, 0);
    assert!(intro.progress.is_complete());

    let body = &overview.rows[1];
    assert_eq!(body.progress.finished, 0);
    assert_eq!(body.progress.in_progress, 2);
}

#[test]
fn manager_may_monitor_too() {
    let store = fixture();
    let monitor = WorkloadMonitor::new(&store, &store);
    assert!(monitor.overview(7, "mara").is_ok());
}

#[test]
fn annotator_is_denied() {
    let store = fixture();
    let monitor = WorkloadMonitor::new(&store, &store);

    match monitor.overview(7, "alice") {
        Err(Error::PermissionDenied { user, project }) => {
            assert_eq!(user, "alice");
            assert_eq!(project, 7);
        }
        other => panic!("expected PermissionDenied, got {other:?}"),
    }
}

#[test]
fn unknown_user_is_denied() {
    let store = fixture();
    let monitor = WorkloadMonitor::new(&store, &store);
    assert!(matches!(
        monitor.overview(7, "stranger"),
        Err(Error::PermissionDenied { .. })
    ));
}

#[test]
fn missing_project_is_a_typed_error() {
    let store = fixture();
    let monitor = WorkloadMonitor::new(&store, &store);

    match monitor.overview(99, "carol") {
        Err(Error::ProjectNotFound(id)) => assert_eq!(id, 99),
        other => panic!("expected ProjectNotFound, got {other:?}"),
    }
}

#[test]
fn overview_totals() {
    let store = fixture();
    let monitor = WorkloadMonitor::new(&store, &store);

    let overview = monitor.overview(7, "carol").unwrap();
    assert_eq!(overview.total_finished(), 2);
    assert_eq!(overview.complete_documents(), 1);
}

#[test]
fn project_without_documents_yields_empty_rows() {
    let mut store = fixture();
    store.documents.insert(7, Vec::new());
    let monitor = WorkloadMonitor::new(&store, &store);

    let overview = monitor.overview(7, "carol").unwrap();
    assert!(overview.rows.is_empty());
    assert_eq!(overview.total_finished(), 0);
}
