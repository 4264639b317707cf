//! Client-side state of the project start screen.
//!
//! - [`store`] - the project's file snapshot and its reconciliation rules
//! - [`ingest`] - uploads from the picker and the drop surface
//! - [`delete`] - single-file deletion with per-file busy markers
//! - [`view_mode`] - chooser / authoring-seed state machine
//! - [`toasts`] - user-facing notifications
//!
//! All state lives in Leptos signals, so the handles are cheap to clone
//! into event handlers and `spawn_local` tasks.

pub mod delete;
pub mod ingest;
pub mod store;
pub mod toasts;
pub mod view_mode;

#[cfg(test)]
pub(crate) mod testing;

pub use delete::DeletionCoordinator;
pub use ingest::IngestionCoordinator;
pub use store::FileStore;
pub use toasts::Toasts;
pub use view_mode::{Transition, ViewAction, ViewMode, ViewModeError, ViewModeMachine};

use std::rc::Rc;

use leptos::*;

use crate::config::LIST_FAILED_MESSAGE;
use crate::services::{FileEndpoint, HttpFileApi};
use crate::types::FileResult;

/// File state of one project: the store plus the two coordinators that
/// reconcile it with the file service.
pub struct ProjectFiles<E> {
    endpoint: Rc<E>,
    project_id: Option<String>,
    pub store: FileStore,
    pub ingestion: IngestionCoordinator<E>,
    pub deletion: DeletionCoordinator<E>,
    toasts: Toasts,
}

impl<E> Clone for ProjectFiles<E> {
    fn clone(&self) -> Self {
        Self {
            endpoint: Rc::clone(&self.endpoint),
            project_id: self.project_id.clone(),
            store: self.store,
            ingestion: self.ingestion.clone(),
            deletion: self.deletion.clone(),
            toasts: self.toasts,
        }
    }
}

impl<E: FileEndpoint> ProjectFiles<E> {
    pub fn new(
        endpoint: Rc<E>,
        project_id: Option<String>,
        toasts: Toasts,
        on_files_changed: Option<Callback<()>>,
    ) -> Self {
        let store = FileStore::new();
        let ingestion = IngestionCoordinator::new(
            Rc::clone(&endpoint),
            project_id.clone(),
            store,
            toasts,
            on_files_changed,
        );
        let deletion = DeletionCoordinator::new(Rc::clone(&endpoint), store, toasts);

        Self {
            endpoint,
            project_id,
            store,
            ingestion,
            deletion,
            toasts,
        }
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Initial listing. Without a project this does nothing and the store
    /// stays empty.
    pub async fn load(&self) -> FileResult<usize> {
        let Some(project_id) = self.project_id.as_deref() else {
            log::debug!("No project context, file list stays empty");
            return Ok(0);
        };

        self.store
            .refresh(&*self.endpoint, project_id)
            .await
            .map_err(|e| {
                log::error!("❌ Loading files of project {} failed: {}", project_id, e);
                self.toasts.error(e.user_message(LIST_FAILED_MESSAGE));
                e
            })
    }
}

/// Project files backed by the HTTP file service.
pub type HttpProjectFiles = ProjectFiles<HttpFileApi>;

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::state::testing::FakeEndpoint;
    use crate::types::{FileAsset, FileError};

    #[test]
    fn test_load_each_envelope() {
        let runtime = create_runtime();
        let bodies = [
            r#"[{"id": "a", "name": "a.pdf", "size": 1}, {"id": "b", "name": "b.pdf", "size": 2}]"#,
            r#"{"data": {"files": [{"id": "a", "name": "a.pdf", "size": 1}, {"id": "b", "name": "b.pdf", "size": 2}]}}"#,
            r#"{"files": [{"id": "a", "name": "a.pdf", "size": 1}, {"id": "b", "name": "b.pdf", "size": 2}]}"#,
        ];

        for body in bodies {
            let fake = Rc::new(FakeEndpoint::new());
            fake.set_list_body(body);
            let files = ProjectFiles::new(fake, Some("p1".into()), Toasts::new(), None);

            assert_eq!(block_on(files.load()), Ok(2));
            assert_eq!(files.store.ids(), vec!["a", "b"]);
        }
        runtime.dispose();
    }

    #[test]
    fn test_load_nested_scenario() {
        let runtime = create_runtime();
        let fake = Rc::new(FakeEndpoint::new());
        fake.set_list_body(r#"{"data": {"files": [{"id": "x", "name": "r.pdf", "size": 2048}]}}"#);
        let files = ProjectFiles::new(fake, Some("p1".into()), Toasts::new(), None);

        block_on(files.load()).unwrap();

        assert_eq!(
            files.store.snapshot(),
            vec![FileAsset {
                id: "x".into(),
                name: "r.pdf".into(),
                mime_type: None,
                size: 2048,
                url: None,
                created_at: None,
            }]
        );
        runtime.dispose();
    }

    #[test]
    fn test_load_without_project_is_noop() {
        let runtime = create_runtime();
        let fake = Rc::new(FakeEndpoint::with_files(&["a"]));
        let toasts = Toasts::new();
        let files = ProjectFiles::new(Rc::clone(&fake), None, toasts, None);

        assert_eq!(block_on(files.load()), Ok(0));
        assert!(files.store.is_empty());
        assert_eq!(fake.list_calls.get(), 0);
        assert!(toasts.snapshot().is_empty());
        runtime.dispose();
    }

    #[test]
    fn test_load_failure_reports_and_keeps_store() {
        let runtime = create_runtime();
        let fake = Rc::new(FakeEndpoint::new());
        fake.set_list_body(r#"{"success": false, "message": "Project not found"}"#);
        let toasts = Toasts::new();
        let files = ProjectFiles::new(fake, Some("p1".into()), toasts, None);

        assert_eq!(
            block_on(files.load()),
            Err(FileError::remote("Project not found"))
        );
        assert!(files.store.is_empty());
        assert_eq!(toasts.snapshot()[0].message, "Project not found");
        runtime.dispose();
    }

    #[test]
    fn test_load_malformed_is_reported() {
        let runtime = create_runtime();
        let fake = Rc::new(FakeEndpoint::new());
        fake.set_list_body(r#"{"results": []}"#);
        let toasts = Toasts::new();
        let files = ProjectFiles::new(fake, Some("p1".into()), toasts, None);

        assert!(matches!(
            block_on(files.load()),
            Err(FileError::MalformedResponse(_))
        ));
        assert_eq!(toasts.snapshot()[0].message, LIST_FAILED_MESSAGE);
        runtime.dispose();
    }

    #[test]
    fn test_upload_and_delete_share_the_store() {
        let runtime = create_runtime();
        let fake = Rc::new(FakeEndpoint::with_files(&["a", "b"]));
        let files = ProjectFiles::new(Rc::clone(&fake), Some("p1".into()), Toasts::new(), None);
        block_on(files.load()).unwrap();

        block_on(files.ingestion.ingest(vec!["c.md".into()])).unwrap();
        assert_eq!(files.store.len(), 3);

        block_on(files.deletion.request_delete("a")).unwrap();
        let ids = files.store.ids();
        assert_eq!(ids.len(), 2);
        assert!(!ids.contains(&"a".to_string()));
        assert_eq!(ids, fake.remote_files().iter().map(|f| f.id.clone()).collect::<Vec<_>>());
        runtime.dispose();
    }
}
