//! Local snapshot of a project's files.
//!
//! Only two mutations exist: a full refresh from the file service and the
//! removal of a file the service confirmed as deleted. Uploaded files are
//! never inserted locally; they show up through the refresh that follows.

use std::collections::HashSet;

use leptos::*;

use crate::services::FileEndpoint;
use crate::types::{FileAsset, FileResult};

/// Reactive, ordered list of [`FileAsset`]s with unique ids.
#[derive(Clone, Copy, Debug)]
pub struct FileStore {
    files: RwSignal<Vec<FileAsset>>,
}

impl FileStore {
    pub fn new() -> Self {
        Self {
            files: create_rw_signal(Vec::new()),
        }
    }

    /// Read-only handle for rendering.
    pub fn files(&self) -> Signal<Vec<FileAsset>> {
        self.files.into()
    }

    /// Current records, without tracking.
    pub fn snapshot(&self) -> Vec<FileAsset> {
        self.files.get_untracked()
    }

    pub fn ids(&self) -> Vec<String> {
        self.files
            .with_untracked(|files| files.iter().map(|f| f.id.clone()).collect())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.files.with_untracked(|files| files.iter().any(|f| f.id == id))
    }

    pub fn len(&self) -> usize {
        self.files.with_untracked(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch the project's files and replace the snapshot with them.
    ///
    /// On failure the snapshot is left as it was.
    pub async fn refresh<E: FileEndpoint>(&self, endpoint: &E, project_id: &str) -> FileResult<usize> {
        let files = endpoint.list(project_id).await?;
        self.replace_all(files);
        let count = self.len();
        log::debug!("📂 Project {}: {} file(s)", project_id, count);
        Ok(count)
    }

    /// Replace everything. Repeated ids keep their first occurrence.
    pub(crate) fn replace_all(&self, files: Vec<FileAsset>) {
        let mut seen = HashSet::with_capacity(files.len());
        let unique: Vec<FileAsset> = files
            .into_iter()
            .filter(|f| {
                let fresh = seen.insert(f.id.clone());
                if !fresh {
                    log::warn!("⚠️ Duplicate file id in listing: {}", f.id);
                }
                fresh
            })
            .collect();
        self.files.set(unique);
    }

    /// Drop the record with `id`. Returns whether one was present.
    pub(crate) fn remove(&self, id: &str) -> bool {
        let mut removed = false;
        self.files.update(|files| {
            let before = files.len();
            files.retain(|f| f.id != id);
            removed = files.len() != before;
        });
        removed
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}
