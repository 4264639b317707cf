//! Upload of file batches coming from the picker or from a drop.

use std::rc::Rc;

use leptos::*;

use super::{FileStore, Toasts};
use crate::config::{LIST_FAILED_MESSAGE, UPLOAD_FAILED_MESSAGE};
use crate::services::FileEndpoint;
use crate::types::{FileError, FileResult, UploadReceipt};

/// Sends batches to the file service and refreshes the store afterwards.
///
/// Owns the `uploading` flag. The flag does not queue anything: entry
/// points check [`is_uploading`](Self::is_uploading) and drop submissions
/// made while a batch is in flight.
pub struct IngestionCoordinator<E> {
    endpoint: Rc<E>,
    project_id: Option<String>,
    store: FileStore,
    uploading: RwSignal<bool>,
    toasts: Toasts,
    on_files_changed: Option<Callback<()>>,
}

impl<E> Clone for IngestionCoordinator<E> {
    fn clone(&self) -> Self {
        Self {
            endpoint: Rc::clone(&self.endpoint),
            project_id: self.project_id.clone(),
            store: self.store,
            uploading: self.uploading,
            toasts: self.toasts,
            on_files_changed: self.on_files_changed.clone(),
        }
    }
}

impl<E: FileEndpoint> IngestionCoordinator<E> {
    pub fn new(
        endpoint: Rc<E>,
        project_id: Option<String>,
        store: FileStore,
        toasts: Toasts,
        on_files_changed: Option<Callback<()>>,
    ) -> Self {
        Self {
            endpoint,
            project_id,
            store,
            uploading: create_rw_signal(false),
            toasts,
            on_files_changed,
        }
    }

    /// Reactive `uploading` flag.
    pub fn uploading(&self) -> Signal<bool> {
        self.uploading.into()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading.get_untracked()
    }

    /// Upload `files` to the current project.
    ///
    /// On success the store is refreshed from the service, the
    /// files-changed callback fires and an info toast is posted. On failure
    /// the store is untouched and an error toast is posted. The result is
    /// returned for callers that care; the UI ignores it.
    pub async fn ingest(&self, files: Vec<E::Upload>) -> FileResult<UploadReceipt> {
        let Some(project_id) = self.project_id.as_deref() else {
            log::warn!("⚠️ Upload attempted without a project");
            let err = FileError::MissingContext;
            self.toasts.error(err.user_message(UPLOAD_FAILED_MESSAGE));
            return Err(err);
        };
        if files.is_empty() {
            return Err(FileError::EmptyBatch);
        }
        if let Err(e) = self.endpoint.authorize() {
            log::warn!("⚠️ Upload refused before sending: {}", e);
            self.toasts.error(e.user_message(UPLOAD_FAILED_MESSAGE));
            return Err(e);
        }

        let submitted = files.len();
        self.uploading.set(true);
        log::info!("📤 Uploading {} file(s) to project {}", submitted, project_id);

        let outcome = match self.endpoint.upload(project_id, files).await {
            Ok(receipt) => {
                log::info!("✅ Upload accepted: {} file(s)", receipt.count);

                if let Err(e) = self.store.refresh(&*self.endpoint, project_id).await {
                    log::error!("❌ Refresh after upload failed: {}", e);
                    self.toasts.error(e.user_message(LIST_FAILED_MESSAGE));
                }
                if let Some(callback) = &self.on_files_changed {
                    callback.call(());
                }

                let message = if receipt.message.trim().is_empty() {
                    let count = if receipt.count > 0 { receipt.count } else { submitted };
                    format!("{} file(s) uploaded", count)
                } else {
                    receipt.message.clone()
                };
                self.toasts.info(message);
                Ok(receipt)
            }
            Err(e) => {
                log::error!("❌ Upload failed: {}", e);
                self.toasts.error(e.user_message(UPLOAD_FAILED_MESSAGE));
                Err(e)
            }
        };

        self.uploading.set(false);
        outcome
    }
}
