//! Deletion of single files with per-file busy markers.

use std::collections::HashSet;
use std::rc::Rc;

use leptos::*;

use super::{FileStore, Toasts};
use crate::config::{DELETE_FAILED_MESSAGE, DELETE_SUCCESS_MESSAGE};
use crate::services::FileEndpoint;
use crate::types::{DeleteReceipt, FileError, FileResult};

/// Deletes files and drops them from the store once the service confirms.
///
/// The set of in-flight ids is the busy state: membership means a delete
/// for that id is pending. Different ids may be deleted concurrently.
pub struct DeletionCoordinator<E> {
    endpoint: Rc<E>,
    store: FileStore,
    deleting: RwSignal<HashSet<String>>,
    toasts: Toasts,
}

impl<E> Clone for DeletionCoordinator<E> {
    fn clone(&self) -> Self {
        Self {
            endpoint: Rc::clone(&self.endpoint),
            store: self.store,
            deleting: self.deleting,
            toasts: self.toasts,
        }
    }
}

impl<E: FileEndpoint> DeletionCoordinator<E> {
    pub fn new(endpoint: Rc<E>, store: FileStore, toasts: Toasts) -> Self {
        Self {
            endpoint,
            store,
            deleting: create_rw_signal(HashSet::new()),
            toasts,
        }
    }

    /// Whether a delete for `id` is in flight. Tracked, for use in views.
    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.with(|ids| ids.contains(id))
    }

    /// Ids currently being deleted.
    pub fn in_flight(&self) -> HashSet<String> {
        self.deleting.get_untracked()
    }

    /// Delete `file_id` on the service, then locally.
    ///
    /// A second request for an id that is already in flight is refused
    /// without a network call.
    pub async fn request_delete(&self, file_id: &str) -> FileResult<DeleteReceipt> {
        if self.deleting.with_untracked(|ids| ids.contains(file_id)) {
            return Err(FileError::AlreadyDeleting(file_id.to_string()));
        }

        self.deleting.update(|ids| {
            ids.insert(file_id.to_string());
        });
        log::info!("🗑️ Deleting file {}", file_id);

        let outcome = self.endpoint.delete(file_id).await;
        match &outcome {
            Ok(receipt) => {
                self.store.remove(file_id);
                let message = if receipt.message.trim().is_empty() {
                    DELETE_SUCCESS_MESSAGE.to_string()
                } else {
                    receipt.message.clone()
                };
                self.toasts.info(message);
            }
            Err(e) => {
                log::error!("❌ Delete of {} failed: {}", file_id, e);
                self.toasts.error(e.user_message(DELETE_FAILED_MESSAGE));
            }
        }

        self.deleting.update(|ids| {
            ids.remove(file_id);
        });
        outcome
    }
}
