//! In-memory file service for coordinator tests.

use std::cell::{Cell, RefCell};

use futures::channel::oneshot;
use leptos::*;

use crate::services::{bearer_header, decode_list, FileEndpoint, StaticToken};
use crate::types::{DeleteReceipt, FileAsset, FileError, FileResult, UploadReceipt};

/// Stores uploads as records named after the given strings.
pub(crate) struct FakeEndpoint {
    credentials: StaticToken,
    remote: RefCell<Vec<FileAsset>>,
    list_body: RefCell<Option<String>>,
    upload_error: RefCell<Option<FileError>>,
    delete_error: RefCell<Option<FileError>>,
    delete_gate: RefCell<Option<oneshot::Receiver<()>>>,
    hide_uploads: Cell<bool>,
    watched_flag: Cell<Option<RwSignal<bool>>>,
    next_id: Cell<u32>,
    pub list_calls: Cell<usize>,
    pub upload_calls: Cell<usize>,
    pub delete_calls: Cell<usize>,
    pub flag_during_upload: RefCell<Vec<bool>>,
    pub flag_during_authorize: RefCell<Vec<bool>>,
}

impl FakeEndpoint {
    pub fn new() -> Self {
        Self {
            credentials: StaticToken::new("test-token"),
            remote: RefCell::new(Vec::new()),
            list_body: RefCell::new(None),
            upload_error: RefCell::new(None),
            delete_error: RefCell::new(None),
            delete_gate: RefCell::new(None),
            hide_uploads: Cell::new(false),
            watched_flag: Cell::new(None),
            next_id: Cell::new(1),
            list_calls: Cell::new(0),
            upload_calls: Cell::new(0),
            delete_calls: Cell::new(0),
            flag_during_upload: RefCell::new(Vec::new()),
            flag_during_authorize: RefCell::new(Vec::new()),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            credentials: StaticToken::none(),
            ..Self::new()
        }
    }

    pub fn with_files(ids: &[&str]) -> Self {
        let fake = Self::new();
        fake.remote.replace(ids.iter().map(|id| record(id, &format!("{}.pdf", id))).collect());
        fake
    }

    pub fn remote_files(&self) -> Vec<FileAsset> {
        self.remote.borrow().clone()
    }

    /// Serve this raw body for every list call.
    pub fn set_list_body(&self, body: &str) {
        self.list_body.replace(Some(body.to_string()));
    }

    pub fn fail_uploads(&self, error: FileError) {
        self.upload_error.replace(Some(error));
    }

    pub fn fail_deletes(&self, error: FileError) {
        self.delete_error.replace(Some(error));
    }

    /// Accept uploads without listing them afterwards.
    pub fn hide_uploads_from_listing(&self) {
        self.hide_uploads.set(true);
    }

    /// Record the flag's value whenever a credential check or an upload
    /// reaches the service.
    pub fn watch_flag(&self, flag: RwSignal<bool>) {
        self.watched_flag.set(Some(flag));
    }

    /// Keep the next delete pending until `gate` fires.
    pub fn hold_next_delete(&self, gate: oneshot::Receiver<()>) {
        self.delete_gate.replace(Some(gate));
    }
}

fn record(id: &str, name: &str) -> FileAsset {
    FileAsset {
        id: id.to_string(),
        name: name.to_string(),
        mime_type: None,
        size: name.len() as u64,
        url: None,
        created_at: Some("2024-05-01T12:00:00Z".to_string()),
    }
}

impl FileEndpoint for FakeEndpoint {
    type Upload = String;

    fn authorize(&self) -> FileResult<()> {
        if let Some(flag) = self.watched_flag.get() {
            self.flag_during_authorize.borrow_mut().push(flag.get_untracked());
        }
        bearer_header(&self.credentials).map(|_| ())
    }

    async fn list(&self, _project_id: &str) -> FileResult<Vec<FileAsset>> {
        bearer_header(&self.credentials)?;
        self.list_calls.set(self.list_calls.get() + 1);

        if let Some(body) = self.list_body.borrow().as_deref() {
            return decode_list(200, body);
        }
        Ok(self.remote_files())
    }

    async fn upload(&self, _project_id: &str, files: Vec<String>) -> FileResult<UploadReceipt> {
        if let Some(flag) = self.watched_flag.get() {
            self.flag_during_upload.borrow_mut().push(flag.get_untracked());
        }
        bearer_header(&self.credentials)?;
        self.upload_calls.set(self.upload_calls.get() + 1);
        if let Some(error) = self.upload_error.borrow().clone() {
            return Err(error);
        }

        if !self.hide_uploads.get() {
            let mut remote = self.remote.borrow_mut();
            for name in &files {
                let n = self.next_id.get();
                self.next_id.set(n + 1);
                remote.push(record(&format!("srv-{}", n), name));
            }
        }

        Ok(UploadReceipt {
            count: files.len(),
            message: format!("{} file(s) stored", files.len()),
        })
    }

    async fn delete(&self, file_id: &str) -> FileResult<DeleteReceipt> {
        bearer_header(&self.credentials)?;
        self.delete_calls.set(self.delete_calls.get() + 1);

        let gate = self.delete_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if let Some(error) = self.delete_error.borrow().clone() {
            return Err(error);
        }

        let mut remote = self.remote.borrow_mut();
        let before = remote.len();
        remote.retain(|f| f.id != file_id);
        if remote.len() == before {
            return Err(FileError::NotFound);
        }
        Ok(DeleteReceipt {
            message: "Deleted".to_string(),
        })
    }
}
