//! REST API types.
//!
//! Field names are camelCase on the wire, matching the frontend client.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::EnvelopeStyle;
use crate::models::FileRecord;

/// Body of `POST /api/files/list`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest {
    pub project_id: String,
}

/// Body of a successful upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub data: UploadData,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadData {
    pub count: usize,
    pub files: Vec<FileRecord>,
}

impl UploadResponse {
    /// Summarize stored files and the names of skipped empty parts.
    pub fn new(files: Vec<FileRecord>, skipped: &[String]) -> Self {
        let mut message = format!(
            "{} file{} uploaded",
            files.len(),
            if files.len() == 1 { "" } else { "s" }
        );
        if !skipped.is_empty() {
            message.push_str(&format!(" ({} empty skipped: {})", skipped.len(), skipped.join(", ")));
        }

        Self {
            success: true,
            message,
            data: UploadData {
                count: files.len(),
                files,
            },
        }
    }
}

/// Shape a file listing according to the configured envelope.
pub fn list_envelope(style: EnvelopeStyle, files: Vec<FileRecord>) -> Value {
    match style {
        EnvelopeStyle::Bare => json!(files),
        EnvelopeStyle::Nested => json!({ "success": true, "data": { "files": files } }),
        EnvelopeStyle::Flat => json!({ "success": true, "files": files }),
    }
}
