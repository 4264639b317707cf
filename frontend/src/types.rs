//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **File Types** - Project file records and their display helpers
//! - **Toast Types** - Severity-tagged user notifications
//! - **API Types** - Results of remote file operations
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::config::{NETWORK_FAILED_MESSAGE, NO_PROJECT_MESSAGE, UNAUTHORIZED_MESSAGE};

// =============================================================================
// File Types
// =============================================================================

/// A file bound to a project, as reported by the file service.
///
/// Records are never edited locally: the store replaces them wholesale
/// on refresh and drops them on confirmed deletion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAsset {
    /// Identifier assigned by the file service
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Display name, usually with an extension
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// MIME or provider type, may be missing or generic
    #[serde(rename = "type", alias = "mimeType", default)]
    pub mime_type: Option<String>,
    /// Size in bytes
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: u64,
    /// Retrieval location (never fetched by the app itself)
    #[serde(default)]
    pub url: Option<String>,
    /// Creation timestamp (RFC 3339 when well-formed)
    #[serde(alias = "created_at", default)]
    pub created_at: Option<String>,
}

impl FileAsset {
    /// Lowercased extension of the file name, if any.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Display category, from the type when it is specific enough,
    /// otherwise from the extension.
    pub fn kind(&self) -> FileKind {
        if let Some(kind) = self.mime_type.as_deref().and_then(FileKind::from_mime) {
            return kind;
        }
        self.extension()
            .map(|ext| FileKind::from_extension(&ext))
            .unwrap_or(FileKind::Other)
    }

    /// Human-readable size (`2.0 KB`).
    pub fn size_label(&self) -> String {
        format_size(self.size)
    }

    /// Creation date for display, `None` hides the date entirely.
    pub fn created_label(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        Some(match chrono::DateTime::parse_from_rfc3339(raw) {
            Ok(date) => date.format("%b %-d, %Y").to_string(),
            Err(_) => raw.to_string(),
        })
    }
}

/// Accepts `"42"` as well as `42` for ids.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

/// `null` reads as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Format a byte count with base-1024 units.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Display category of a project file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Document,
    Spreadsheet,
    Text,
    Image,
    Other,
}

impl FileKind {
    /// Recognized MIME types. Generic or unknown types return `None`.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_ascii_lowercase();
        let kind = match mime.as_str() {
            "application/pdf" => FileKind::Pdf,
            "application/msword"
            | "application/rtf"
            | "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            | "application/vnd.oasis.opendocument.text" => FileKind::Document,
            "text/csv"
            | "application/vnd.ms-excel"
            | "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                FileKind::Spreadsheet
            }
            m if m.starts_with("image/") => FileKind::Image,
            m if m.starts_with("text/") => FileKind::Text,
            _ => return None,
        };
        Some(kind)
    }

    /// Category from a lowercased extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "pdf" => FileKind::Pdf,
            "doc" | "docx" | "odt" | "rtf" => FileKind::Document,
            "csv" | "xls" | "xlsx" | "ods" => FileKind::Spreadsheet,
            "txt" | "md" | "markdown" => FileKind::Text,
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" => FileKind::Image,
            _ => FileKind::Other,
        }
    }

    /// Get emoji icon for display.
    pub fn icon(&self) -> &'static str {
        match self {
            FileKind::Pdf => "📕",
            FileKind::Document => "📝",
            FileKind::Spreadsheet => "📊",
            FileKind::Text => "📄",
            FileKind::Image => "🖼️",
            FileKind::Other => "📎",
        }
    }
}

// =============================================================================
// Toast Types
// =============================================================================

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    /// Informational / success message
    Info,
    /// Error message
    Error,
}

impl ToastLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast-info",
            ToastLevel::Error => "toast-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            ToastLevel::Info => "ℹ️",
            ToastLevel::Error => "❌",
        }
    }
}

/// A single notification shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Identifier used for dismissal
    pub id: u64,
    /// Severity level
    pub level: ToastLevel,
    /// Message text
    pub message: String,
}

// =============================================================================
// API Types
// =============================================================================

/// Outcome of a successful upload call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadReceipt {
    /// Number of files the backend reports as stored
    pub count: usize,
    /// Backend message, possibly empty
    pub message: String,
}

/// Outcome of a successful delete call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteReceipt {
    /// Backend message, possibly empty
    pub message: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors of the project file operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FileError {
    /// No project is open.
    #[error("No project context")]
    MissingContext,

    /// No credential, or the backend rejected it.
    #[error("Unauthorized")]
    Unauthorized,

    /// The backend reported a failure.
    #[error("Remote error: {message}")]
    RemoteError { message: String },

    /// The payload matched no known envelope.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The target file does not exist.
    #[error("File not found")]
    NotFound,

    /// Transport failure (unreachable host, reset connection).
    #[error("Network error: {0}")]
    Network(String),

    /// An ingestion was submitted without files.
    #[error("No files to upload")]
    EmptyBatch,

    /// A delete for this id is already in flight.
    #[error("File {0} is already being deleted")]
    AlreadyDeleting(String),
}

impl FileError {
    pub fn remote(message: impl Into<String>) -> Self {
        FileError::RemoteError {
            message: message.into(),
        }
    }

    /// Text for the toast surface: the backend message when there is one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            FileError::RemoteError { message } if !message.trim().is_empty() => {
                message.trim().to_string()
            }
            FileError::Network(_) => NETWORK_FAILED_MESSAGE.to_string(),
            FileError::Unauthorized => UNAUTHORIZED_MESSAGE.to_string(),
            FileError::MissingContext => NO_PROJECT_MESSAGE.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Result type alias for file operations.
pub type FileResult<T> = Result<T, FileError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(name: &str, mime: Option<&str>) -> FileAsset {
        FileAsset {
            id: "1".into(),
            name: name.into(),
            mime_type: mime.map(str::to_string),
            size: 0,
            url: None,
            created_at: None,
        }
    }

    #[test]
    fn test_asset_deserialization_minimal() {
        let json = r#"{"id": "x", "name": "r.pdf", "size": 2048}"#;
        let asset: FileAsset = serde_json::from_str(json).unwrap();

        assert_eq!(asset.id, "x");
        assert_eq!(asset.name, "r.pdf");
        assert_eq!(asset.size, 2048);
        assert_eq!(asset.mime_type, None);
        assert_eq!(asset.created_at, None);
    }

    #[test]
    fn test_asset_deserialization_full() {
        let json = r#"{
            "id": 17,
            "name": "brief.docx",
            "type": "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            "size": 1536,
            "url": "http://localhost:3000/api/files/17/content",
            "createdAt": "2024-03-05T10:00:00Z"
        }"#;
        let asset: FileAsset = serde_json::from_str(json).unwrap();

        assert_eq!(asset.id, "17");
        assert_eq!(asset.kind(), FileKind::Document);
        assert_eq!(asset.size_label(), "1.5 KB");
        assert_eq!(asset.created_label().as_deref(), Some("Mar 5, 2024"));
    }

    #[test]
    fn test_null_name_and_size_read_as_defaults() {
        let json = r#"{"id": "a", "name": null, "size": null, "type": null}"#;
        let asset: FileAsset = serde_json::from_str(json).unwrap();

        assert_eq!(asset.name, "");
        assert_eq!(asset.size, 0);
        assert_eq!(asset.kind(), FileKind::Other);
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let json = r#"{"name": "orphan.txt", "size": 3}"#;
        assert!(serde_json::from_str::<FileAsset>(json).is_err());
    }

    #[test]
    fn test_kind_falls_back_to_extension() {
        assert_eq!(asset("specs.PDF", None).kind(), FileKind::Pdf);
        assert_eq!(
            asset("notes.md", Some("application/octet-stream")).kind(),
            FileKind::Text
        );
        assert_eq!(asset("photo.jpg", Some("image/jpeg")).kind(), FileKind::Image);
        assert_eq!(asset("README", None).kind(), FileKind::Other);
        assert_eq!(asset(".env", None).kind(), FileKind::Other);
    }

    #[test]
    fn test_created_label() {
        let mut file = asset("a.txt", None);
        assert_eq!(file.created_label(), None);

        file.created_at = Some("yesterday".into());
        assert_eq!(file.created_label().as_deref(), Some("yesterday"));

        file.created_at = Some("   ".into());
        assert_eq!(file.created_label(), None);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_user_message() {
        assert_eq!(
            FileError::remote("Quota exceeded").user_message("fallback"),
            "Quota exceeded"
        );
        assert_eq!(FileError::remote("  ").user_message("fallback"), "fallback");
        assert_eq!(FileError::NotFound.user_message("fallback"), "fallback");
        assert_eq!(
            FileError::Network("connection refused".into()).user_message("fallback"),
            NETWORK_FAILED_MESSAGE
        );
    }
}
