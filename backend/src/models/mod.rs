//! Domain models for the file service.
//!
//! - [`StoredFile`] - metadata persisted next to each file's content
//! - [`FileRecord`] - the shape clients receive

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Metadata of a stored file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFile {
    /// Unique identifier (UUID v4)
    pub id: String,
    /// Owning project
    pub project_id: String,
    /// Original file name
    pub name: String,
    /// Content type sent by the client, if any
    pub mime_type: Option<String>,
    /// Size in bytes
    pub size: u64,
    /// Upload time
    pub created_at: DateTime<Utc>,
}

/// File as listed to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    pub size: u64,
    pub url: String,
    pub created_at: String,
}

impl FileRecord {
    /// Build the client view; `public_url` is the server's externally
    /// reachable base URL.
    pub fn from_stored(file: &StoredFile, public_url: &str) -> Self {
        FileRecord {
            id: file.id.clone(),
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
            size: file.size,
            url: format!(
                "{}/api/files/{}/content",
                public_url.trim_end_matches('/'),
                file.id
            ),
            created_at: file.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_wire_format() {
        let stored = StoredFile {
            id: "f1".into(),
            project_id: "p1".into(),
            name: "brief.pdf".into(),
            mime_type: Some("application/pdf".into()),
            size: 2048,
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap(),
        };

        let record = FileRecord::from_stored(&stored, "http://localhost:3000/");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], "f1");
        assert_eq!(json["type"], "application/pdf");
        assert_eq!(json["size"], 2048);
        assert_eq!(json["url"], "http://localhost:3000/api/files/f1/content");
        assert_eq!(json["createdAt"], "2024-03-05T10:00:00Z");
    }
}
