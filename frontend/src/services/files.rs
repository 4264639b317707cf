//! HTTP client for the project file service.
//!
//! Three single-attempt calls (list, upload, delete) with bearer auth.
//! Response decoding is kept separate from transport so that envelope
//! handling works (and is tested) without a browser.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use web_sys::{File, FormData};

use super::credentials::{bearer_header, CredentialSource};
use crate::types::{DeleteReceipt, FileAsset, FileError, FileResult, UploadReceipt};

/// Remote operations on project files.
///
/// `Upload` is the blob type the implementation can send: browser
/// `File`s for [`FileApi`], anything convenient for fakes.
#[allow(async_fn_in_trait)]
pub trait FileEndpoint {
    type Upload;

    /// Check that a credential is available, without any network call.
    fn authorize(&self) -> FileResult<()>;

    async fn list(&self, project_id: &str) -> FileResult<Vec<FileAsset>>;

    async fn upload(&self, project_id: &str, files: Vec<Self::Upload>)
        -> FileResult<UploadReceipt>;

    async fn delete(&self, file_id: &str) -> FileResult<DeleteReceipt>;
}

// =============================================================================
// Envelopes
// =============================================================================

/// Known shapes of a list response.
///
/// The backend has shipped all three; anything else is malformed.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope {
    /// `[...]`
    Bare(Vec<FileAsset>),
    /// `{"data": {"files": [...]}}`
    Nested { data: FilesPayload },
    /// `{"files": [...]}`
    Flat { files: Vec<FileAsset> },
}

#[derive(Debug, Deserialize)]
pub struct FilesPayload {
    pub files: Vec<FileAsset>,
}

impl ListEnvelope {
    pub fn into_files(self) -> Vec<FileAsset> {
        match self {
            ListEnvelope::Bare(files) => files,
            ListEnvelope::Nested { data } => data.files,
            ListEnvelope::Flat { files } => files,
        }
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a list response.
pub fn decode_list(status: u16, body: &str) -> FileResult<Vec<FileAsset>> {
    let value = check_response(status, body)?.ok_or_else(|| {
        let reason = if body.trim().is_empty() { "empty body" } else { "body is not JSON" };
        FileError::MalformedResponse(reason.to_string())
    })?;

    serde_json::from_value::<ListEnvelope>(value)
        .map(ListEnvelope::into_files)
        .map_err(|_| FileError::MalformedResponse("unrecognized file list envelope".to_string()))
}

/// Decode an upload response. Any 2xx body not reporting failure is a
/// success; an empty or non-JSON one gives a zero count.
pub fn decode_upload(status: u16, body: &str) -> FileResult<UploadReceipt> {
    let Some(value) = check_response(status, body)? else {
        return Ok(UploadReceipt {
            count: 0,
            message: String::new(),
        });
    };

    if let Some(files) = value.as_array() {
        return Ok(UploadReceipt {
            count: files.len(),
            message: String::new(),
        });
    }

    let data = value.get("data");
    let count = data
        .and_then(|d| d.get("count"))
        .or_else(|| value.get("count"))
        .and_then(Value::as_u64)
        .map(|n| n as usize)
        .or_else(|| {
            data.and_then(|d| d.get("files"))
                .or_else(|| value.get("files"))
                .and_then(Value::as_array)
                .map(Vec::len)
        })
        .unwrap_or(0);

    Ok(UploadReceipt {
        count,
        message: message_of(Some(&value)),
    })
}

/// Decode a delete response. An empty or non-JSON 2xx body is a success.
pub fn decode_delete(status: u16, body: &str) -> FileResult<DeleteReceipt> {
    if status == 404 {
        return Err(FileError::NotFound);
    }
    let value = check_response(status, body)?;
    Ok(DeleteReceipt {
        message: message_of(value.as_ref()),
    })
}

/// Map status and `"success": false` to errors. Returns the body when it
/// parses as JSON.
fn check_response(status: u16, body: &str) -> FileResult<Option<Value>> {
    let value = if body.trim().is_empty() {
        None
    } else {
        serde_json::from_str::<Value>(body).ok()
    };

    match status {
        200..=299 => {}
        401 | 403 => return Err(FileError::Unauthorized),
        _ => return Err(FileError::remote(message_of(value.as_ref()))),
    }

    if let Some(v) = &value {
        if v.get("success").and_then(Value::as_bool) == Some(false) {
            return Err(FileError::remote(message_of(Some(v))));
        }
    }

    Ok(value)
}

fn message_of(value: Option<&Value>) -> String {
    value
        .and_then(|v| v.get("message").or_else(|| v.get("error")))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

// =============================================================================
// HTTP transport
// =============================================================================

/// [`FileEndpoint`] over `fetch`.
#[derive(Debug, Clone)]
pub struct FileApi<C> {
    base_url: String,
    credentials: C,
}

impl<C: CredentialSource> FileApi<C> {
    pub fn new(base_url: impl Into<String>, credentials: C) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl<C: CredentialSource> FileEndpoint for FileApi<C> {
    type Upload = File;

    fn authorize(&self) -> FileResult<()> {
        bearer_header(&self.credentials).map(|_| ())
    }

    async fn list(&self, project_id: &str) -> FileResult<Vec<FileAsset>> {
        let auth = bearer_header(&self.credentials)?;

        let request = Request::post(&self.url("/api/files/list"))
            .header("Authorization", &auth)
            .json(&json!({ "projectId": project_id }))
            .map_err(|e| FileError::Network(format!("Failed to build request: {}", e)))?;

        let (status, body) = send(request).await?;
        decode_list(status, &body)
    }

    async fn upload(&self, project_id: &str, files: Vec<File>) -> FileResult<UploadReceipt> {
        let auth = bearer_header(&self.credentials)?;

        let form_data = FormData::new()
            .map_err(|e| FileError::Network(format!("Failed to create FormData: {:?}", e)))?;
        form_data
            .append_with_str("projectId", project_id)
            .map_err(|e| FileError::Network(format!("Failed to append field: {:?}", e)))?;
        for file in &files {
            form_data
                .append_with_blob_and_filename("files", file, &file.name())
                .map_err(|e| FileError::Network(format!("Failed to append file: {:?}", e)))?;
        }

        let request = Request::post(&self.url("/api/files/upload"))
            .header("Authorization", &auth)
            .body(form_data)
            .map_err(|e| FileError::Network(format!("Failed to build request: {}", e)))?;

        let (status, body) = send(request).await?;
        decode_upload(status, &body)
    }

    async fn delete(&self, file_id: &str) -> FileResult<DeleteReceipt> {
        let auth = bearer_header(&self.credentials)?;

        let url = self.url(&format!("/api/files/{}", urlencoding::encode(file_id)));
        let response = Request::delete(&url)
            .header("Authorization", &auth)
            .send()
            .await
            .map_err(|e| FileError::Network(e.to_string()))?;

        let (status, body) = read_body(response).await?;
        decode_delete(status, &body)
    }
}

async fn send(request: Request) -> FileResult<(u16, String)> {
    let response = request
        .send()
        .await
        .map_err(|e| FileError::Network(e.to_string()))?;
    read_body(response).await
}

async fn read_body(response: Response) -> FileResult<(u16, String)> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FileError::Network(e.to_string()))?;
    Ok((status, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(files: &[FileAsset]) -> Vec<&str> {
        files.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_list_bare_array() {
        let body = r#"[{"id": "a", "name": "one.pdf", "size": 1}, {"id": "b", "name": "two.md", "size": 2}]"#;
        let files = decode_list(200, body).unwrap();
        assert_eq!(ids(&files), vec!["a", "b"]);
    }

    #[test]
    fn test_list_nested_envelope() {
        let body = r#"{"success": true, "data": {"files": [{"id": "x", "name": "r.pdf", "size": 2048}]}}"#;
        let files = decode_list(200, body).unwrap();

        assert_eq!(
            files,
            vec![FileAsset {
                id: "x".into(),
                name: "r.pdf".into(),
                mime_type: None,
                size: 2048,
                url: None,
                created_at: None,
            }]
        );
    }

    #[test]
    fn test_list_flat_envelope() {
        let body = r#"{"files": [{"id": 7, "name": "notes.txt", "size": 12, "createdAt": "2024-01-02T03:04:05Z"}]}"#;
        let files = decode_list(200, body).unwrap();
        assert_eq!(ids(&files), vec!["7"]);
        assert_eq!(files[0].created_at.as_deref(), Some("2024-01-02T03:04:05Z"));
    }

    #[test]
    fn test_list_tolerates_null_fields() {
        let body = r#"[{"id": "a", "name": null, "size": 1}, {"id": "b", "name": "b.md", "size": null}]"#;
        let files = decode_list(200, body).unwrap();
        assert_eq!(ids(&files), vec!["a", "b"]);
        assert_eq!(files[1].size, 0);
    }

    #[test]
    fn test_list_unknown_shapes_are_malformed() {
        for body in [
            r#"{"items": []}"#,
            r#"{"data": []}"#,
            r#"{"data": {"items": []}}"#,
            r#""files""#,
            r#"42"#,
            r#"[{"name": "no-id.pdf"}]"#,
            "not json at all",
            "",
        ] {
            assert!(
                matches!(decode_list(200, body), Err(FileError::MalformedResponse(_))),
                "expected malformed for {:?}",
                body
            );
        }
    }

    #[test]
    fn test_list_reported_failure() {
        let body = r#"{"success": false, "message": "Project archived"}"#;
        assert_eq!(
            decode_list(200, body),
            Err(FileError::remote("Project archived"))
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(decode_list(401, ""), Err(FileError::Unauthorized));
        assert_eq!(decode_upload(403, "{}"), Err(FileError::Unauthorized));
        assert_eq!(
            decode_list(500, r#"{"error": "database down"}"#),
            Err(FileError::remote("database down"))
        );
        assert_eq!(
            decode_upload(502, "<html>Bad Gateway</html>"),
            Err(FileError::remote(""))
        );
    }

    #[test]
    fn test_upload_receipt() {
        let nested = r#"{"success": true, "message": "2 files uploaded", "data": {"count": 2}}"#;
        assert_eq!(
            decode_upload(200, nested).unwrap(),
            UploadReceipt {
                count: 2,
                message: "2 files uploaded".into()
            }
        );

        let partial = r#"{"success": true, "message": "1 of 2 files uploaded", "files": [{"id": "a"}]}"#;
        assert_eq!(decode_upload(201, partial).unwrap().count, 1);

        let bare = r#"[{"id": "a"}, {"id": "b"}, {"id": "c"}]"#;
        assert_eq!(decode_upload(200, bare).unwrap().count, 3);

        // Stored files are not lost to an unexpected success body
        for (status, body) in [(200, ""), (204, ""), (201, "Created")] {
            assert_eq!(
                decode_upload(status, body),
                Ok(UploadReceipt {
                    count: 0,
                    message: String::new()
                })
            );
        }
        assert_eq!(
            decode_upload(200, r#"{"success": false, "error": "Quota exceeded"}"#),
            Err(FileError::remote("Quota exceeded"))
        );
    }

    #[test]
    fn test_delete_mapping() {
        assert_eq!(
            decode_delete(200, r#"{"success": true, "message": "Deleted"}"#).unwrap(),
            DeleteReceipt {
                message: "Deleted".into()
            }
        );
        assert_eq!(
            decode_delete(204, "").unwrap(),
            DeleteReceipt {
                message: String::new()
            }
        );
        assert_eq!(
            decode_delete(200, "OK").unwrap(),
            DeleteReceipt {
                message: String::new()
            }
        );
        assert_eq!(decode_delete(404, ""), Err(FileError::NotFound));
        assert_eq!(
            decode_delete(200, r#"{"success": false, "message": "Locked"}"#),
            Err(FileError::remote("Locked"))
        );
        assert_eq!(
            decode_delete(500, ""),
            Err(FileError::remote(""))
        );
    }
}
