//! HTTP Server for the project file API.
//!
//! # API Endpoints
//!
//! | Method | Path                       | Description                    |
//! |--------|----------------------------|--------------------------------|
//! | GET    | `/health`                  | Health check                   |
//! | POST   | `/api/files/list`          | List a project's files         |
//! | POST   | `/api/files/upload`        | Upload files (multipart)       |
//! | DELETE | `/api/files/{id}`          | Delete a file                  |
//! | GET    | `/api/files/{id}/content`  | Download a file (no auth)      |

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{header, HeaderMap, Method},
    response::{IntoResponse, Json},
    routing::{delete, get, post},
    Router,
};
use serde_json::{json, Value};
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

use super::auth::authorize;
use super::types::{list_envelope, ListRequest, UploadResponse};
use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{FileRecord, StoredFile};
use crate::storage::FileRegistry;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RwLock<FileRegistry>>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(registry: FileRegistry, config: ServerConfig) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            config: Arc::new(config),
        }
    }

    fn authorize(&self, headers: &HeaderMap) -> ApiResult<()> {
        authorize(headers, self.config.token.as_deref())
    }

    fn record(&self, file: &StoredFile) -> FileRecord {
        FileRecord::from_stored(file, &self.config.public_url)
    }
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    // Permissive CORS for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/files/list", post(list_files))
        .route("/api/files/upload", post(upload_files))
        .route("/api/files/{id}", delete(delete_file))
        .route("/api/files/{id}/content", get(file_content))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let registry = FileRegistry::open(&config.data_dir)?;
    let port = config.port;

    tracing::info!(
        "📂 {} file(s) in {} (envelope: {}, token: {})",
        registry.len(),
        config.data_dir.display(),
        config.envelope,
        if config.token.is_some() { "fixed" } else { "any" }
    );

    let app = router(AppState::new(registry, config));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("🚀 Project files server running on http://localhost:{}", port);
    tracing::info!("   POST   /api/files/list        - List files");
    tracing::info!("   POST   /api/files/upload      - Upload files");
    tracing::info!("   DELETE /api/files/{{id}}        - Delete a file");
    tracing::info!("   GET    /api/files/{{id}}/content - Download a file");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "projectfiles",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// List a project's files
async fn list_files(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ListRequest>,
) -> ApiResult<Json<Value>> {
    state.authorize(&headers)?;

    let project_id = req.project_id.trim();
    if project_id.is_empty() {
        return Err(ApiError::BadRequest("projectId is required".into()));
    }

    let records: Vec<FileRecord> = {
        let registry = state.registry.read().await;
        registry.list(project_id).into_iter().map(|f| state.record(f)).collect()
    };

    tracing::info!("📋 {} file(s) listed for project {}", records.len(), project_id);
    Ok(Json(list_envelope(state.config.envelope, records)))
}

/// A file part read from the multipart body
struct IncomingFile {
    name: String,
    mime_type: Option<String>,
    bytes: Bytes,
}

/// Upload files to a project
async fn upload_files(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    state.authorize(&headers)?;

    let mut project_id: Option<String> = None;
    let mut incoming: Vec<IncomingFile> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Multipart error: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "projectId" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Read error: {}", e)))?;
                project_id = Some(text.trim().to_string()).filter(|p| !p.is_empty());
            }
            "files" => {
                let name = field.file_name().unwrap_or("unnamed").to_string();
                let mime_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Read error: {}", e)))?;
                incoming.push(IncomingFile {
                    name,
                    mime_type,
                    bytes,
                });
            }
            other => tracing::debug!("Ignoring multipart field {:?}", other),
        }
    }

    let project_id = project_id.ok_or_else(|| ApiError::BadRequest("projectId is required".into()))?;
    if incoming.is_empty() {
        return Err(ApiError::BadRequest("No files provided".into()));
    }

    let (files, empty): (Vec<_>, Vec<_>) = incoming.into_iter().partition(|f| !f.bytes.is_empty());
    let skipped: Vec<String> = empty.into_iter().map(|f| f.name).collect();
    if files.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "All files were empty: {}",
            skipped.join(", ")
        )));
    }

    let mut records = Vec::with_capacity(files.len());
    {
        let mut registry = state.registry.write().await;
        for file in files {
            let stored = registry
                .insert(&project_id, &file.name, file.mime_type, &file.bytes)
                .await?;
            records.push(state.record(&stored));
        }
    }

    tracing::info!(
        "📤 {} file(s) uploaded to project {} ({} empty skipped)",
        records.len(),
        project_id,
        skipped.len()
    );
    Ok(Json(UploadResponse::new(records, &skipped)))
}

/// Delete a file
async fn delete_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    state.authorize(&headers)?;

    let removed = state.registry.write().await.remove(&id).await?;

    tracing::info!("🗑️ Deleted {} ({})", removed.name, id);
    Ok(Json(json!({
        "success": true,
        "message": format!("{} deleted", removed.name),
    })))
}

/// Serve a file's content
async fn file_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let registry = state.registry.read().await;
    let file = registry
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(id.clone()))?;
    let mime = file
        .mime_type
        .clone()
        .unwrap_or_else(|| "application/octet-stream".to_string());
    let disposition = format!("inline; filename=\"{}\"", file.name.replace('"', ""));
    let bytes = registry.content(&id).await?;

    Ok(([(header::CONTENT_TYPE, mime), (header::CONTENT_DISPOSITION, disposition)], bytes))
}
