//! Error types for the project file service.
//!
//! - [`StoreError`] - file registry errors
//! - [`ApiError`] - HTTP errors, rendered as `{success: false, message}`
//!
//! Registry errors convert into API errors, so handlers can use `?`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

// =============================================================================
// Registry Errors
// =============================================================================

/// Errors from the file registry.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No file with this id.
    #[error("File not found: {0}")]
    NotFound(String),

    /// IO error.
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("Storage JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// API Errors
// =============================================================================

/// HTTP errors returned by the API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or rejected bearer token.
    #[error("Missing or invalid bearer token")]
    Unauthorized,

    /// Invalid request.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Unknown file.
    #[error("File not found")]
    NotFound(String),

    /// Server internal error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("❌ {}", self);
        } else {
            tracing::warn!("⚠️ {} ({})", self, status);
        }

        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for registry operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
