//! # Project files - development file server
//!
//! Stores the documents attached to a project and serves them over the
//! HTTP contract the frontend's file endpoint speaks.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  Frontend   │────▶│  API (axum) │────▶│ FileRegistry │────▶│ <dir>/*.json │
//! │  (bearer)   │     │  + auth     │     │  (metadata)  │     │ <dir>/*.bin  │
//! └─────────────┘     └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Registry and HTTP error types
//! - [`models`] - Stored metadata and client records
//! - [`storage`] - On-disk file registry
//! - [`config`] - Server settings and list envelope styles
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod models;

// Storage
pub mod storage;

// Configuration
pub mod config;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ApiError, ApiResult, StoreError, StoreResult};

pub use models::{FileRecord, StoredFile};

pub use storage::{FileRegistry, DEFAULT_DATA_DIR};

pub use config::{EnvelopeStyle, ServerConfig, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PORT};

pub use api::{list_envelope, router, start_server, AppState, ListRequest, UploadResponse};
