//! Application configuration.
//!
//! Centralized configuration for the project files frontend.
//! In development, these are hardcoded. In production, they could be
//! injected at build time.

/// Backend API base URL.
///
/// The file storage service exposing `/api/files/*`.
pub const BACKEND_URL: &str = "http://localhost:3000";

/// `localStorage` key holding the bearer token of the signed-in user.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Extensions offered by the file picker.
///
/// Advisory only: dropped files are forwarded whatever their type.
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.doc,.docx,.txt,.md,.rtf,.odt";

/// How long a toast stays on screen (in milliseconds).
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

/// Maximum toasts kept on screen at once.
pub const MAX_TOASTS: usize = 5;

/// Shown when an upload fails without a backend message.
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload files. Please try again.";

/// Shown when a delete fails without a backend message.
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete file. Please try again.";

/// Shown when the file list cannot be loaded without a backend message.
pub const LIST_FAILED_MESSAGE: &str = "Failed to load project files.";

/// Shown when a delete succeeds without a backend message.
pub const DELETE_SUCCESS_MESSAGE: &str = "File deleted";

/// Shown for transport failures (host unreachable, connection reset).
pub const NETWORK_FAILED_MESSAGE: &str =
    "Unable to reach the file service. Check your connection and try again.";

/// Shown when files are submitted outside of a project.
pub const NO_PROJECT_MESSAGE: &str = "Open a project before adding files.";

/// Shown when a session token is missing or rejected.
pub const UNAUTHORIZED_MESSAGE: &str = "Your session has expired. Please sign in again.";
