//! Backend services.
//!
//! # Services
//!
//! - [`files`] - list / upload / delete against the project file service
//! - [`credentials`] - bearer token lookup

pub mod credentials;
pub mod files;

pub use credentials::*;
pub use files::*;

/// File service client used by the browser build.
pub type HttpFileApi = FileApi<LocalStorageToken>;
