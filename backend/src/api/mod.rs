//! HTTP API module.
//!
//! The HTTP server, bearer auth and wire types of the file service.

pub mod auth;
pub mod server;
pub mod types;

pub use server::{router, start_server, AppState};
pub use types::*;
