//! Bearer credential lookup.
//!
//! The token is owned by the authentication layer; this side only reads it.

use crate::types::{FileError, FileResult};

/// Synchronous read of the current bearer token.
pub trait CredentialSource {
    /// Current token, `None` when signed out.
    fn token(&self) -> Option<String>;
}

/// Token persisted in `localStorage` under a fixed key.
#[derive(Debug, Clone)]
pub struct LocalStorageToken {
    key: String,
}

impl LocalStorageToken {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl CredentialSource for LocalStorageToken {
    fn token(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let token = storage.get_item(&self.key).ok().flatten()?;
        non_blank(token)
    }
}

/// Fixed token, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl CredentialSource for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone().and_then(non_blank)
    }
}

/// `Authorization` header value, or `Unauthorized` before any request is made.
pub fn bearer_header(source: &impl CredentialSource) -> FileResult<String> {
    source
        .token()
        .map(|token| format!("Bearer {}", token))
        .ok_or(FileError::Unauthorized)
}

fn non_blank(token: String) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
