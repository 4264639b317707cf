//! Server configuration.
//!
//! Resolved from the `serve` command line, with `PROJECTFILES_*`
//! environment variables (or a `.env` file) as fallbacks.

use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

use crate::storage::DEFAULT_DATA_DIR;

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Default upload body limit (25 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Shape of the list response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EnvelopeStyle {
    /// Top-level array of records
    Bare,
    /// `{success, data: {files}}`
    #[default]
    Nested,
    /// `{success, files}`
    Flat,
}

impl fmt::Display for EnvelopeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvelopeStyle::Bare => write!(f, "bare"),
            EnvelopeStyle::Nested => write!(f, "nested"),
            EnvelopeStyle::Flat => write!(f, "flat"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Registry directory
    pub data_dir: PathBuf,
    pub envelope: EnvelopeStyle,
    /// Expected bearer token; `None` accepts any non-blank token
    pub token: Option<String>,
    /// Base URL used to build each record's `url`
    pub public_url: String,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Public URL derived from the port when none is given
    pub fn local_url(port: u16) -> String {
        format!("http://localhost:{}", port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            envelope: EnvelopeStyle::default(),
            token: None,
            public_url: Self::local_url(DEFAULT_PORT),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}
