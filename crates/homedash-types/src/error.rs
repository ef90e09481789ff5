//! Error types for homedash.

use std::io;

/// Errors produced by the homedash crates.
///
/// Nothing here is fatal to the dashboard itself: callers either propagate
/// these to the entry point or log them and fall back to defaults.
#[derive(Debug, thiserror::Error)]
pub enum DashError {
    #[error("store error: {0}")]
    Store(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DashError>;
