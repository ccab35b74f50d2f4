// src/error.rs
//! Error types for loading the viewer's data.

use thiserror::Error;

/// Everything that can stop the document from being shown.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status code.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body was not a valid translation document.
    #[error("invalid document JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The viewer configuration could not be read.
    #[error("invalid viewer configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
