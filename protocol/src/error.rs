//! Protocol crate error types

use std::path::PathBuf;
use thiserror::Error;
use shared::SharedError;

/// Result type for protocol operations
pub type ProtocolResult<T> = Result<T, ProtocolError>;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Failed to read {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog {path}: {source}")]
    CatalogFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid protocol request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
