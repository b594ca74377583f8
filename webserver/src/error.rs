//! WebServer-specific error types

use axum::http::StatusCode;
use protocol::ProtocolError;
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed on {address}: {source}")]
    ServerStartupFailed {
        address: String,
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Static file not found: {path}")]
    StaticFileNotFound { path: String },

    #[error("Access denied: {path}")]
    AccessDenied { path: String },

    #[error("Static file directory not accessible: {0}")]
    StaticDirUnavailable(String),

    #[error("Invalid request: {details}")]
    InvalidRequest { details: String },

    #[error("Encyclopedia request failed: {0}")]
    EncyclopediaRequest(#[from] reqwest::Error),

    #[error("Encyclopedia returned status {status} for {url}")]
    EncyclopediaStatus { status: u16, url: String },

    #[error("Invalid encyclopedia URL: {0}")]
    EncyclopediaUrl(#[from] url::ParseError),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        WebServerError::Config(message.into())
    }

    pub fn invalid_request(details: impl Into<String>) -> Self {
        WebServerError::InvalidRequest {
            details: details.into(),
        }
    }

    /// Status code reported to the browser for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::StaticFileNotFound { .. } => StatusCode::NOT_FOUND,
            WebServerError::AccessDenied { .. } => StatusCode::FORBIDDEN,
            WebServerError::InvalidRequest { .. } | WebServerError::JsonError(_) => {
                StatusCode::BAD_REQUEST
            }
            WebServerError::EncyclopediaRequest(_) | WebServerError::EncyclopediaStatus { .. } => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
