//! Service trait definitions for dependency injection
//!
//! File system and network access go through these traits so the router can
//! be tested against mocks.

use async_trait::async_trait;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use shared::{EncyclopediaHit, EncyclopediaSummary};

use crate::error::WebServerResult;

/// Static file serving service trait
#[mockall::automock]
#[async_trait]
pub trait StaticFileServer: Send + Sync {
    /// Serve a file relative to the static directory
    async fn serve_file(&self, path: &str) -> WebServerResult<StaticFileResponse>;

    /// Check if file exists inside the static directory
    async fn file_exists(&self, path: &str) -> bool;
}

/// Encyclopedia lookup service trait
#[mockall::automock]
#[async_trait]
pub trait EncyclopediaClient: Send + Sync {
    /// Full-text search, in relevance order
    async fn search(&self, query: &str) -> WebServerResult<Vec<EncyclopediaHit>>;

    /// Page summary for an exact article title
    async fn summary(&self, title: &str) -> WebServerResult<EncyclopediaSummary>;
}

/// Static file response
#[derive(Debug, Clone)]
pub struct StaticFileResponse {
    pub content: Vec<u8>,
    pub content_type: String,
    pub cache_control: Option<String>,
}

impl StaticFileResponse {
    pub fn new(content: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            content,
            content_type: content_type.into(),
            cache_control: None,
        }
    }

    pub fn with_cache_control(mut self, cache_control: impl Into<String>) -> Self {
        self.cache_control = Some(cache_control.into());
        self
    }
}

impl IntoResponse for StaticFileResponse {
    fn into_response(self) -> Response {
        let mut response = (
            [(header::CONTENT_TYPE, self.content_type)],
            self.content,
        )
            .into_response();
        if let Some(cache_control) = self.cache_control {
            if let Ok(value) = cache_control.parse() {
                response.headers_mut().insert(header::CACHE_CONTROL, value);
            }
        }
        response
    }
}
