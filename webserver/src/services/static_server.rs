//! Static file serving service
//!
//! Serves the form page and its assets with content types and caching hints.

use async_trait::async_trait;
use shared::{process_debug, process_error, process_warn, ProcessId};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{WebServerError, WebServerResult};
use crate::traits::{StaticFileResponse, StaticFileServer};

const INDEX_FILE: &str = "index.html";

/// Static file server rooted at a directory on disk
#[derive(Debug, Clone)]
pub struct RealStaticFileServer {
    base_dir: PathBuf,
}

impl RealStaticFileServer {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn extension(path: &Path) -> Option<String> {
        path.extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
    }

    /// MIME type from the file extension
    pub fn mime_type(path: &Path) -> &'static str {
        match Self::extension(path).as_deref() {
            Some("html") => "text/html; charset=utf-8",
            Some("css") => "text/css; charset=utf-8",
            Some("js") => "application/javascript; charset=utf-8",
            Some("json") => "application/json",
            Some("txt") => "text/plain; charset=utf-8",
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("svg") => "image/svg+xml",
            Some("ico") => "image/x-icon",
            Some("woff") => "font/woff",
            Some("woff2") => "font/woff2",
            _ => "application/octet-stream",
        }
    }

    /// Cache-Control value by file type
    pub fn cache_control(path: &Path) -> Option<&'static str> {
        match Self::extension(path).as_deref() {
            Some("html") => Some("no-cache"),
            Some("js") | Some("css") => Some("public, max-age=3600"),
            Some("png") | Some("jpg") | Some("jpeg") | Some("gif") | Some("svg") | Some("ico") => {
                Some("public, max-age=86400")
            }
            Some("woff") | Some("woff2") => Some("public, max-age=604800"),
            _ => None,
        }
    }

    /// Resolve `request_path` inside the base directory, rejecting traversal
    fn resolve_path(&self, request_path: &str) -> WebServerResult<PathBuf> {
        let clean_path = request_path.trim_start_matches('/');
        let file_path = if clean_path.is_empty() {
            INDEX_FILE
        } else {
            clean_path
        };

        let canonical_base = self.base_dir.canonicalize().map_err(|e| {
            process_error!(
                ProcessId::current(),
                "Failed to canonicalize static directory {}: {}",
                self.base_dir.display(),
                e
            );
            WebServerError::StaticDirUnavailable(self.base_dir.display().to_string())
        })?;

        let canonical_path = self
            .base_dir
            .join(file_path)
            .canonicalize()
            .map_err(|_| WebServerError::StaticFileNotFound {
                path: request_path.to_string(),
            })?;

        if !canonical_path.starts_with(&canonical_base) {
            process_warn!(ProcessId::current(), "🚫 Rejected path outside static directory: {}", request_path);
            return Err(WebServerError::AccessDenied {
                path: request_path.to_string(),
            });
        }

        Ok(canonical_path)
    }
}

#[async_trait]
impl StaticFileServer for RealStaticFileServer {
    async fn serve_file(&self, path: &str) -> WebServerResult<StaticFileResponse> {
        let mut file_path = self.resolve_path(path)?;
        if file_path.is_dir() {
            file_path = file_path.join(INDEX_FILE);
        }

        let content = fs::read(&file_path).await.map_err(|e| {
            process_warn!(ProcessId::current(), "❌ Failed to read static file {}: {}", path, e);
            WebServerError::StaticFileNotFound {
                path: path.to_string(),
            }
        })?;

        process_debug!(ProcessId::current(), "📄 Served static file: {} ({} bytes)", path, content.len());

        let mut response = StaticFileResponse::new(content, Self::mime_type(&file_path));
        if let Some(cache) = Self::cache_control(&file_path) {
            response = response.with_cache_control(cache);
        }
        Ok(response)
    }

    async fn file_exists(&self, path: &str) -> bool {
        match self.resolve_path(path) {
            Ok(file_path) => file_path.is_file(),
            Err(_) => false,
        }
    }
}

impl Default for RealStaticFileServer {
    fn default() -> Self {
        Self::new("./static")
    }
}
