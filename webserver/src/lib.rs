//! Webserver for the tissue culture protocol builder
//!
//! Serves the protocol form, generates protocols over a JSON API and proxies
//! encyclopedia lookups.

pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::*;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::{EncyclopediaClient, StaticFileResponse, StaticFileServer};

// Re-export service implementations
pub use services::{RealEncyclopediaClient, RealStaticFileServer};
