//! HTTP layer: request handlers mounted by [`crate::WebServer`]

pub mod handlers;
