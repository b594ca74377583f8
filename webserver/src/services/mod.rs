//! Service implementations backing the webserver traits

pub mod encyclopedia;
pub mod static_server;

pub use encyclopedia::{lookup, RealEncyclopediaClient, DEFAULT_ENCYCLOPEDIA_URL, MAX_HITS, NO_SUMMARY};
pub use static_server::RealStaticFileServer;
