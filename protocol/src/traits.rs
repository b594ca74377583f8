//! Service trait definitions for dependency injection
//!
//! Catalog I/O is abstracted so the document builder never touches the
//! filesystem.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::ProtocolResult;

/// Source of the species catalog and reference lists
#[mockall::automock]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Ordered list of known species names
    async fn load_species(&self) -> ProtocolResult<Vec<String>>;

    /// Citation lists keyed by species name or genus
    async fn load_references(&self) -> ProtocolResult<HashMap<String, Vec<String>>>;
}
