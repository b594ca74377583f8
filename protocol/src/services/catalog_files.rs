//! JSON file backed catalog source

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{ProtocolError, ProtocolResult};
use crate::traits::CatalogSource;
use shared::{process_debug, ProcessId};

pub const DEFAULT_SPECIES_CATALOG: &str = "./data/species_catalog.json";
pub const DEFAULT_REFERENCES_CATALOG: &str = "./data/references_catalog.json";

/// Reads `species_catalog.json` (array of names) and
/// `references_catalog.json` (object of citation arrays)
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    species_path: PathBuf,
    references_path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(species_path: impl Into<PathBuf>, references_path: impl Into<PathBuf>) -> Self {
        Self {
            species_path: species_path.into(),
            references_path: references_path.into(),
        }
    }

    /// Both catalogs inside `dir` under their conventional names
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join("species_catalog.json"),
            dir.join("references_catalog.json"),
        )
    }

    async fn read_json<T: DeserializeOwned>(path: &Path) -> ProtocolResult<T> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| ProtocolError::CatalogIo {
                path: path.to_path_buf(),
                source,
            })?;

        let parsed = serde_json::from_str(&content).map_err(|source| ProtocolError::CatalogFormat {
            path: path.to_path_buf(),
            source,
        })?;

        process_debug!(ProcessId::current(), "📄 Read catalog {} ({} bytes)", path.display(), content.len());
        Ok(parsed)
    }
}

impl Default for FileCatalogSource {
    fn default() -> Self {
        Self::new(DEFAULT_SPECIES_CATALOG, DEFAULT_REFERENCES_CATALOG)
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load_species(&self) -> ProtocolResult<Vec<String>> {
        Self::read_json(&self.species_path).await
    }

    async fn load_references(&self) -> ProtocolResult<HashMap<String, Vec<String>>> {
        Self::read_json(&self.references_path).await
    }
}
