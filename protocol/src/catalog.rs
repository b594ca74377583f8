//! Species catalog and reference lookup
//!
//! Both are loaded once at start-up and passed explicitly to the document
//! builder.

use serde::Serialize;
use shared::{process_info, process_warn, ProcessId, DEFAULT_SPECIES};
use std::collections::HashMap;

use crate::core::profile::genus_of;
use crate::traits::CatalogSource;

/// Ordered list of preset species
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SpeciesCatalog {
    species: Vec<String>,
}

impl SpeciesCatalog {
    pub fn new(species: Vec<String>) -> Self {
        Self { species }
    }

    /// Catalog used when the real one cannot be loaded
    pub fn fallback() -> Self {
        Self::new(vec![DEFAULT_SPECIES.to_string()])
    }

    /// Exact-name membership, used to flag preset species
    pub fn contains(&self, species: &str) -> bool {
        self.species.iter().any(|known| known == species)
    }

    pub fn names(&self) -> &[String] {
        &self.species
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

impl Default for SpeciesCatalog {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Citation lists keyed by species name or genus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceCatalog {
    entries: HashMap<String, Vec<String>>,
    loaded: bool,
}

impl ReferenceCatalog {
    pub fn new(entries: HashMap<String, Vec<String>>) -> Self {
        Self {
            entries,
            loaded: true,
        }
    }

    /// Empty catalog marking that loading failed
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// References for the exact species name, else its genus, else none
    pub fn lookup(&self, species: &str) -> &[String] {
        if let Some(references) = self.entries.get(species) {
            return references;
        }
        self.entries
            .get(genus_of(species))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the document builder needs from static data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogs {
    pub species: SpeciesCatalog,
    pub references: ReferenceCatalog,
}

impl Catalogs {
    pub fn new(species: SpeciesCatalog, references: ReferenceCatalog) -> Self {
        Self { species, references }
    }

    /// Load both catalogs, falling back per catalog when a load fails
    pub async fn load<C: CatalogSource + ?Sized>(source: &C) -> Self {
        let species = match source.load_species().await {
            Ok(names) => SpeciesCatalog::new(names),
            Err(e) => {
                process_warn!(ProcessId::current(), "⚠️ Species catalog unavailable, using fallback: {}", e);
                SpeciesCatalog::fallback()
            }
        };

        let references = match source.load_references().await {
            Ok(entries) => ReferenceCatalog::new(entries),
            Err(e) => {
                process_warn!(ProcessId::current(), "⚠️ Reference catalog unavailable: {}", e);
                ReferenceCatalog::unavailable()
            }
        };

        process_info!(
            ProcessId::current(),
            "📚 Loaded {} species and {} reference entries",
            species.len(),
            references.len()
        );

        Self { species, references }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;
    use crate::traits::MockCatalogSource;

    fn references() -> ReferenceCatalog {
        let mut entries = HashMap::new();
        entries.insert("Quercus".to_string(), vec!["Oak micropropagation review".to_string()]);
        entries.insert(
            "Oryza sativa".to_string(),
            vec!["Rice callus induction".to_string(), "Rice regeneration".to_string()],
        );
        entries.insert("Empty species".to_string(), Vec::new());
        ReferenceCatalog::new(entries)
    }

    #[test]
    fn test_reference_exact_match() {
        assert_eq!(references().lookup("Oryza sativa").len(), 2);
    }

    #[test]
    fn test_reference_genus_fallback() {
        assert_eq!(
            references().lookup("Quercus robur"),
            &["Oak micropropagation review".to_string()]
        );
    }

    #[test]
    fn test_reference_missing_is_empty() {
        assert!(references().lookup("Zea mays").is_empty());
        assert!(ReferenceCatalog::unavailable().lookup("Quercus robur").is_empty());
    }

    #[test]
    fn test_exact_entry_wins_even_when_empty() {
        let mut entries = HashMap::new();
        entries.insert("Empty".to_string(), vec!["genus level".to_string()]);
        entries.insert("Empty species".to_string(), Vec::new());
        let catalog = ReferenceCatalog::new(entries);
        assert!(catalog.lookup("Empty species").is_empty());
    }

    #[test]
    fn test_species_membership_is_exact() {
        let catalog = SpeciesCatalog::new(vec!["Oryza sativa".to_string()]);
        assert!(catalog.contains("Oryza sativa"));
        assert!(!catalog.contains("oryza sativa"));
        assert!(SpeciesCatalog::fallback().contains(DEFAULT_SPECIES));
    }

    #[tokio::test]
    async fn test_load_uses_fallbacks_on_failure() {
        let mut source = MockCatalogSource::new();
        source.expect_load_species().returning(|| {
            Err(ProtocolError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "missing",
            )))
        });
        source.expect_load_references().returning(|| {
            Err(ProtocolError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "missing",
            )))
        });

        let catalogs = Catalogs::load(&source).await;
        assert_eq!(catalogs.species, SpeciesCatalog::fallback());
        assert!(!catalogs.references.is_loaded());
    }

    #[tokio::test]
    async fn test_load_keeps_source_data() {
        let mut source = MockCatalogSource::new();
        source
            .expect_load_species()
            .returning(|| Ok(vec!["Zea mays".to_string(), "Musa acuminata".to_string()]));
        source.expect_load_references().returning(|| Ok(HashMap::new()));

        let catalogs = Catalogs::load(&source).await;
        assert_eq!(catalogs.species.len(), 2);
        assert!(catalogs.references.is_loaded());
        assert!(catalogs.references.is_empty());
    }
}
