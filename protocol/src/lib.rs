//! Tissue culture protocol library
//!
//! Derives species-specific protocol parameters from a seeded selector and
//! assembles them into an academic-style protocol document.

pub mod catalog;
pub mod core;
pub mod error;
pub mod services;
pub mod traits;

// Re-export main types
pub use catalog::{Catalogs, ReferenceCatalog, SpeciesCatalog};
pub use crate::core::*;
pub use error::{ProtocolError, ProtocolResult};
pub use services::FileCatalogSource;
pub use traits::CatalogSource;
