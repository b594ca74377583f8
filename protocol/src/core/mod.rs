//! Protocol core logic
//!
//! Pure functions with no I/O: seed derivation, parameter derivation and
//! document assembly.

pub mod checklists;
pub mod derivation;
pub mod document;
pub mod profile;
pub mod render;
pub mod seed;

pub use checklists::QcSummary;
pub use derivation::{media_advisories, DerivedParameters, ResolvedChoices};
pub use document::{build_protocol, Fingerprint, ProtocolDocument};
pub use render::{escape_html, render_text, HtmlRenderer, DOWNLOAD_FILE_NAME};
pub use seed::{normalize_species_name, pick_by_seed, SpeciesSeed};
