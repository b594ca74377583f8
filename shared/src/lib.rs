//! Shared types for the tissue culture protocol builder
//!
//! Contains the request model and option catalogue used by both the
//! `protocol` CLI and the webserver, plus process-aware logging.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{
    // Browser ↔ WebServer protocol generation
    MediaInputs, ProtocolRequest, QcChecklist, DEFAULT_SPECIES,

    // Encyclopedia lookup payloads
    EncyclopediaHit, EncyclopediaLookup, EncyclopediaSummary,
};
