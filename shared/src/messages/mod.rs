//! Message types exchanged between the browser, the webserver and the CLI

pub mod encyclopedia;
pub mod protocol;

pub use encyclopedia::{EncyclopediaHit, EncyclopediaLookup, EncyclopediaSummary};
pub use protocol::{MediaInputs, ProtocolRequest, QcChecklist, DEFAULT_SPECIES};
