//! Request and response bodies of the HTTP API

use protocol::ProtocolDocument;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response of `POST /api/protocol`
#[derive(Debug, Clone, Serialize)]
pub struct ProtocolResponse {
    pub request_id: Uuid,
    pub document: ProtocolDocument,
    pub text: String,
    pub html: String,
}

/// Query string of `GET /api/encyclopedia`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EncyclopediaQuery {
    #[serde(default)]
    pub q: String,
}

/// Response of `GET /api/species`
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesListing {
    pub species: Vec<String>,
    pub references_loaded: bool,
}
