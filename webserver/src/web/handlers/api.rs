//! REST API handlers
//!
//! Protocol generation, species listing and encyclopedia lookups.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use chrono::{Datelike, Utc};
use protocol::{build_protocol, render_text, ProtocolDocument, DOWNLOAD_FILE_NAME};
use serde_json::{json, Value};
use shared::{process_info, process_warn, EncyclopediaLookup, ProcessId, ProtocolRequest};
use uuid::Uuid;

use crate::services::lookup;
use crate::traits::{EncyclopediaClient, StaticFileServer};
use crate::types::{EncyclopediaQuery, ProtocolResponse, SpeciesListing};
use crate::webserver_impl::WebServer;

fn generate<S, E>(server: &WebServer<S, E>, request: &ProtocolRequest) -> ProtocolDocument {
    let state = server.state();
    let document = build_protocol(request, &state.catalogs, Utc::now().year());
    let count = state.record_protocol();

    process_info!(
        ProcessId::current(),
        "🧪 Generated protocol {} for {} (#{})",
        document.fingerprint.key,
        document.species,
        count
    );
    document
}

/// List the preset species catalog
pub async fn list_species<S, E>(State(server): State<WebServer<S, E>>) -> Json<SpeciesListing>
where
    S: StaticFileServer + 'static,
    E: EncyclopediaClient + 'static,
{
    let catalogs = &server.state().catalogs;
    Json(SpeciesListing {
        species: catalogs.species.names().to_vec(),
        references_loaded: catalogs.references.is_loaded(),
    })
}

/// Generate a protocol and return it with its text and HTML renderings
pub async fn generate_protocol<S, E>(
    State(server): State<WebServer<S, E>>,
    Json(request): Json<ProtocolRequest>,
) -> Json<ProtocolResponse>
where
    S: StaticFileServer + 'static,
    E: EncyclopediaClient + 'static,
{
    let document = generate(&server, &request);
    let text = render_text(&document);
    let html = server.state().renderer.render(&document);

    Json(ProtocolResponse {
        request_id: Uuid::new_v4(),
        document,
        text,
        html,
    })
}

/// Generate a protocol as a plain text download
pub async fn download_protocol<S, E>(
    State(server): State<WebServer<S, E>>,
    Json(request): Json<ProtocolRequest>,
) -> Response
where
    S: StaticFileServer + 'static,
    E: EncyclopediaClient + 'static,
{
    let document = generate(&server, &request);
    let disposition = format!("attachment; filename=\"{DOWNLOAD_FILE_NAME}\"");

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        render_text(&document),
    )
        .into_response()
}

/// Search the encyclopedia and summarize the top hit
pub async fn encyclopedia<S, E>(
    State(server): State<WebServer<S, E>>,
    Query(params): Query<EncyclopediaQuery>,
) -> Result<Json<EncyclopediaLookup>, (StatusCode, Json<Value>)>
where
    S: StaticFileServer + 'static,
    E: EncyclopediaClient + 'static,
{
    server.state().record_lookup();

    match lookup(server.encyclopedia(), &params.q).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            process_warn!(ProcessId::current(), "⚠️ Encyclopedia lookup for {:?} failed: {}", params.q, e);
            Err((
                e.status_code(),
                Json(json!({
                    "status": "error",
                    "message": e.to_string(),
                })),
            ))
        }
    }
}

/// Get server status
pub async fn get_status<S, E>(State(server): State<WebServer<S, E>>) -> Json<Value>
where
    S: StaticFileServer + 'static,
    E: EncyclopediaClient + 'static,
{
    let state = server.state();

    Json(json!({
        "status": "ok",
        "data": {
            "server_status": "running",
            "species_count": state.catalogs.species.len(),
            "references_loaded": state.catalogs.references.is_loaded(),
            "protocols_generated": state.protocols_generated(),
            "encyclopedia_lookups": state.encyclopedia_lookups(),
            "uptime_seconds": state.uptime_seconds(),
            "server_time": Utc::now().timestamp(),
            "version": env!("CARGO_PKG_VERSION")
        }
    }))
}

/// Liveness probe
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp()
    }))
}
