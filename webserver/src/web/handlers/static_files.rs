//! Static file serving handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use shared::{process_debug, ProcessId};

use crate::traits::{EncyclopediaClient, StaticFileServer};
use crate::webserver_impl::WebServer;

/// Page served when the static directory has no index.html
const FALLBACK_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Tissue Culture Protocol Builder</title>
    <style>
        body { font-family: Georgia, serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }
        label { display: block; margin-top: 0.75rem; }
        pre { white-space: pre-wrap; background: #f6f6f2; padding: 1rem; }
    </style>
</head>
<body>
    <h1>Tissue Culture Protocol Builder</h1>
    <form id="protocolForm">
        <label>Species <input name="species" placeholder="Arabidopsis thaliana"></label>
        <label>Subculture interval (weeks) <input name="subculture_weeks" type="number" min="1" value="4"></label>
        <label>Notes <textarea name="notes"></textarea></label>
        <button type="submit">Generate protocol</button>
    </form>
    <pre id="output">Generated protocol will appear here.</pre>
    <script>
        document.getElementById("protocolForm").addEventListener("submit", async (event) => {
            event.preventDefault();
            const form = new FormData(event.target);
            const body = {
                species: form.get("species"),
                subculture_weeks: Number(form.get("subculture_weeks")) || 4,
                notes: form.get("notes"),
            };
            const response = await fetch("/api/protocol/text", {
                method: "POST",
                headers: { "Content-Type": "application/json" },
                body: JSON.stringify(body),
            });
            document.getElementById("output").textContent = await response.text();
        });
    </script>
</body>
</html>
"#;

/// Serve index.html, or the built-in form when it is missing
pub async fn serve_index<S, E>(State(server): State<WebServer<S, E>>) -> Response
where
    S: StaticFileServer + 'static,
    E: EncyclopediaClient + 'static,
{
    match server.static_server().serve_file("index.html").await {
        Ok(file) => file.into_response(),
        Err(e) => {
            process_debug!(ProcessId::current(), "Serving built-in index page: {}", e);
            Html(FALLBACK_INDEX).into_response()
        }
    }
}

/// Serve a file below the static directory
pub async fn serve_static<S, E>(
    Path(path): Path<String>,
    State(server): State<WebServer<S, E>>,
) -> Response
where
    S: StaticFileServer + 'static,
    E: EncyclopediaClient + 'static,
{
    match server.static_server().serve_file(&path).await {
        Ok(file) => file.into_response(),
        Err(e) => {
            let status = e.status_code();
            let message = if status == StatusCode::NOT_FOUND {
                "File not found"
            } else {
                "Unable to serve file"
            };
            (status, message).into_response()
        }
    }
}
