//! Main webserver implementation
//!
//! `WebServer` owns the shared state and the injected services, builds the
//! axum router and runs it until shutdown.

use axum::{
    routing::{get, post},
    Router,
};
use shared::{logging, process_info, ProcessId};
use std::sync::Arc;
use tokio::sync::mpsc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::{EncyclopediaClient, StaticFileServer};
use crate::web::handlers::{api, static_files};

/// Main webserver struct with dependency injection
pub struct WebServer<S, E> {
    state: Arc<WebServerState>,
    static_server: Arc<S>,
    encyclopedia: Arc<E>,
}

impl<S, E> Clone for WebServer<S, E> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            static_server: Arc::clone(&self.static_server),
            encyclopedia: Arc::clone(&self.encyclopedia),
        }
    }
}

impl<S, E> WebServer<S, E> {
    pub fn new(state: WebServerState, static_server: S, encyclopedia: E) -> Self {
        Self {
            state: Arc::new(state),
            static_server: Arc::new(static_server),
            encyclopedia: Arc::new(encyclopedia),
        }
    }

    pub fn state(&self) -> &WebServerState {
        &self.state
    }

    pub fn static_server(&self) -> &S {
        &self.static_server
    }

    pub fn encyclopedia(&self) -> &E {
        &self.encyclopedia
    }
}

impl<S, E> WebServer<S, E>
where
    S: StaticFileServer + 'static,
    E: EncyclopediaClient + 'static,
{
    /// Build the axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Static file routes
            .route("/", get(static_files::serve_index::<S, E>))
            .route("/static/*path", get(static_files::serve_static::<S, E>))
            // API routes
            .route("/api/species", get(api::list_species::<S, E>))
            .route("/api/protocol", post(api::generate_protocol::<S, E>))
            .route("/api/protocol/text", post(api::download_protocol::<S, E>))
            .route("/api/encyclopedia", get(api::encyclopedia::<S, E>))
            .route("/api/status", get(api::get_status::<S, E>))
            // Health check
            .route("/health", get(api::health_check))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            )
            .with_state(self.clone())
    }

    /// Serve HTTP until a message arrives on `shutdown`.
    ///
    /// Dropping the sender without sending leaves the server running.
    pub async fn run(&self, mut shutdown: mpsc::Receiver<()>) -> WebServerResult<()> {
        let address = self.state.bind_address;
        let listener = tokio::net::TcpListener::bind(address)
            .await
            .map_err(|source| WebServerError::ServerStartupFailed {
                address: address.to_string(),
                source,
            })?;

        logging::log_startup(ProcessId::current(), &format!("HTTP server on http://{address}"));
        process_info!(ProcessId::current(), "🌐 Protocol builder available at http://{}/", address);

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(async move {
                if shutdown.recv().await.is_none() {
                    std::future::pending::<()>().await;
                }
            })
            .await?;

        Ok(())
    }
}
