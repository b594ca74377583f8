//! WebServer entry point
//!
//! Loads the catalogs once, then serves the protocol form and API.

use clap::Parser;
use protocol::services::catalog_files::{DEFAULT_REFERENCES_CATALOG, DEFAULT_SPECIES_CATALOG};
use protocol::{Catalogs, FileCatalogSource};
use shared::{logging, process_info, ProcessId};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tokio::{signal, sync::mpsc};

use webserver::services::DEFAULT_ENCYCLOPEDIA_URL;
use webserver::{
    RealEncyclopediaClient, RealStaticFileServer, WebServer, WebServerError, WebServerState,
};

/// Command line arguments, with environment fallbacks
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Tissue culture protocol builder web server")]
struct Args {
    /// Port for HTTP server (browser connections)
    #[arg(long, env = "TC_PORT", default_value = "8000")]
    port: u16,

    /// Interface to bind
    #[arg(long, env = "TC_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Static files directory
    #[arg(long, env = "TC_STATIC_DIR", default_value = "./static")]
    static_dir: PathBuf,

    /// Species catalog JSON file
    #[arg(long, env = "TC_SPECIES_CATALOG", default_value = DEFAULT_SPECIES_CATALOG)]
    species_catalog: PathBuf,

    /// References catalog JSON file
    #[arg(long, env = "TC_REFERENCES_CATALOG", default_value = DEFAULT_REFERENCES_CATALOG)]
    references_catalog: PathBuf,

    /// Base URL of the encyclopedia API
    #[arg(long, env = "TC_ENCYCLOPEDIA_URL", default_value = DEFAULT_ENCYCLOPEDIA_URL)]
    encyclopedia_url: String,

    /// Encyclopedia request timeout in milliseconds
    #[arg(long, env = "TC_ENCYCLOPEDIA_TIMEOUT_MS", default_value = "10000")]
    encyclopedia_timeout_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TC_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    ProcessId::init_webserver();
    logging::init_tracing_with_level(Some(&args.log_level));

    let http_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid listen address: {e}")))?;

    let source = FileCatalogSource::new(&args.species_catalog, &args.references_catalog);
    let catalogs = Catalogs::load(&source).await;

    let encyclopedia = RealEncyclopediaClient::new(
        &args.encyclopedia_url,
        Duration::from_millis(args.encyclopedia_timeout_ms),
    )?;
    process_info!(
        ProcessId::current(),
        "🔧 Static dir {}, encyclopedia {}",
        args.static_dir.display(),
        encyclopedia.base_url()
    );

    let state = WebServerState::new(http_addr, catalogs);
    let webserver = WebServer::new(state, RealStaticFileServer::new(&args.static_dir), encyclopedia);

    // Set up graceful shutdown
    let (shutdown_sender, shutdown_receiver) = mpsc::channel(1);
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal");
                let _ = shutdown_sender.send(()).await;
            }
            Err(err) => {
                logging::log_error(ProcessId::current(), "Signal handling", &err);
            }
        }
    });

    webserver.run(shutdown_receiver).await?;

    logging::log_success(ProcessId::current(), "WebServer stopped gracefully");
    Ok(())
}
