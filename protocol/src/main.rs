//! Command line protocol generator
//!
//! Reads a JSON protocol request and writes the generated protocol as text,
//! HTML or JSON.

use anyhow::Context;
use chrono::{Datelike, Utc};
use clap::{Parser, ValueEnum};
use shared::{logging, process_info, ProcessId, ProtocolRequest};
use std::path::PathBuf;

use protocol::services::catalog_files::{DEFAULT_REFERENCES_CATALOG, DEFAULT_SPECIES_CATALOG};
use protocol::{build_protocol, render_text, Catalogs, FileCatalogSource, HtmlRenderer, ProtocolError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "protocol")]
#[command(about = "Generate a tissue culture protocol from a JSON request")]
struct Args {
    /// Protocol request JSON file
    #[arg(long, short)]
    input: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Species catalog JSON file
    #[arg(long, env = "TC_SPECIES_CATALOG", default_value = DEFAULT_SPECIES_CATALOG)]
    species_catalog: PathBuf,

    /// References catalog JSON file
    #[arg(long, env = "TC_REFERENCES_CATALOG", default_value = DEFAULT_REFERENCES_CATALOG)]
    references_catalog: PathBuf,

    /// Year printed in the header (current UTC year when omitted)
    #[arg(long)]
    year: Option<i32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TC_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    ProcessId::init_cli();
    logging::init_tracing_with_level(Some(&args.log_level));

    let raw = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("reading request {}", args.input.display()))?;
    let request: ProtocolRequest = serde_json::from_str(&raw).map_err(ProtocolError::InvalidRequest)?;

    let source = FileCatalogSource::new(&args.species_catalog, &args.references_catalog);
    let catalogs = Catalogs::load(&source).await;

    let year = args.year.unwrap_or_else(|| Utc::now().year());
    let document = build_protocol(&request, &catalogs, year);
    process_info!(
        ProcessId::current(),
        "🧪 Generated protocol {} for {}",
        document.fingerprint.key,
        document.species
    );

    let rendered = match args.format {
        OutputFormat::Text => render_text(&document),
        OutputFormat::Html => HtmlRenderer::new().render(&document),
        OutputFormat::Json => serde_json::to_string_pretty(&document)?,
    };

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, rendered)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            logging::log_success(ProcessId::current(), &format!("Wrote {}", path.display()));
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
