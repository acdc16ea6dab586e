//! HTTP rendition of the generators: one GET endpoint per number type,
//! JSON responses, bank-code table loaded once at startup.

mod error;
mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use fikcja_generate::{BankCodeTable, GeneratorRegistry, bank_code_table};

#[derive(Debug, Error)]
enum ServerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "fikcja-server",
    version,
    about = "Serves fictitious Polish identification numbers over HTTP"
)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,
    /// Bank sort-code registry dump; defaults to the bundled table.
    #[arg(long, value_name = "PATH")]
    bank_file: Option<PathBuf>,
}

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<GeneratorRegistry>,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let cli = Cli::parse();
    let table = load_table(cli.bank_file.as_deref());
    if table.is_empty() {
        tracing::warn!("bank code table is empty; NRB generation will report 503");
    } else {
        tracing::info!(codes = table.len(), "bank code table loaded");
    }

    let state = AppState {
        registry: Arc::new(GeneratorRegistry::new(table)),
    };
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(cli.addr).await?;
    tracing::info!(addr = %cli.addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// A load failure degrades to the empty table so every other generator
/// keeps serving; NRB requests then surface the failure explicitly.
fn load_table(path: Option<&std::path::Path>) -> BankCodeTable {
    match path {
        Some(path) => match BankCodeTable::load(path) {
            Ok(table) => table,
            Err(err) => {
                tracing::error!(error = %err, path = %path.display(), "bank code load failed");
                BankCodeTable::default()
            }
        },
        None => bank_code_table().clone(),
    }
}
