//! Lystra server binary.
//!
//! Starts the to-do lists web server against a SQLite database.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lystra_server::{router, AppState, ServerConfig};
use lystra_store::SqliteStore;

/// Lystra - to-do lists web server
#[derive(Parser, Debug)]
#[command(name = "lystra")]
#[command(about = "Lystra to-do lists web server", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Bind address override (e.g. 127.0.0.1:8000)
    #[arg(short, long)]
    bind: Option<String>,

    /// Database URL override (e.g. sqlite:lystra.db)
    #[arg(short, long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = ServerConfig::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    let store = SqliteStore::connect(&config.database_url).await?;
    let app = router(AppState::new(Arc::new(store)));

    let listener = tokio::net::TcpListener::bind(config.bind.as_str()).await?;
    tracing::info!(addr = %config.bind, db = %config.database_url, "lystra listening");
    axum::serve(listener, app).await?;
    Ok(())
}
