//! todo-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! store, and serves the list/item REST API over HTTP.

mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use todo_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::{ServerConfig, expand_tilde};

#[derive(Parser)]
#[command(author, version, about = "Todo list REST server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let store = if server_cfg.is_in_memory() {
    tracing::warn!("using an in-memory store; data is lost on exit");
    SqliteStore::open_in_memory()
      .await
      .context("failed to open in-memory store")?
  } else {
    let store_path = expand_tilde(&server_cfg.store_path);
    tracing::info!(path = ?store_path, "opening store");
    SqliteStore::open(&store_path)
      .await
      .with_context(|| format!("failed to open store at {store_path:?}"))?
  };

  let app = todo_api::api_router(Arc::new(store)).layer(TraceLayer::new_for_http());
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
