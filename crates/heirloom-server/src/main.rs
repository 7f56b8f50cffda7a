//! heirloom server binary.
//!
//! Reads `heirloom.toml` (or the path specified with `--config`), opens the
//! SQLite store of the selected variant, and serves its JSON API under
//! `/api`.
//!
//! ```sh
//! HEIRLOOM_DATABASE_URL=harmony.db cargo run -p heirloom-server -- harmony
//! ```

mod settings;

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context as _;
use axum::{Router, http::StatusCode};
use clap::{Parser, Subcommand};
use heirloom_store_sqlite::{SqliteHarmonyStore, SqliteLegacyStore};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Heirloom family record server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "heirloom.toml")]
  config: PathBuf,

  #[command(subcommand)]
  variant: Variant,
}

#[derive(Subcommand, Clone, Copy)]
enum Variant {
  /// Users, people, relationships, timeline, media, tributes, groups and
  /// messages.
  Harmony,
  /// Families keyed by a shared code, with tree, stories and events.
  Legacy,
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
  let cfg = ServerConfig::load(&cli.config)?;
  let store_path = cfg.database_path();

  match cli.variant {
    Variant::Harmony => {
      let store = SqliteHarmonyStore::open(&store_path)
        .await
        .with_context(|| format!("failed to open store at {store_path:?}"))?;
      serve(&cfg, heirloom_api::harmony_router(Arc::new(store.clone()))).await?;
      store.close().await.context("failed to close store")?;
    }
    Variant::Legacy => {
      let store = SqliteLegacyStore::open(&store_path)
        .await
        .with_context(|| format!("failed to open store at {store_path:?}"))?;
      serve(&cfg, heirloom_api::legacy_router(Arc::new(store.clone()))).await?;
      store.close().await.context("failed to close store")?;
    }
  }

  tracing::info!("store closed");
  Ok(())
}

/// Mount `api` under `/api` and serve it until a shutdown signal arrives
/// and in-flight requests have drained.
async fn serve(cfg: &ServerConfig, api: Router) -> anyhow::Result<()> {
  let app = Router::new()
    .nest("/api", api)
    .layer(TimeoutLayer::with_status_code(
      StatusCode::REQUEST_TIMEOUT,
      Duration::from_secs(cfg.request_timeout_secs),
    ))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http());

  let address = cfg.address();
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "failed to listen for Ctrl+C");
    }
  };

  #[cfg(unix)]
  let terminate = async {
    use tokio::signal::unix::{SignalKind, signal};
    match signal(SignalKind::terminate()) {
      Ok(mut sigterm) => {
        sigterm.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "failed to install SIGTERM handler");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
    _ = terminate => tracing::info!("received SIGTERM, shutting down"),
  }
}
