//! Lottery draw server.
//!
//! Holds one draw engine per session and serves the draw API over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Error};
use lottery_engine::session::DrawSessionManager;
use lottery_server::{api, config::ServerConfig, logging, metrics};
use pico_args::Arguments;
use tracing::info;

const HELP: &str = "\
Run the lottery draw server

USAGE:
  lottery_server [OPTIONS]

OPTIONS:
  --bind          IP:PORT  Server socket bind address   [default: env SERVER_BIND or 127.0.0.1:8080]
  --metrics-bind  IP:PORT  Prometheus scrape address    [default: env METRICS_BIND, disabled if unset]
  --max-sessions  N        Maximum concurrent draws     [default: env MAX_SESSIONS or 1000]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  METRICS_BIND             Prometheus exporter bind address
  MAX_SESSIONS             Maximum concurrent draw sessions
  MAX_UPLOAD_BYTES         Maximum request body size [default: 16777216]
  REPRODUCIBLE_SEED        Seed for reproducible draws without their own seed
  RUST_LOG                 Log filter [default: info,hyper=warn]
";

struct Args {
    bind: Option<SocketAddr>,
    metrics_bind: Option<SocketAddr>,
    max_sessions: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        bind: pargs.opt_value_from_str("--bind")?,
        metrics_bind: pargs.opt_value_from_str("--metrics-bind")?,
        max_sessions: pargs.opt_value_from_str("--max-sessions")?,
    };

    let config = ServerConfig::from_env(args.bind, args.metrics_bind, args.max_sessions)?;
    config.validate()?;

    logging::init();
    info!("Starting lottery draw server at {}", config.bind);

    if let Some(addr) = config.metrics_bind {
        metrics::init_metrics(addr).map_err(anyhow::Error::msg)?;
        info!("Prometheus metrics available at http://{}/metrics", addr);
    }

    let sessions = Arc::new(DrawSessionManager::new(config.sessions.clone()));
    info!(
        "Accepting up to {} concurrent draws, uploads up to {} bytes",
        config.sessions.max_sessions, config.max_upload_bytes
    );

    let state = api::AppState {
        sessions,
        max_upload_bytes: config.max_upload_bytes,
    };
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
