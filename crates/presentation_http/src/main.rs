//! GreenRoute HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::time::Duration;

use anyhow::Context;
use infrastructure::{AppConfig, init_logging};
use presentation_http::{AppState, ShutdownOutcome, routes, serve};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; variables may come from the environment
    let dotenv = dotenvy::dotenv();

    let config = AppConfig::load().context("Failed to load configuration")?;

    init_logging(&config.server).context("Failed to initialize logging")?;

    info!("🚲 GreenRoute v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = dotenv {
        info!(path = %path.display(), "Loaded environment file");
    }

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    info!(
        host = %config.server.host,
        port = config.server.port,
        index_page = %config.server.index_page,
        directions_timeout_secs = config.directions.timeout_secs,
        "Configuration loaded"
    );

    let state = AppState::from_config(&config).context("Failed to initialize services")?;
    let app = routes::create_app(state, &config.server);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    match serve(listener, app, shutdown_signal(), shutdown_timeout).await? {
        ShutdownOutcome::Drained => info!("👋 Server shutdown complete"),
        ShutdownOutcome::TimedOut => info!("👋 Server shutdown complete (forced)"),
    }

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            },
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
