//! Dokploy Viewer
//!
//! Read-only dashboard proxying Dokploy's tRPC API behind a small JSON
//! surface plus a single-page web UI.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod middleware;
pub mod state;

use std::sync::Arc;

use config::EnvConfig;
use state::AppState;

/// Start the HTTP server and run until shutdown.
pub async fn run(config: EnvConfig) -> std::io::Result<()> {
    let port = config.port;
    let state = Arc::new(AppState::from_config(config));
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "Dokploy Viewer listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
