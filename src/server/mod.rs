//! HTTP server exposing the relay endpoint.

pub mod handlers;

pub use handlers::{AppState, ErrorResponse, HealthResponse, SuccessResponse};

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use tracing::info;

/// Build the application router.
///
/// - `POST /api/contact` relays one contact submission
/// - `GET /health` liveness probe
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(handlers::submit_contact))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn run_server(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind listener to {}: {}", addr, e))?;

    info!("Contact relay listening on http://{}/api/contact", addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
