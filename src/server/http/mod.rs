//! HTTP front end: router and listener.
pub mod health;

use std::{future::Future, io};

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub const HEALTH_PATH: &str = "/health";

/// Router with every HTTP route, request tracing, and permissive CORS.
pub fn router() -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health::handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serve `router()` on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener) -> Result<()> {
    let local_addr = listener
        .local_addr()
        .context("failed to read HTTP listener address")?;
    tracing::info!(
        target: "mcp_api_boilerplate::http",
        bind_addr = %local_addr,
        "Started listening for HTTP requests"
    );

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c()))
        .await
        .with_context(|| format!("HTTP server on {local_addr} failed"))
}

/// Resolves once `signal` fires. If the signal handler cannot be installed
/// the server keeps running instead of shutting down.
async fn shutdown_on(signal: impl Future<Output = io::Result<()>>) {
    if let Err(err) = signal.await {
        tracing::error!(
            target: "mcp_api_boilerplate::http",
            error = %err,
            "Failed to install Ctrl-C handler; HTTP server will not stop on Ctrl-C"
        );
        std::future::pending::<()>().await;
    }
    tracing::info!(
        target: "mcp_api_boilerplate::http",
        "Received Ctrl-C; shutting down HTTP server"
    );
}
