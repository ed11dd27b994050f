//! pantheon-server: HTTP surface for the personality quiz.
//!
//! Exposes quiz generation and scoring as JSON endpoints over a shared
//! [`QuizEngine`](pantheon_core::engine::QuizEngine).

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Build the application router with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::mbti::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process receives Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(
        provider = state.engine.provider_name(),
        model = %state.engine.config().model,
        "pantheon listening on {}",
        listener.local_addr().unwrap_or(addr)
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
