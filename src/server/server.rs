//! Router assembly and server startup.

use anyhow::Result;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::info;

use crate::generation::SongGenerator;

use super::http_layers::log_requests;
use super::routes;
use super::state::ServerState;
use super::ServerConfig;

/// Build the full application router. Extracted from [`run_server`] so tests
/// can serve it on an ephemeral port.
pub fn make_app(config: ServerConfig, generator: Arc<SongGenerator>) -> Router {
    // Idempotent: re-registration of already-known metrics is ignored.
    super::metrics::init_metrics();

    let state = ServerState {
        config,
        start_time: Instant::now(),
        generator,
    };

    Router::new()
        .route("/", get(routes::home))
        .route("/health", get(routes::health))
        .route("/v1/prompt/validate", post(routes::validate_prompt))
        .route("/v1/prompt/feedback", post(routes::prompt_feedback))
        .route("/v1/songs/prompt", post(routes::preview_prompt))
        .route("/v1/songs/generate", post(routes::generate_song))
        .route("/metrics", get(routes::metrics_text))
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}

pub async fn run_server(config: ServerConfig, generator: Arc<SongGenerator>) -> Result<()> {
    let port = config.port;
    let app = make_app(config, generator);

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
