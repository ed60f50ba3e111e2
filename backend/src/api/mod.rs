//! API module
//!
//! Contains HTTP request handlers and the router that wires them together.

pub mod lyrics;
pub mod middleware;
pub mod songs;
pub mod ui;

use crate::state::SharedState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the server answers
    pub status: String,
    /// Crate version
    pub version: String,
    /// Human-readable message
    pub message: String,
}

/// GET /api/health - Liveness probe
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Lyrics backend is healthy".to_string(),
    })
}

/// Build the application router with all routes and middleware
pub fn router(state: SharedState) -> Router {
    Router::new()
        // Browser UI
        .route("/", get(ui::index))
        .route("/static/script.js", get(ui::script))
        .route("/api/health", get(health_check))
        // Song store
        .route("/api/songs", get(songs::list_songs))
        .route("/api/delete_song", post(songs::delete_song))
        // Lyrics lookup and editing
        .route("/api/lyrics", get(lyrics::get_lyrics))
        .route("/api/lyrics/edit", post(lyrics::edit_lyrics))
        // Middleware (order matters - request_id wraps no_cache)
        .layer(axum::middleware::from_fn(middleware::no_cache))
        .layer(axum::middleware::from_fn(middleware::request_id))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
