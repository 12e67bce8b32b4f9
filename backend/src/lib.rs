//! reframe-api backend
//!
//! A small copy-generation service: POST a topic and a language
//! preference, receive exactly three (title, desc) reframings. Live
//! generation goes through an OpenAI-compatible backend; a static
//! per-language catalog guarantees a usable answer when the backend is
//! absent or misbehaves.

pub mod config;
pub mod handlers;
pub mod services;
pub mod utils;


use std::sync::Arc;

use axum::{Router, routing::post};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::generation::ReframeService;

/// Shared application state.
pub type AppState = Arc<ReframeService>;

/// Build the application router. Non-POST methods on the route get a
/// 405 from axum's method routing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/generate", post(handlers::generate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
