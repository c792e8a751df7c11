use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::handlers::{chat, feedback, health};
use crate::state::AppState;

/// Builds the application router: the chat boundary, feedback intake, and a
/// liveness probe, with CORS for the local front-end and request tracing.
pub fn router(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/get-response", post(chat::get_response))
        .route("/submit-feedback", post(feedback::submit_feedback))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
