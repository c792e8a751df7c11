use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::state::AppState;
use crate::store::VectorStore;

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (status, chunks) = match state.store.count().await {
        Ok(n) => ("ok", Some(n)),
        Err(err) => {
            tracing::warn!("health probe: vector store unavailable: {}", err);
            ("degraded", None)
        }
    };

    Json(json!({
        "status": status,
        "chunks": chunks,
        "started_at": state.started_at.to_rfc3339(),
    }))
}
