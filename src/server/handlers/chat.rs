use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::core::errors::PipelineError;
use crate::history::ConversationTurn;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
    /// Accumulated turns from prior calls, oldest first. The backend never
    /// stores these; the session owns them.
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub response: String,
}

pub async fn get_response(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PromptRequest>,
) -> Result<Json<PromptResponse>, PipelineError> {
    if request.prompt.trim().is_empty() {
        return Err(PipelineError::BadRequest("prompt must not be empty".to_string()));
    }

    let context = state.assembler.assemble(&request.prompt).await?;
    let response = state
        .orchestrator
        .respond(&request.history, &request.prompt, &context)
        .await?;

    Ok(Json(PromptResponse { response }))
}
