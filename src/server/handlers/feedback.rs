use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::core::errors::PipelineError;
use crate::feedback::{Feedback, FeedbackSink};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub message: String,
}

pub async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    Json(feedback): Json<Feedback>,
) -> Result<Json<FeedbackResponse>, PipelineError> {
    if !(1..=5).contains(&feedback.rating) {
        return Err(PipelineError::BadRequest(format!(
            "rating must be between 1 and 5, got {}",
            feedback.rating
        )));
    }

    state.feedback.record(&feedback).await?;

    Ok(Json(FeedbackResponse {
        message: "Feedback saved.".to_string(),
    }))
}
