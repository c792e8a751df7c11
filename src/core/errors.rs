use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// Message returned to clients for any internal pipeline failure.
/// Internal detail goes to the logs only.
pub const GENERIC_FAILURE_MESSAGE: &str = "Sorry, something went wrong.";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("extraction failed for {path}: {reason}")]
    Extraction { path: String, reason: String },
    #[error("embedding encoder error: {0}")]
    Encoding(String),
    #[error("vector store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("generation failed: {0}")]
    Generation(String),
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl PipelineError {
    pub fn extraction<E: std::fmt::Display>(path: &std::path::Path, err: E) -> Self {
        PipelineError::Extraction {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    pub fn encoding<E: std::fmt::Display>(err: E) -> Self {
        PipelineError::Encoding(err.to_string())
    }

    pub fn store<E: std::fmt::Display>(err: E) -> Self {
        PipelineError::StoreUnavailable(err.to_string())
    }

    pub fn generation<E: std::fmt::Display>(err: E) -> Self {
        PipelineError::Generation(err.to_string())
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            PipelineError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            _ => {
                tracing::error!("pipeline failure: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_FAILURE_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}
