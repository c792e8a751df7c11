//! Star-rating feedback persistence.
//!
//! Feedback is not part of answer correctness; it is collected by the
//! front-end per response and appended to a plain-text log for later
//! review.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;

use crate::core::errors::PipelineError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub response_content: String,
    /// Star rating, 1..=5. Validated at the boundary.
    pub rating: u8,
}

#[async_trait]
pub trait FeedbackSink: Send + Sync {
    async fn record(&self, feedback: &Feedback) -> Result<(), PipelineError>;
}

/// Append-only `feedback.txt` in the data directory.
pub struct FileFeedbackLog {
    path: PathBuf,
}

impl FileFeedbackLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl FeedbackSink for FileFeedbackLog {
    async fn record(&self, feedback: &Feedback) -> Result<(), PipelineError> {
        let entry = format!(
            "Response: {}\nRating: {} stars\n\n",
            feedback.response_content, feedback.rating
        );

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(PipelineError::store)?;
        file.write_all(entry.as_bytes())
            .await
            .map_err(PipelineError::store)?;
        file.flush().await.map_err(PipelineError::store)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn entries_append_in_reference_format() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("feedback.txt");
        let log = FileFeedbackLog::new(path.clone());

        log.record(&Feedback {
            response_content: "Apologies!".to_string(),
            rating: 5,
        })
        .await
        .expect("record");
        log.record(&Feedback {
            response_content: "Happy to help...".to_string(),
            rating: 4,
        })
        .await
        .expect("record");

        let contents = std::fs::read_to_string(&path).expect("read");
        assert_eq!(
            contents,
            "Response: Apologies!\nRating: 5 stars\n\nResponse: Happy to help...\nRating: 4 stars\n\n"
        );
    }
}
