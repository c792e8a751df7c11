use async_trait::async_trait;

use super::types::ChatRequest;
use crate::core::errors::PipelineError;

/// Opaque text-generation capability: an ordered list of {role, content}
/// turns in, generated text out. One call per question; no retries or
/// streaming at this layer.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// provider name (e.g. "openai-compat")
    fn name(&self) -> &str;

    /// check if the provider is healthy/reachable
    async fn health_check(&self) -> Result<bool, PipelineError>;

    /// chat completion (non-streaming)
    async fn chat(&self, request: ChatRequest, model_id: &str) -> Result<String, PipelineError>;
}
