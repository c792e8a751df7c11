//! Embedding encoder boundary.
//!
//! The encoder is a black box: fixed output dimension, version-pinned, and
//! deterministic for a given version. The version tag travels with every
//! stored record so that vectors from different encoder versions are never
//! compared (the store enforces this at open and insert time).

mod remote;

pub use remote::RemoteEncoder;

use async_trait::async_trait;

use crate::core::errors::PipelineError;

#[async_trait]
pub trait EmbeddingEncoder: Send + Sync {
    /// Output dimension of every vector this encoder produces.
    fn dimension(&self) -> usize;

    /// Version tag identifying the embedding space. Vectors from different
    /// versions must never be mixed in one store.
    fn version(&self) -> &str;

    async fn encode(&self, text: &str) -> Result<Vec<f32>, PipelineError>;

    async fn encode_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, PipelineError>;
}
