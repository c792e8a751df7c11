//! Vector store boundary.
//!
//! Records are append-only: created at ingestion, immutable afterwards, and
//! never exposed for update or delete. Ids are store-assigned and strictly
//! increasing, which also gives nearest-neighbor queries a stable tie-break.

mod sqlite;

pub use sqlite::SqliteVectorStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::errors::PipelineError;

/// A persisted (chunk, embedding) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorRecord {
    /// Unique, monotonically increasing id assigned at insert.
    pub id: i64,
    pub content: String,
    pub embedding: Vec<f32>,
}

/// One nearest-neighbor hit. Smaller distance means closer.
#[derive(Debug, Clone)]
pub struct RetrievedChunk {
    pub record: VectorRecord,
    pub distance: f32,
}

#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Appends a new record and returns its id. Never overwrites; ingesting
    /// the same chunk twice produces two records.
    async fn insert(&self, content: &str, embedding: &[f32]) -> Result<i64, PipelineError>;

    /// Inserts pairs sequentially. Not atomic: a failure partway leaves the
    /// already-inserted prefix in place.
    async fn insert_batch(
        &self,
        items: &[(String, Vec<f32>)],
    ) -> Result<Vec<i64>, PipelineError>;

    /// Returns up to `k` records nearest to `embedding`, ordered by
    /// ascending distance, ties broken by insertion id. An empty store
    /// yields an empty result, not an error.
    async fn query(
        &self,
        embedding: &[f32],
        k: usize,
    ) -> Result<Vec<RetrievedChunk>, PipelineError>;

    async fn count(&self) -> Result<usize, PipelineError>;
}
