//! SQLite-backed vector store.
//!
//! Embeddings are stored as little-endian f32 blobs and compared with
//! brute-force cosine distance (1 - cosine similarity) in memory. For the
//! corpus sizes this service targets (thousands of paragraphs) a linear
//! scan is cheaper than maintaining an ANN index; the trait seam leaves
//! room for one when corpora outgrow that.

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Row, SqlitePool};

use super::{RetrievedChunk, VectorRecord, VectorStore};
use crate::core::errors::PipelineError;

#[derive(Debug)]
pub struct SqliteVectorStore {
    pool: SqlitePool,
    encoder_version: String,
    dimension: usize,
}

impl SqliteVectorStore {
    /// Opens (or creates) the store at `db_path`.
    ///
    /// Schema creation is idempotent and runs only here, never per request.
    /// The encoder version is pinned in `store_meta` on first open; a later
    /// open with a different version fails rather than silently mixing
    /// embedding spaces.
    pub async fn open(
        db_path: &Path,
        encoder_version: &str,
        dimension: usize,
    ) -> Result<Self, PipelineError> {
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(4)
            .connect_with(options)
            .await
            .map_err(PipelineError::store)?;

        let store = Self {
            pool,
            encoder_version: encoder_version.to_string(),
            dimension,
        };
        store.init_schema().await?;
        store.check_encoder_version().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), PipelineError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS chunks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                content TEXT NOT NULL,
                embedding BLOB NOT NULL,
                encoder_version TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT (STRFTIME('%Y-%m-%dT%H:%M:%fZ', 'now'))
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(PipelineError::store)?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS store_meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(PipelineError::store)?;

        Ok(())
    }

    async fn check_encoder_version(&self) -> Result<(), PipelineError> {
        sqlx::query("INSERT OR IGNORE INTO store_meta (key, value) VALUES ('encoder_version', ?)")
            .bind(&self.encoder_version)
            .execute(&self.pool)
            .await
            .map_err(PipelineError::store)?;

        let row = sqlx::query("SELECT value FROM store_meta WHERE key = 'encoder_version'")
            .fetch_one(&self.pool)
            .await
            .map_err(PipelineError::store)?;
        let stored: String = row.get("value");

        if stored != self.encoder_version {
            return Err(PipelineError::StoreUnavailable(format!(
                "encoder version mismatch: store was built with {:?}, configured encoder is {:?}",
                stored, self.encoder_version
            )));
        }

        Ok(())
    }

    fn serialize_embedding(embedding: &[f32]) -> Vec<u8> {
        embedding.iter().flat_map(|f| f.to_le_bytes()).collect()
    }

    fn deserialize_embedding(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect()
    }

    fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
        if a.len() != b.len() || a.is_empty() {
            return 1.0;
        }

        let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
        let denom = norm_a * norm_b;

        if denom <= f32::EPSILON {
            1.0
        } else {
            1.0 - dot / denom
        }
    }

    fn check_dimension(&self, embedding: &[f32]) -> Result<(), PipelineError> {
        if embedding.len() != self.dimension {
            return Err(PipelineError::BadRequest(format!(
                "embedding dimension mismatch: store expects {}, got {}",
                self.dimension,
                embedding.len()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl VectorStore for SqliteVectorStore {
    async fn insert(&self, content: &str, embedding: &[f32]) -> Result<i64, PipelineError> {
        self.check_dimension(embedding)?;

        let blob = Self::serialize_embedding(embedding);
        let result =
            sqlx::query("INSERT INTO chunks (content, embedding, encoder_version) VALUES (?, ?, ?)")
                .bind(content)
                .bind(blob)
                .bind(&self.encoder_version)
                .execute(&self.pool)
                .await
                .map_err(PipelineError::store)?;

        Ok(result.last_insert_rowid())
    }

    async fn insert_batch(
        &self,
        items: &[(String, Vec<f32>)],
    ) -> Result<Vec<i64>, PipelineError> {
        let mut ids = Vec::with_capacity(items.len());
        for (content, embedding) in items {
            ids.push(self.insert(content, embedding).await?);
        }
        Ok(ids)
    }

    async fn query(
        &self,
        embedding: &[f32],
        k: usize,
    ) -> Result<Vec<RetrievedChunk>, PipelineError> {
        if k == 0 {
            return Ok(Vec::new());
        }
        self.check_dimension(embedding)?;

        let rows = sqlx::query("SELECT id, content, embedding FROM chunks ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(PipelineError::store)?;

        let mut hits: Vec<RetrievedChunk> = rows
            .iter()
            .map(|row| {
                let blob: Vec<u8> = row.get("embedding");
                let stored = Self::deserialize_embedding(&blob);
                let distance = Self::cosine_distance(embedding, &stored);
                RetrievedChunk {
                    record: VectorRecord {
                        id: row.get("id"),
                        content: row.get("content"),
                        embedding: stored,
                    },
                    distance,
                }
            })
            .collect();

        // Ascending distance; rows arrive in id order, so the stable sort
        // breaks ties by insertion id.
        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(k);

        Ok(hits)
    }

    async fn count(&self) -> Result<usize, PipelineError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM chunks")
            .fetch_one(&self.pool)
            .await
            .map_err(PipelineError::store)?;
        let n: i64 = row.get("n");
        Ok(n as usize)
    }
}
