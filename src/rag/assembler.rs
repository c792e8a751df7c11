use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::errors::PipelineError;
use crate::embedding::EmbeddingEncoder;
use crate::store::VectorStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextAssemblerConfig {
    /// Number of nearest chunks retrieved per query.
    pub top_k: usize,
    /// Character budget for the assembled context. Lowest-ranked chunks are
    /// dropped first when over budget; the top hit is always kept.
    pub max_context_chars: usize,
}

impl Default for ContextAssemblerConfig {
    fn default() -> Self {
        Self {
            top_k: 20,
            max_context_chars: 8000,
        }
    }
}

/// Builds the grounding context for a question: encode the query, retrieve
/// the top-K nearest chunks, and join their texts closest-first with a
/// single space. There is no relevance threshold; low-scoring chunks stay
/// in as long as they rank within K and fit the budget.
pub struct ContextAssembler {
    encoder: Arc<dyn EmbeddingEncoder>,
    store: Arc<dyn VectorStore>,
    config: ContextAssemblerConfig,
}

impl ContextAssembler {
    pub fn new(
        encoder: Arc<dyn EmbeddingEncoder>,
        store: Arc<dyn VectorStore>,
        config: ContextAssemblerConfig,
    ) -> Self {
        Self {
            encoder,
            store,
            config,
        }
    }

    /// Returns the assembled context, or an empty string when the store has
    /// nothing to offer.
    pub async fn assemble(&self, query: &str) -> Result<String, PipelineError> {
        let embedding = self.encoder.encode(query).await?;
        let hits = self.store.query(&embedding, self.config.top_k).await?;

        if hits.is_empty() {
            return Ok(String::new());
        }

        let mut context = String::new();
        for (rank, hit) in hits.iter().enumerate() {
            let text = hit.record.content.as_str();
            if rank == 0 {
                context.push_str(text);
                continue;
            }
            if context.len() + 1 + text.len() > self.config.max_context_chars {
                tracing::debug!(
                    dropped = hits.len() - rank,
                    budget = self.config.max_context_chars,
                    "context budget reached"
                );
                break;
            }
            context.push(' ');
            context.push_str(text);
        }

        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{RetrievedChunk, VectorRecord};
    use async_trait::async_trait;

    /// Maps known texts to fixed vectors; anything else points nowhere.
    struct StubEncoder;

    #[async_trait]
    impl EmbeddingEncoder for StubEncoder {
        fn dimension(&self) -> usize {
            3
        }

        fn version(&self) -> &str {
            "stub-encoder-v1"
        }

        async fn encode(&self, text: &str) -> Result<Vec<f32>, PipelineError> {
            Ok(match text {
                "how do I turn it on" => vec![0.9, 0.1, 0.0],
                _ => vec![0.0, 0.0, 1.0],
            })
        }

        async fn encode_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, PipelineError> {
            let mut out = Vec::with_capacity(texts.len());
            for text in texts {
                out.push(self.encode(text).await?);
            }
            Ok(out)
        }
    }

    /// Returns a canned ranking regardless of the query vector.
    struct StubStore {
        hits: Vec<(i64, &'static str, f32)>,
    }

    #[async_trait]
    impl VectorStore for StubStore {
        async fn insert(&self, _: &str, _: &[f32]) -> Result<i64, PipelineError> {
            unimplemented!("read-only stub")
        }

        async fn insert_batch(
            &self,
            _: &[(String, Vec<f32>)],
        ) -> Result<Vec<i64>, PipelineError> {
            unimplemented!("read-only stub")
        }

        async fn query(
            &self,
            _: &[f32],
            k: usize,
        ) -> Result<Vec<RetrievedChunk>, PipelineError> {
            Ok(self
                .hits
                .iter()
                .take(k)
                .map(|&(id, content, distance)| RetrievedChunk {
                    record: VectorRecord {
                        id,
                        content: content.to_string(),
                        embedding: vec![0.0; 3],
                    },
                    distance,
                })
                .collect())
        }

        async fn count(&self) -> Result<usize, PipelineError> {
            Ok(self.hits.len())
        }
    }

    fn assembler(hits: Vec<(i64, &'static str, f32)>, config: ContextAssemblerConfig) -> ContextAssembler {
        ContextAssembler::new(Arc::new(StubEncoder), Arc::new(StubStore { hits }), config)
    }

    #[tokio::test]
    async fn joins_chunks_closest_first_with_single_space() {
        let assembler = assembler(
            vec![(1, "closest", 0.1), (2, "second", 0.4), (3, "third", 0.9)],
            ContextAssemblerConfig::default(),
        );

        let context = assembler.assemble("how do I turn it on").await.expect("assemble");
        assert_eq!(context, "closest second third");
    }

    #[tokio::test]
    async fn empty_store_yields_empty_string() {
        let assembler = assembler(vec![], ContextAssemblerConfig::default());
        let context = assembler.assemble("hello").await.expect("assemble");
        assert_eq!(context, "");
    }

    #[tokio::test]
    async fn budget_drops_lowest_ranked_chunks_first() {
        let config = ContextAssemblerConfig {
            top_k: 20,
            max_context_chars: 15,
        };
        let assembler = assembler(
            vec![(1, "1234567890", 0.1), (2, "abcd", 0.2), (3, "efgh", 0.3)],
            config,
        );

        // "1234567890 abcd" is exactly 15 chars; "efgh" no longer fits.
        let context = assembler.assemble("q").await.expect("assemble");
        assert_eq!(context, "1234567890 abcd");
    }

    #[tokio::test]
    async fn top_chunk_survives_even_when_over_budget() {
        let config = ContextAssemblerConfig {
            top_k: 20,
            max_context_chars: 4,
        };
        let assembler = assembler(vec![(1, "longer than budget", 0.1)], config);

        let context = assembler.assemble("q").await.expect("assemble");
        assert_eq!(context, "longer than budget");
    }

    #[tokio::test]
    async fn top_k_limits_retrieval() {
        let config = ContextAssemblerConfig {
            top_k: 2,
            max_context_chars: 8000,
        };
        let assembler = assembler(
            vec![(1, "a", 0.1), (2, "b", 0.2), (3, "c", 0.3)],
            config,
        );

        let context = assembler.assemble("q").await.expect("assemble");
        assert_eq!(context, "a b");
    }
}
