use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::chat::ConversationOrchestrator;
use crate::core::config::{AppPaths, Settings};
use crate::embedding::{EmbeddingEncoder, RemoteEncoder};
use crate::feedback::{FeedbackSink, FileFeedbackLog};
use crate::llm::{ChatProvider, OpenAiCompatProvider};
use crate::rag::{ContextAssembler, ContextAssemblerConfig};
use crate::store::{SqliteVectorStore, VectorStore};

/// Every collaborator the pipeline needs, constructed exactly once at
/// startup and injected through trait objects. Tests swap in stubs at the
/// same seams.
#[derive(Clone)]
pub struct AppState {
    pub paths: Arc<AppPaths>,
    pub settings: Settings,
    pub store: Arc<dyn VectorStore>,
    pub llm: Arc<dyn ChatProvider>,
    pub assembler: Arc<ContextAssembler>,
    pub orchestrator: Arc<ConversationOrchestrator>,
    pub feedback: Arc<dyn FeedbackSink>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Builds the production pipeline against `paths`. Paths (and logging)
    /// are set up by the caller first so that failures in here are already
    /// captured by the subscriber.
    pub async fn initialize(paths: Arc<AppPaths>) -> anyhow::Result<Arc<Self>> {
        let settings = Settings::load(&paths.settings_path)?;

        let encoder: Arc<dyn EmbeddingEncoder> = Arc::new(RemoteEncoder::new(
            settings.embedding_base_url.clone(),
            settings.embedding_model.clone(),
            settings.embedding_dimension,
        ));
        let store: Arc<dyn VectorStore> = Arc::new(
            SqliteVectorStore::open(&paths.db_path, encoder.version(), encoder.dimension())
                .await?,
        );
        let provider: Arc<dyn ChatProvider> =
            Arc::new(OpenAiCompatProvider::new(settings.llm_base_url.clone()));
        let feedback: Arc<dyn FeedbackSink> =
            Arc::new(FileFeedbackLog::new(paths.feedback_path.clone()));

        Ok(Self::from_parts(
            paths, settings, encoder, store, provider, feedback,
        ))
    }

    /// Wires the pipeline from already-built collaborators. `initialize`
    /// goes through here; tests call it directly with stubs.
    pub fn from_parts(
        paths: Arc<AppPaths>,
        settings: Settings,
        encoder: Arc<dyn EmbeddingEncoder>,
        store: Arc<dyn VectorStore>,
        provider: Arc<dyn ChatProvider>,
        feedback: Arc<dyn FeedbackSink>,
    ) -> Arc<Self> {
        let assembler = Arc::new(ContextAssembler::new(
            encoder,
            store.clone(),
            ContextAssemblerConfig {
                top_k: settings.top_k,
                max_context_chars: settings.max_context_chars,
            },
        ));
        let orchestrator = Arc::new(ConversationOrchestrator::new(
            provider.clone(),
            settings.chat_model.clone(),
            settings.temperature,
        ));

        Arc::new(AppState {
            paths,
            settings,
            store,
            llm: provider,
            assembler,
            orchestrator,
            feedback,
            started_at: Utc::now(),
        })
    }
}
