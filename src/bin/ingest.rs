//! Ingestion CLI: `ingest <file.pdf|file.txt> ...`
//!
//! Extracts each document, segments it into paragraphs, embeds the
//! paragraphs in one batch, and appends them to the vector store. A
//! document that cannot be read is logged and skipped; the rest of the
//! batch proceeds.

use std::path::Path;
use std::sync::Arc;

use helpbot::core::config::{AppPaths, Settings};
use helpbot::embedding::{EmbeddingEncoder, RemoteEncoder};
use helpbot::ingest;
use helpbot::store::{SqliteVectorStore, VectorStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: ingest <file.pdf|file.txt> ...");
        std::process::exit(2);
    }

    let paths = AppPaths::new();
    let settings = Settings::load(&paths.settings_path)?;

    let encoder = Arc::new(RemoteEncoder::new(
        settings.embedding_base_url.clone(),
        settings.embedding_model.clone(),
        settings.embedding_dimension,
    ));
    let store =
        SqliteVectorStore::open(&paths.db_path, encoder.version(), encoder.dimension()).await?;

    let mut chunks: Vec<String> = Vec::new();
    for arg in &args {
        let path = Path::new(arg);
        match ingest::extract(path) {
            Ok(text) => {
                let segments = ingest::segment(&text);
                tracing::info!("{}: {} paragraphs", arg, segments.len());
                chunks.extend(segments);
            }
            Err(err) => {
                tracing::warn!("skipping {}: {}", arg, err);
            }
        }
    }

    if chunks.is_empty() {
        tracing::info!("nothing to ingest");
        return Ok(());
    }

    let embeddings = encoder.encode_batch(&chunks).await?;
    let items: Vec<(String, Vec<f32>)> = chunks.into_iter().zip(embeddings).collect();
    let ids = store.insert_batch(&items).await?;

    tracing::info!(
        "ingested {} chunks, store now holds {}",
        ids.len(),
        store.count().await?
    );

    Ok(())
}
