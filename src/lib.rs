//! Retrieval-augmented product-help backend.
//!
//! Ingestion (offline): extract → segment → embed → vector store.
//! Query (online): embed question → nearest chunks → bounded context →
//! one generation call with the running conversation transcript.

pub mod chat;
pub mod core;
pub mod embedding;
pub mod feedback;
pub mod history;
pub mod ingest;
pub mod llm;
pub mod logging;
pub mod rag;
pub mod server;
pub mod state;
pub mod store;
