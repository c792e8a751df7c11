//! Offline ingestion pipeline: source documents are extracted to plain
//! text, segmented into paragraphs, embedded, and inserted into the vector
//! store. Runs via the `ingest` binary; nothing here is touched on the
//! query path.

mod extract;
mod segment;

pub use extract::extract;
pub use segment::segment;
