//! Ingestion pipeline: fetch remote characters, enrich them, and persist
//! the ones whose names are not stored yet.

pub mod enrich;
pub mod error;
pub mod ingest;

pub use enrich::{enrich, enrich_all, normalize_scalars, preview_character};
pub use error::IngestError;
pub use ingest::{run_ingestion, IngestOptions, IngestionSummary};
