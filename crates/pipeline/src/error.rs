use starchart_swapi::RemoteFetchError;

/// Failure of an ingestion run.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The listing fetch failed; nothing was persisted.
    #[error(transparent)]
    Remote(#[from] RemoteFetchError),

    /// A store operation failed; earlier inserts stay committed.
    #[error("Store operation failed: {0}")]
    Store(#[from] sqlx::Error),
}
