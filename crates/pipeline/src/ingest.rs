//! Ingestion orchestration: fetch → enrich → insert-if-absent.

use serde::Serialize;
use sqlx::PgPool;
use starchart_db::models::character::Character;
use starchart_db::repositories::CharacterRepo;
use starchart_swapi::CharacterSource;

use crate::enrich::enrich_all;
use crate::error::IngestError;

/// Default number of homeworld lookups in flight at once.
pub const DEFAULT_HOMEWORLD_CONCURRENCY: usize = 4;

/// Tuning knobs for an ingestion run.
#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    pub homeworld_concurrency: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            homeworld_concurrency: DEFAULT_HOMEWORLD_CONCURRENCY,
        }
    }
}

/// Outcome of one run: everything seen versus what was actually persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionSummary {
    /// Characters fetched and enriched, including ones already stored.
    pub total_fetched: usize,
    /// Characters inserted by this run.
    pub new_characters: usize,
    /// The inserted rows, in source order.
    pub characters: Vec<Character>,
}

/// Import characters from `source` into the store.
///
/// Inserts run one at a time in source order with no enclosing
/// transaction: a store failure aborts the run but leaves earlier inserts
/// committed. A listing failure aborts before anything is written.
pub async fn run_ingestion(
    pool: &PgPool,
    source: &dyn CharacterSource,
    options: &IngestOptions,
) -> Result<IngestionSummary, IngestError> {
    let raws = source.fetch_all_characters().await?;
    let enriched = enrich_all(source, raws, options.homeworld_concurrency).await;
    let total_fetched = enriched.len();

    let mut characters = Vec::new();
    for input in &enriched {
        match CharacterRepo::insert_if_absent(pool, input).await {
            Ok(Some(created)) => {
                tracing::debug!(id = created.id, name = %created.name, "Stored new character");
                characters.push(created);
            }
            Ok(None) => {
                tracing::debug!(name = %input.name, "Character already stored, skipping");
            }
            Err(e) => {
                tracing::error!(
                    name = %input.name,
                    inserted = characters.len(),
                    error = %e,
                    "Store failed mid-ingestion"
                );
                return Err(e.into());
            }
        }
    }

    tracing::info!(
        total_fetched,
        new_characters = characters.len(),
        "Ingestion complete"
    );

    Ok(IngestionSummary {
        total_fetched,
        new_characters: characters.len(),
        characters,
    })
}
