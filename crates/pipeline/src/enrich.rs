//! Turning raw remote characters into insertable rows.

use futures::stream::{self, StreamExt};
use starchart_core::normalize::strip_unknown;
use starchart_db::models::character::NewCharacter;
use starchart_swapi::{CharacterSource, RawRemoteCharacter, RemoteFetchError};

/// Normalize every scalar field and drop the homeworld reference.
///
/// The returned row has `homeworld = None`; callers fill it in from a
/// resolved planet name when they have one.
pub fn normalize_scalars(raw: RawRemoteCharacter) -> NewCharacter {
    NewCharacter {
        name: raw.name,
        height: strip_unknown(raw.height),
        mass: strip_unknown(raw.mass),
        hair_color: strip_unknown(raw.hair_color),
        skin_color: strip_unknown(raw.skin_color),
        eye_color: strip_unknown(raw.eye_color),
        birth_year: strip_unknown(raw.birth_year),
        gender: strip_unknown(raw.gender),
        homeworld: None,
        url: strip_unknown(raw.url),
    }
}

/// Enrich one raw character: normalize scalars and resolve the homeworld.
///
/// Never fails. If resolution errors out (as opposed to resolving to
/// nothing), the character is kept with no homeworld.
pub async fn enrich(source: &dyn CharacterSource, raw: RawRemoteCharacter) -> NewCharacter {
    let reference = raw.homeworld.clone().unwrap_or_default();
    match source.resolve_homeworld_name(&reference).await {
        Ok(homeworld) => NewCharacter {
            homeworld,
            ..normalize_scalars(raw)
        },
        Err(e) => {
            tracing::error!(
                name = %raw.name,
                error = %e,
                "Homeworld enrichment failed, storing character without homeworld"
            );
            normalize_scalars(raw)
        }
    }
}

/// Enrich a batch with at most `concurrency` homeworld lookups in flight.
///
/// Output order matches input order.
pub async fn enrich_all(
    source: &dyn CharacterSource,
    raws: Vec<RawRemoteCharacter>,
    concurrency: usize,
) -> Vec<NewCharacter> {
    stream::iter(raws)
        .map(|raw| enrich(source, raw))
        .buffered(concurrency.max(1))
        .collect()
        .await
}

/// Fetch one remote character by id and return its enriched form without
/// persisting it.
pub async fn preview_character(
    source: &dyn CharacterSource,
    id: i64,
) -> Result<NewCharacter, RemoteFetchError> {
    let raw = source.fetch_character_by_id(id).await?;
    Ok(enrich(source, raw).await)
}
