use async_trait::async_trait;

use crate::error::RemoteFetchError;
use crate::models::RawRemoteCharacter;

/// Where raw characters and planet names come from.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Walk the paginated listing, capped at [`crate::MAX_CHARACTERS`]
    /// records. Fails as a whole if any page fails.
    async fn fetch_all_characters(&self) -> Result<Vec<RawRemoteCharacter>, RemoteFetchError>;

    /// Fetch one character by its remote id.
    async fn fetch_character_by_id(&self, id: i64)
        -> Result<RawRemoteCharacter, RemoteFetchError>;

    /// Resolve a homeworld reference to a planet name.
    ///
    /// `Ok(None)` covers every ordinary miss: empty reference, the
    /// `"unknown"` sentinel, and failed lookups. `Err` is reserved for
    /// references that are not usable at all.
    async fn resolve_homeworld_name(
        &self,
        reference: &str,
    ) -> Result<Option<String>, RemoteFetchError>;
}
