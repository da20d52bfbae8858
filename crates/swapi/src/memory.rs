//! In-memory [`CharacterSource`] for tests. Enabled by the `testing` feature.

use std::collections::HashMap;

use async_trait::async_trait;
use starchart_core::normalize::strip_unknown;

use crate::client::MAX_CHARACTERS;
use crate::error::RemoteFetchError;
use crate::models::RawRemoteCharacter;
use crate::source::CharacterSource;

/// A fixed set of characters and planets served from memory.
///
/// Character ids are 1-based positions in the list. Planet references not
/// registered with [`InMemorySource::with_planet`] resolve to `None`, the
/// same as a failed lookup against the real source.
#[derive(Debug, Default)]
pub struct InMemorySource {
    characters: Vec<RawRemoteCharacter>,
    planets: HashMap<String, String>,
    fail_listing: bool,
}

impl InMemorySource {
    pub fn new(characters: Vec<RawRemoteCharacter>) -> Self {
        Self {
            characters,
            ..Default::default()
        }
    }

    /// Register a planet reference and the name it resolves to.
    pub fn with_planet(mut self, reference: &str, name: &str) -> Self {
        self.planets.insert(reference.to_string(), name.to_string());
        self
    }

    /// Make every listing fetch fail with a 503.
    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }
}

#[async_trait]
impl CharacterSource for InMemorySource {
    async fn fetch_all_characters(&self) -> Result<Vec<RawRemoteCharacter>, RemoteFetchError> {
        if self.fail_listing {
            return Err(RemoteFetchError::Status {
                url: "memory://people/".to_string(),
                status: 503,
            });
        }
        Ok(self
            .characters
            .iter()
            .take(MAX_CHARACTERS)
            .cloned()
            .collect())
    }

    async fn fetch_character_by_id(
        &self,
        id: i64,
    ) -> Result<RawRemoteCharacter, RemoteFetchError> {
        usize::try_from(id)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.characters.get(i))
            .cloned()
            .ok_or_else(|| RemoteFetchError::Character {
                id,
                source: Box::new(RemoteFetchError::Status {
                    url: format!("memory://people/{id}/"),
                    status: 404,
                }),
            })
    }

    async fn resolve_homeworld_name(
        &self,
        reference: &str,
    ) -> Result<Option<String>, RemoteFetchError> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Ok(None);
        }
        if !(reference.starts_with("http://") || reference.starts_with("https://")) {
            return Err(RemoteFetchError::InvalidReference(reference.to_string()));
        }
        Ok(strip_unknown(self.planets.get(reference).cloned()))
    }
}
