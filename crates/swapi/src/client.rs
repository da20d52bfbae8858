//! HTTP implementation of [`CharacterSource`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use starchart_core::normalize::strip_unknown;

use crate::error::RemoteFetchError;
use crate::models::{PeoplePage, Planet, RawRemoteCharacter};
use crate::source::CharacterSource;

/// Upper bound on records returned by a listing walk.
pub const MAX_CHARACTERS: usize = 20;

/// Default remote source.
pub const DEFAULT_BASE_URL: &str = "https://swapi.py4e.com/api";

/// Default per-call timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`SwapiClient`].
#[derive(Debug, Clone)]
pub struct SwapiConfig {
    /// Base URL without trailing slash, e.g. `https://swapi.py4e.com/api`.
    pub base_url: String,
    /// Timeout applied to every outbound request.
    pub timeout: Duration,
}

impl Default for SwapiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client for the remote character source.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    client: reqwest::Client,
    base_url: String,
}

impl SwapiClient {
    pub fn new(config: &SwapiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("starchart/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, &config.base_url))
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Follow `next` links from the first listing page until there are no
    /// more pages or [`MAX_CHARACTERS`] records have been collected.
    pub async fn fetch_all_characters(&self) -> Result<Vec<RawRemoteCharacter>, RemoteFetchError> {
        let mut characters = Vec::new();
        let mut next = Some(format!("{}/people/", self.base_url));
        let mut page = 0u32;

        while let Some(url) = next {
            page += 1;
            let listing: PeoplePage = self.get_json(&url).await.inspect_err(|e| {
                tracing::error!(page, url = %url, error = %e, "Listing page fetch failed");
            })?;
            tracing::debug!(page, url = %url, count = listing.results.len(), "Fetched listing page");

            characters.extend(listing.results);
            if characters.len() >= MAX_CHARACTERS {
                break;
            }
            next = listing.next.filter(|n| !n.is_empty());
        }

        characters.truncate(MAX_CHARACTERS);
        tracing::info!(pages = page, fetched = characters.len(), "Fetched remote characters");
        Ok(characters)
    }

    pub async fn fetch_character_by_id(
        &self,
        id: i64,
    ) -> Result<RawRemoteCharacter, RemoteFetchError> {
        let url = format!("{}/people/{id}/", self.base_url);
        self.get_json(&url).await.map_err(|e| {
            tracing::error!(id, error = %e, "Character fetch failed");
            RemoteFetchError::Character {
                id,
                source: Box::new(e),
            }
        })
    }

    pub async fn resolve_homeworld_name(
        &self,
        reference: &str,
    ) -> Result<Option<String>, RemoteFetchError> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Ok(None);
        }
        let url = parse_reference(reference)?;

        match self.get_json::<Planet>(url.as_str()).await {
            Ok(planet) => Ok(strip_unknown(planet.name)),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Homeworld lookup failed");
                Ok(None)
            }
        }
    }

    // ---- private helpers ----

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RemoteFetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| RemoteFetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteFetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| RemoteFetchError::Decode {
                url: url.to_string(),
                source,
            })
    }
}

/// Accept only absolute `http`/`https` URLs as resource references.
fn parse_reference(reference: &str) -> Result<Url, RemoteFetchError> {
    match Url::parse(reference) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url),
        _ => Err(RemoteFetchError::InvalidReference(reference.to_string())),
    }
}

#[async_trait]
impl CharacterSource for SwapiClient {
    async fn fetch_all_characters(&self) -> Result<Vec<RawRemoteCharacter>, RemoteFetchError> {
        SwapiClient::fetch_all_characters(self).await
    }

    async fn fetch_character_by_id(
        &self,
        id: i64,
    ) -> Result<RawRemoteCharacter, RemoteFetchError> {
        SwapiClient::fetch_character_by_id(self, id).await
    }

    async fn resolve_homeworld_name(
        &self,
        reference: &str,
    ) -> Result<Option<String>, RemoteFetchError> {
        SwapiClient::resolve_homeworld_name(self, reference).await
    }
}
