//! Client for the remote character source (a SWAPI-compatible REST API).
//!
//! [`SwapiClient`] speaks HTTP via [`reqwest`]; [`CharacterSource`] is the
//! seam the ingestion pipeline depends on. The `testing` feature exposes
//! `InMemorySource` for other crates' tests.

pub mod client;
pub mod error;
#[cfg(feature = "testing")]
pub mod memory;
pub mod models;
pub mod source;

pub use client::{SwapiClient, SwapiConfig, MAX_CHARACTERS};
pub use error::RemoteFetchError;
#[cfg(feature = "testing")]
pub use memory::InMemorySource;
pub use models::RawRemoteCharacter;
pub use source::CharacterSource;
