//! Wire shapes of the remote source. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// A character exactly as the remote source returns it.
///
/// `homeworld` is a reference URL to a planet resource, not a name. Values
/// may be the literal `"unknown"`; normalization happens downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRemoteCharacter {
    pub name: String,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub mass: Option<String>,
    #[serde(default)]
    pub hair_color: Option<String>,
    #[serde(default)]
    pub skin_color: Option<String>,
    #[serde(default)]
    pub eye_color: Option<String>,
    #[serde(default)]
    pub birth_year: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub homeworld: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// One page of the `/people/` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PeoplePage {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<RawRemoteCharacter>,
}

/// The subset of a planet resource we read.
#[derive(Debug, Clone, Deserialize)]
pub struct Planet {
    #[serde(default)]
    pub name: Option<String>,
}
