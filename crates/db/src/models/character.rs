//! Character entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use starchart_core::export::render_row;
use starchart_core::statistics::StatSample;
use starchart_core::types::{DbId, Timestamp};

/// A character row from the `characters` table.
///
/// Attribute columns are free-form strings and independently nullable.
/// `homeworld` holds the resolved planet name, never a reference URL.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub homeworld: Option<String>,
    pub url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Character {
    /// The attributes page statistics are computed from.
    pub fn stat_sample(&self) -> StatSample<'_> {
        StatSample {
            gender: self.gender.as_deref(),
            homeworld: self.homeworld.as_deref(),
            height: self.height.as_deref(),
        }
    }

    /// One export line in [`starchart_core::export::CSV_HEADERS`] column order.
    pub fn csv_row(&self) -> String {
        let id = self.id.to_string();
        let created_at = self.created_at.to_rfc3339();
        render_row(&[
            Some(id.as_str()),
            Some(self.name.as_str()),
            self.height.as_deref(),
            self.mass.as_deref(),
            self.hair_color.as_deref(),
            self.skin_color.as_deref(),
            self.eye_color.as_deref(),
            self.birth_year.as_deref(),
            self.gender.as_deref(),
            self.homeworld.as_deref(),
            Some(created_at.as_str()),
        ])
    }
}

/// DTO for inserting a new character. Identity and timestamps are
/// assigned by the database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub homeworld: Option<String>,
    pub url: Option<String>,
}
