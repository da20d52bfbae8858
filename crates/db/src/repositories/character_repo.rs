//! Repository for the `characters` table.

use sqlx::PgPool;

use crate::models::character::{Character, NewCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, height, mass, hair_color, skin_color, eye_color, \
     birth_year, gender, homeworld, url, created_at, updated_at";

/// Newest first; `id` breaks ties between rows inserted in the same instant.
const ORDER: &str = "ORDER BY created_at DESC, id DESC";

/// Typed access to stored characters. `name` is the natural key and is
/// guarded by the `uq_characters_name` constraint.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a character unless one with the same name already exists.
    ///
    /// Returns the inserted row, or `None` when the name was taken. The
    /// check and the insert are a single statement, so concurrent callers
    /// cannot both insert the same name.
    pub async fn insert_if_absent(
        pool: &PgPool,
        input: &NewCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters
                (name, height, mass, hair_color, skin_color, eye_color,
                 birth_year, gender, homeworld, url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             ON CONFLICT (name) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(&input.height)
            .bind(&input.mass)
            .bind(&input.hair_color)
            .bind(&input.skin_color)
            .bind(&input.eye_color)
            .bind(&input.birth_year)
            .bind(&input.gender)
            .bind(&input.homeworld)
            .bind(&input.url)
            .fetch_optional(pool)
            .await
    }

    /// Find a character by its natural key.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE name = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// One page of characters, newest first. Offsets past the end yield
    /// an empty vector.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters {ORDER} LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Character>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Every stored character, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters {ORDER}");
        sqlx::query_as::<_, Character>(&query)
            .fetch_all(pool)
            .await
    }

    /// Total number of stored characters.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM characters")
            .fetch_one(pool)
            .await
    }
}
