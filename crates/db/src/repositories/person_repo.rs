//! Repository for the `content.person` table.

use movies_core::types::DbId;
use sqlx::PgPool;

use crate::models::person::{CreatePerson, Person};

const COLUMNS: &str = "id, full_name, created_at, updated_at";

/// Provides access to people.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO content.person (full_name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.full_name)
            .fetch_one(pool)
            .await
    }

    /// Find a person by their ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM content.person WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Rename a person. Returns `None` if no row with the given `id` exists.
    pub async fn rename(
        pool: &PgPool,
        id: DbId,
        full_name: &str,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE content.person SET full_name = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(full_name)
            .fetch_optional(pool)
            .await
    }
}
