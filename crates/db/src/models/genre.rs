//! Genre entity and its film association.

use movies_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `content.genre` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new genre.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGenre {
    pub name: String,
    pub description: Option<String>,
}

/// A row from the `content.genre_film_work` junction table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GenreFilmwork {
    pub id: DbId,
    pub film_work_id: DbId,
    pub genre_id: DbId,
    pub created: Timestamp,
}
