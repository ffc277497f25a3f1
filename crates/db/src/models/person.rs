//! Person entity and its role-tagged film association.

use movies_core::error::CoreError;
use movies_core::film::PersonRole;
use movies_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `content.person` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub full_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new person.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePerson {
    pub full_name: String,
}

/// A row from the `content.person_film_work` junction table.
///
/// `role` is one of the `movies_core::film::ROLE_*` values; see
/// [`PersonFilmwork::role`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PersonFilmwork {
    pub id: DbId,
    pub film_work_id: DbId,
    pub person_id: DbId,
    pub role: String,
    pub created: Timestamp,
}

impl PersonFilmwork {
    /// Typed view of the stored `role` column.
    pub fn role(&self) -> Result<PersonRole, CoreError> {
        PersonRole::from_str(&self.role)
    }
}
