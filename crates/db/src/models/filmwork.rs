//! Film work entity, its create DTO and the aggregated read view.

use chrono::NaiveDate;
use movies_core::error::CoreError;
use movies_core::film::FilmworkType;
use movies_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `content.film_work` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Filmwork {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub rating: Option<f64>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub film_type: String,
    pub creation_date: NaiveDate,
    pub file_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Filmwork {
    /// Typed view of the stored `type` column.
    pub fn kind(&self) -> Result<FilmworkType, CoreError> {
        FilmworkType::from_str(&self.film_type)
    }
}

/// DTO for creating a new film work.
///
/// Title length and the `0..=100` rating range are enforced by the table's
/// constraints; a violation surfaces as a `sqlx::Error::Database`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFilmwork {
    pub title: String,
    pub description: Option<String>,
    pub rating: Option<f64>,
    #[serde(rename = "type", default)]
    pub film_type: FilmworkType,
    pub creation_date: NaiveDate,
    pub file_path: Option<String>,
}

/// Flattened read projection served by the catalog API.
///
/// The four name lists are aggregated at query time, deduplicated and
/// sorted alphabetically. A film with nothing in a list gets `[]`.
/// Field order here is the JSON field order.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct FilmView {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub creation_date: NaiveDate,
    pub rating: Option<f64>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub film_type: String,
    pub genres: Vec<String>,
    pub actors: Vec<String>,
    pub directors: Vec<String>,
    pub writers: Vec<String>,
}
