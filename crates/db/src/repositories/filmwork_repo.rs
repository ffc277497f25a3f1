//! Repository for the `content.film_work` table and its associations.
//!
//! Besides plain row access this hosts the catalog view query: every film is
//! folded together with its genre names and its people grouped by role into
//! a single [`FilmView`] row.

use movies_core::film::PersonRole;
use movies_core::types::DbId;
use sqlx::PgPool;

use crate::models::filmwork::{CreateFilmwork, FilmView, Filmwork};
use crate::models::genre::GenreFilmwork;
use crate::models::person::PersonFilmwork;

/// Column list shared across row queries.
const COLUMNS: &str = "id, title, description, rating, type, creation_date, file_path, \
                       created_at, updated_at";

/// Total order applied to the catalog before slicing into pages.
const VIEW_ORDER: &str = "fw.title, fw.id";

/// Aggregate the distinct names of people holding `role` into a sorted array.
fn people_in_role(role: PersonRole) -> String {
    format!(
        "COALESCE(
            ARRAY_AGG(DISTINCT p.full_name ORDER BY p.full_name)
                FILTER (WHERE pfw.role = '{role}'),
            ARRAY[]::TEXT[]
         ) AS {field}",
        role = role.as_str(),
        field = role.view_field(),
    )
}

/// `SELECT ... FROM ... JOIN ...` part of the view query, ending before
/// `WHERE`/`GROUP BY`.
fn view_select() -> String {
    let people = PersonRole::ALL
        .into_iter()
        .map(people_in_role)
        .collect::<Vec<_>>()
        .join(",\n        ");

    format!(
        "SELECT fw.id, fw.title, fw.description, fw.creation_date, fw.rating, fw.type,
        COALESCE(
            ARRAY_AGG(DISTINCT g.name::TEXT ORDER BY g.name::TEXT)
                FILTER (WHERE g.id IS NOT NULL),
            ARRAY[]::TEXT[]
        ) AS genres,
        {people}
     FROM content.film_work fw
     LEFT JOIN content.genre_film_work gfw ON gfw.film_work_id = fw.id
     LEFT JOIN content.genre g ON g.id = gfw.genre_id
     LEFT JOIN content.person_film_work pfw ON pfw.film_work_id = fw.id
     LEFT JOIN content.person p ON p.id = pfw.person_id"
    )
}

/// Provides access to film works.
pub struct FilmworkRepo;

impl FilmworkRepo {
    // -- Rows ----------------------------------------------------------------

    /// Insert a new film work, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFilmwork) -> Result<Filmwork, sqlx::Error> {
        let query = format!(
            "INSERT INTO content.film_work
                (title, description, rating, type, creation_date, file_path)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Filmwork>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.rating)
            .bind(input.film_type.as_str())
            .bind(input.creation_date)
            .bind(&input.file_path)
            .fetch_one(pool)
            .await
    }

    /// Find a film work row by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Filmwork>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM content.film_work WHERE id = $1");
        sqlx::query_as::<_, Filmwork>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Number of film works in the catalog.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM content.film_work")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    // -- Associations --------------------------------------------------------

    /// Attach a genre to a film. Fails on the `film_work_genre_idx` unique
    /// index if the pair already exists.
    pub async fn add_genre(
        pool: &PgPool,
        film_work_id: DbId,
        genre_id: DbId,
    ) -> Result<GenreFilmwork, sqlx::Error> {
        sqlx::query_as::<_, GenreFilmwork>(
            "INSERT INTO content.genre_film_work (film_work_id, genre_id)
             VALUES ($1, $2)
             RETURNING id, film_work_id, genre_id, created",
        )
        .bind(film_work_id)
        .bind(genre_id)
        .fetch_one(pool)
        .await
    }

    /// Attach a person to a film in the given role.
    pub async fn add_person(
        pool: &PgPool,
        film_work_id: DbId,
        person_id: DbId,
        role: PersonRole,
    ) -> Result<PersonFilmwork, sqlx::Error> {
        sqlx::query_as::<_, PersonFilmwork>(
            "INSERT INTO content.person_film_work (film_work_id, person_id, role)
             VALUES ($1, $2, $3)
             RETURNING id, film_work_id, person_id, role, created",
        )
        .bind(film_work_id)
        .bind(person_id)
        .bind(role.as_str())
        .fetch_one(pool)
        .await
    }

    // -- Catalog view --------------------------------------------------------

    /// One slice of the catalog view in `title, id` order.
    pub async fn list_views(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FilmView>, sqlx::Error> {
        let query = format!(
            "{select}
             GROUP BY fw.id
             ORDER BY {VIEW_ORDER}
             LIMIT $1 OFFSET $2",
            select = view_select(),
        );
        tracing::debug!(limit, offset, "Fetching film views");
        sqlx::query_as::<_, FilmView>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// The catalog view of a single film. Returns `None` for an unknown id.
    pub async fn find_view_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FilmView>, sqlx::Error> {
        let query = format!(
            "{select}
             WHERE fw.id = $1
             GROUP BY fw.id",
            select = view_select(),
        );
        sqlx::query_as::<_, FilmView>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
