//! `GET /health`: whether the catalog can actually be served.
//!
//! Counting `content.film_work` proves both that the database answers and
//! that the migrations have created the schema. Only when that count fails
//! is a bare `SELECT 1` used to tell "schema missing" from "database down".

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use movies_db::repositories::FilmworkRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the catalog is readable, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// Whether the database answers at all.
    pub db_healthy: bool,
    /// Films in the catalog, `null` when `content.film_work` is unreadable.
    pub films: Option<i64>,
}

async fn catalog_health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let films = match FilmworkRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(err) => {
            tracing::warn!(error = %err, "Catalog table is not readable");
            None
        }
    };
    let db_healthy = match films {
        Some(_) => true,
        None => movies_db::health_check(&state.pool).await.is_ok(),
    };

    let (status, code) = match films {
        Some(_) => ("ok", StatusCode::OK),
        None => ("degraded", StatusCode::SERVICE_UNAVAILABLE),
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            films,
        }),
    )
}

/// Root-level health route; not nested under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(catalog_health))
}
