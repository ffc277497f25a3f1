//! Handlers for the read-only `/movies` catalog.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use movies_core::error::CoreError;
use movies_core::pagination::{page_offset, resolve_page_number, Page, FILM_PAGE_SIZE};
use movies_core::types::DbId;
use movies_db::models::filmwork::FilmView;
use movies_db::repositories::FilmworkRepo;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::FilmListResponse;
use crate::state::AppState;

/// GET /api/v1/movies?page=
///
/// One page of the catalog, [`FILM_PAGE_SIZE`] films per page. `page`
/// defaults to 1 and also accepts `last`. A query string that does not
/// decode answers with the JSON error body like every other failure.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<Json<FilmListResponse>> {
    let Query(params) = params?;
    let total_count = FilmworkRepo::count(&state.pool).await?;
    let index = resolve_page_number(params.page.as_deref(), total_count, FILM_PAGE_SIZE)?;
    tracing::debug!(page = index, total_count, "Resolved catalog page");

    let items = FilmworkRepo::list_views(
        &state.pool,
        FILM_PAGE_SIZE,
        page_offset(index, FILM_PAGE_SIZE),
    )
    .await?;

    let page = Page {
        items,
        index,
        page_size: FILM_PAGE_SIZE,
        total_count,
    };
    Ok(Json(page.into()))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<FilmView>> {
    let id: DbId = raw_id
        .parse()
        .map_err(|_| AppError::NotFound(format!("'{raw_id}' is not a valid film id")))?;

    let film = FilmworkRepo::find_view_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Filmwork",
            id,
        }))?;
    Ok(Json(film))
}

/// Fallback for any non-GET method on a catalog path.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
