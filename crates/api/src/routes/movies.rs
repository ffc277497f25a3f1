//! Route definitions for the film catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Catalog routes, merged into the `/api/v1` tree.
///
/// ```text
/// GET    /movies            -> list
/// GET    /movies/{id}       -> get_by_id
/// *      (any other verb)   -> 405
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/movies",
            get(movies::list).fallback(movies::method_not_allowed),
        )
        .route(
            "/movies/{id}",
            get(movies::get_by_id).fallback(movies::method_not_allowed),
        )
}
