pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                                          list (?page=N|last)
/// /movies/{id}                                     get
/// ```
///
/// Every catalog route is read-only; other methods answer 405.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(movies::router())
}
