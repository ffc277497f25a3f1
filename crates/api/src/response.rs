//! Response envelope types for the catalog endpoints.
//!
//! The detail endpoint returns a bare [`FilmView`]; the list endpoint wraps
//! a page of them in [`FilmListResponse`].

use movies_core::pagination::Page;
use movies_db::models::filmwork::FilmView;
use serde::Serialize;

/// `{ count, total_pages, prev, next, results }` list envelope.
///
/// `prev` and `next` are page numbers, `null` at either end.
#[derive(Debug, Serialize)]
pub struct FilmListResponse {
    pub count: i64,
    pub total_pages: i64,
    pub prev: Option<i64>,
    pub next: Option<i64>,
    pub results: Vec<FilmView>,
}

impl From<Page<FilmView>> for FilmListResponse {
    fn from(page: Page<FilmView>) -> Self {
        Self {
            count: page.total_count,
            total_pages: page.total_pages(),
            prev: page.prev_number(),
            next: page.next_number(),
            results: page.items,
        }
    }
}
