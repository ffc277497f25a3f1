//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Page-number pagination parameters (`?page=`).
///
/// `page` is kept as raw text so that `last` and malformed values reach
/// `movies_core::pagination::resolve_page_number` instead of being rejected
/// by the extractor with a generic 400.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}
