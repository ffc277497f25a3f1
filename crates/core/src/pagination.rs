//! Page-number pagination over an ordered result set.
//!
//! [`Page`] carries the slice together with the numbers needed to derive the
//! rest of the page metadata, so handlers never hold a paginator object.
//! Page numbers are 1-based.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of films served per list page.
pub const FILM_PAGE_SIZE: i64 = 50;

/// Query value that selects the final page regardless of its number.
pub const LAST_PAGE_KEYWORD: &str = "last";

// ---------------------------------------------------------------------------
// Page math
// ---------------------------------------------------------------------------

/// Number of pages needed to hold `total_count` records.
///
/// An empty result set has zero pages; page 1 is nevertheless servable (see
/// [`resolve_page_number`]).
pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    debug_assert!(page_size > 0, "page_size must be positive");
    if total_count <= 0 {
        return 0;
    }
    (total_count + page_size - 1) / page_size
}

/// Row offset of the first record on page `index`.
pub fn page_offset(index: i64, page_size: i64) -> i64 {
    (index - 1).max(0) * page_size
}

/// Turn the raw `page` query value into a validated 1-based page number.
///
/// - `None` or an empty value selects page 1.
/// - `"last"` selects the final page.
/// - Anything that is not an integer, is below 1, or is beyond the final page
///   is rejected with [`CoreError::InvalidPage`]. Page 1 always exists, even
///   for an empty result set.
pub fn resolve_page_number(
    raw: Option<&str>,
    total_count: i64,
    page_size: i64,
) -> Result<i64, CoreError> {
    let last = total_pages(total_count, page_size).max(1);

    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(1);
    };

    if raw == LAST_PAGE_KEYWORD {
        return Ok(last);
    }

    let number: i64 = raw.parse().map_err(|_| {
        CoreError::InvalidPage(format!("page '{raw}' is not an integer"))
    })?;

    if number < 1 {
        return Err(CoreError::InvalidPage(format!(
            "page {number} is less than 1"
        )));
    }
    if number > last {
        return Err(CoreError::InvalidPage(format!(
            "page {number} contains no results (last page is {last})"
        )));
    }
    Ok(number)
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// One page of an ordered result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Records on this page, in result-set order.
    pub items: Vec<T>,
    /// 1-based page number.
    pub index: i64,
    pub page_size: i64,
    /// Records across all pages.
    pub total_count: i64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> i64 {
        total_pages(self.total_count, self.page_size)
    }

    pub fn has_prev(&self) -> bool {
        self.index > 1
    }

    pub fn has_next(&self) -> bool {
        self.index < self.total_pages()
    }

    pub fn prev_number(&self) -> Option<i64> {
        self.has_prev().then(|| self.index - 1)
    }

    pub fn next_number(&self) -> Option<i64> {
        self.has_next().then(|| self.index + 1)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
