//! Page-number pagination helpers for the browsable list endpoints.
//!
//! List pages are paginated at a fixed 15 items per page with the page
//! number embedded in the URL path. Irregular page values degrade
//! gracefully instead of erroring: a non-numeric value falls back to the
//! first page and an out-of-range value clamps to the last page.

/// Items per page on every browsable list endpoint.
pub const PAGE_SIZE: i64 = 15;

/// Resolve a raw page path segment against the total number of pages.
///
/// `total_pages` is treated as at least 1 so an empty result set still
/// resolves to page 1.
pub fn resolve_page(raw: &str, total_pages: i64) -> i64 {
    let total_pages = total_pages.max(1);
    match raw.parse::<i64>() {
        Ok(page) if page < 1 => 1,
        Ok(page) if page > total_pages => total_pages,
        Ok(page) => page,
        Err(_) => 1,
    }
}

/// Number of pages needed for `total_items` items, never less than 1.
pub fn total_pages(total_items: i64) -> i64 {
    if total_items <= 0 {
        1
    } else {
        (total_items + PAGE_SIZE - 1) / PAGE_SIZE
    }
}

/// Row offset for a resolved (1-based) page number.
pub fn page_offset(page: i64) -> i64 {
    (page - 1) * PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_numeric_page_falls_back_to_first() {
        assert_eq!(resolve_page("abc", 4), 1);
        assert_eq!(resolve_page("", 4), 1);
        assert_eq!(resolve_page("1.5", 4), 1);
    }

    #[test]
    fn test_out_of_range_page_clamps_to_last() {
        assert_eq!(resolve_page("9999", 1), 1);
        assert_eq!(resolve_page("9999", 7), 7);
    }

    #[test]
    fn test_in_range_page_passes_through() {
        assert_eq!(resolve_page("3", 4), 3);
        assert_eq!(resolve_page("1", 1), 1);
    }

    #[test]
    fn test_zero_or_negative_page_clamps_to_first() {
        assert_eq!(resolve_page("0", 4), 1);
        assert_eq!(resolve_page("-2", 4), 1);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(15), 1);
        assert_eq!(total_pages(16), 2);
        assert_eq!(total_pages(45), 3);
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1), 0);
        assert_eq!(page_offset(2), 15);
        assert_eq!(page_offset(4), 45);
    }
}
