//! Pagination
//!
//! Fixed-size, 1-indexed pagination over an ordered result list. An empty
//! result for an in-principle-valid page is the caller's signal to treat
//! the request as not-found.

/// Fixed page size for every paginated listing
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice out page `page` (1-based) of `items`
///
/// Returns `[(page-1)*10 .. page*10)`, clipped to the sequence. Pages past
/// the end yield an empty slice. `page < 1` also yields an empty slice;
/// callers never produce it (see [`parse_page`]), so that case is
/// implementation-defined input, not part of the contract.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    if page < 1 {
        return &[];
    }

    let start = (page as usize - 1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }

    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

/// Parse a `page` query parameter, defaulting to 1
///
/// Absent or non-numeric values fall back to the first page rather than
/// rejecting the request.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|p| p.trim().parse().ok()).unwrap_or(1)
}
