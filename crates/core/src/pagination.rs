//! Page-number pagination helpers.
//!
//! Pages are 1-indexed. A page past the end of the collection is an empty
//! page, never an error.

use std::ops::Range;

use crate::error::CoreError;

/// Page returned when the caller does not ask for one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Upper bound on the page size a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Index range `[(page-1)*size, page*size)` clipped to a collection of
/// `len` items.
///
/// Page `0`, size `0` and pages past the end all yield an empty range.
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
        .unwrap_or(len)
        .min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Resolve optional user-provided page parameters.
///
/// Missing values fall back to [`DEFAULT_PAGE`] / [`DEFAULT_PAGE_SIZE`].
/// Non-positive values are rejected; sizes above [`MAX_PAGE_SIZE`] are
/// clamped.
pub fn resolve_page_params(
    page: Option<i64>,
    size: Option<i64>,
) -> Result<(usize, usize), CoreError> {
    let page = page.unwrap_or(DEFAULT_PAGE);
    let size = size.unwrap_or(DEFAULT_PAGE_SIZE);

    if page < 1 || size < 1 {
        return Err(CoreError::Validation(
            "page and size must be positive integers".to_string(),
        ));
    }

    let page = usize::try_from(page)
        .map_err(|_| CoreError::Validation(format!("page {page} is out of range")))?;
    let size = size.min(MAX_PAGE_SIZE) as usize;
    Ok((page, size))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- page_range ----------------------------------------------------------

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(page_range(1, 20, 50), 0..20);
    }

    #[test]
    fn last_page_is_truncated() {
        assert_eq!(page_range(3, 20, 50), 40..50);
    }

    #[test]
    fn page_past_end_is_empty() {
        assert!(page_range(4, 20, 50).is_empty());
        assert!(page_range(2, 5, 2).is_empty());
    }

    #[test]
    fn page_zero_is_empty() {
        assert!(page_range(0, 20, 50).is_empty());
    }

    #[test]
    fn huge_page_does_not_overflow() {
        assert!(page_range(usize::MAX, usize::MAX, 3).is_empty());
    }

    // -- resolve_page_params -------------------------------------------------

    #[test]
    fn defaults_apply_when_absent() {
        assert_eq!(
            resolve_page_params(None, None).unwrap(),
            (DEFAULT_PAGE as usize, DEFAULT_PAGE_SIZE as usize)
        );
    }

    #[test]
    fn non_positive_values_are_rejected() {
        assert_matches!(resolve_page_params(Some(0), None), Err(CoreError::Validation(_)));
        assert_matches!(resolve_page_params(None, Some(-3)), Err(CoreError::Validation(_)));
    }

    #[test]
    fn size_is_clamped_to_max() {
        assert_eq!(
            resolve_page_params(Some(2), Some(1_000)).unwrap(),
            (2, MAX_PAGE_SIZE as usize)
        );
    }
}
