//! Case-insensitive substring search shared by movie and actor lookups.

/// Normalize a user-provided search term.
///
/// Returns `None` when the term is absent or empty, meaning "match
/// everything". The term is not trimmed: `" "` still filters for names that
/// contain a space.
pub fn normalize_query(query: Option<&str>) -> Option<String> {
    match query {
        Some(q) if !q.is_empty() => Some(q.to_lowercase()),
        _ => None,
    }
}

/// Check whether `haystack` contains the already-normalized `needle`,
/// ignoring case.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Apply a normalized query to a single field value.
pub fn matches(field: &str, query: Option<&str>) -> bool {
    query.map_or(true, |needle| contains_ignore_case(field, needle))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
