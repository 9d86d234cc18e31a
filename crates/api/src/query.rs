//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Page-number pagination parameters (`?page=&size=`).
///
/// Both are 1-based and optional. Defaults and bounds are applied by
/// `cinema_core::pagination::resolve_page_params`.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// Free-text search parameter (`?q=`).
///
/// A missing or empty `q` matches everything.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}
