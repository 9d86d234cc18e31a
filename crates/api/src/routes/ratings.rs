//! Route definitions for the `/ratings` resource.

use axum::routing::put;
use axum::Router;

use crate::handlers::ratings;
use crate::state::AppState;

/// Routes mounted at `/ratings`. Both require auth.
///
/// ```text
/// PUT    /{movie_id}  -> put_rating
/// DELETE /{movie_id}  -> delete_rating
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{movie_id}",
        put(ratings::put_rating).delete(ratings::delete_rating),
    )
}
