//! Route definitions for the `/reviews` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
///
/// ```text
/// GET    /{movie_id}  -> list_reviews
/// PUT    /{movie_id}  -> put_review (requires auth)
/// DELETE /{movie_id}  -> delete_review (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{movie_id}",
        get(reviews::list_reviews)
            .put(reviews::put_review)
            .delete(reviews::delete_review),
    )
}
