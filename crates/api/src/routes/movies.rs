//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET /               -> list_movies
/// GET /search         -> search_movies
/// GET /{id}           -> get_movie
/// GET /{id}/ratings   -> list_movie_ratings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies))
        .route("/search", get(movies::search_movies))
        .route("/{id}", get(movies::get_movie))
        .route("/{id}/ratings", get(movies::list_movie_ratings))
}
