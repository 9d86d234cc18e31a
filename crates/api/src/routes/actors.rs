//! Route definitions for the `/actors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::actors;
use crate::state::AppState;

/// Routes mounted at `/actors`.
///
/// ```text
/// GET /search        -> search_actors
/// GET /{id}          -> get_actor
/// GET /{id}/movies   -> list_actor_movies
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(actors::search_actors))
        .route("/{id}", get(actors::get_actor))
        .route("/{id}/movies", get(actors::list_actor_movies))
}
