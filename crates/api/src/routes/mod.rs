pub mod actors;
pub mod auth;
pub mod health;
pub mod movies;
pub mod ratings;
pub mod reviews;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                  register (public)
/// /auth/login                     login (public)
/// /auth/logout                    logout (bearer token, optional)
///
/// /movies                         paged list (?page=&size=)
/// /movies/search                  title search (?q=)
/// /movies/{id}                    get
/// /movies/{id}/ratings            list ratings
///
/// /genres                         list
///
/// /actors/search                  name search (?q=)
/// /actors/{id}                    get
/// /actors/{id}/movies             filmography
///
/// /reviews/{movie_id}             list, put, delete (put/delete need auth)
///
/// /ratings/{movie_id}             put, delete (auth required)
///
/// /users/{id}                     profile with reviews and ratings
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Accounts and sessions.
        .nest("/auth", auth::router())
        // Catalog reads.
        .nest("/movies", movies::router())
        .route("/genres", get(handlers::movies::list_genres))
        .nest("/actors", actors::router())
        // Session-checked mutations.
        .nest("/reviews", reviews::router())
        .nest("/ratings", ratings::router())
        // Profiles.
        .nest("/users", users::router())
}
