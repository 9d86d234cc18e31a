//! Handlers for the `/ratings` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinema_core::types::DbId;
use cinema_db::models::rating::RateMovie;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// PUT /api/v1/ratings/{movie_id}
///
/// Rate a movie on the 0-10 scale, replacing any earlier rating.
/// Returns 204 No Content.
pub async fn put_rating(
    State(state): State<AppState>,
    user: AuthUser,
    Path(movie_id): Path<DbId>,
    Json(input): Json<RateMovie>,
) -> AppResult<StatusCode> {
    state.service.rate_as(user.user_id, movie_id, input.rating).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/ratings/{movie_id}
///
/// Withdraw the caller's rating. Returns 204 No Content whether or not one
/// existed.
pub async fn delete_rating(
    State(state): State<AppState>,
    user: AuthUser,
    Path(movie_id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.service.unrate_as(user.user_id, movie_id).await;
    Ok(StatusCode::NO_CONTENT)
}
