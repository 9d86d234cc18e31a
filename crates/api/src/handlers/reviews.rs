//! Handlers for the `/reviews` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinema_core::types::DbId;
use cinema_db::models::review::{Review, ReviewInput};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/reviews/{movie_id}
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Review>>>> {
    let reviews = state.service.movie_reviews(movie_id).await?;
    Ok(Json(DataResponse { data: reviews }))
}

/// PUT /api/v1/reviews/{movie_id}
///
/// Write or replace the caller's review. Returns 204 No Content.
pub async fn put_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(movie_id): Path<DbId>,
    Json(input): Json<ReviewInput>,
) -> AppResult<StatusCode> {
    state.service.review_as(user.user_id, movie_id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/reviews/{movie_id}
///
/// Delete the caller's review. Returns 204 No Content whether or not one
/// existed.
pub async fn delete_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(movie_id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.service.delete_review_as(user.user_id, movie_id).await;
    Ok(StatusCode::NO_CONTENT)
}
