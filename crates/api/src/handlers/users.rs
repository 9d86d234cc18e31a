//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::Json;
use cinema_core::types::DbId;
use cinema_db::models::user::UserProfile;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users/{id}
///
/// Public profile: username plus the user's reviews and ratings.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<UserProfile>>> {
    let profile = state.service.user_profile(id).await?;
    Ok(Json(DataResponse { data: profile }))
}
