//! Handlers for the `/auth` resource (register, login, logout).

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use cinema_db::models::user::UserResponse;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::bearer_token;
use crate::response::DataResponse;
use crate::service::LoginResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register` and `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account. Returns 201 with the new user (no password hash).
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    let user = state
        .service
        .register(&input.username, &input.password)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(&user),
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<Json<LoginResponse>> {
    let response = state
        .service
        .login(&input.username, &input.password)
        .await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revoke the presented session. Always returns 204 No Content, even
/// without a token.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    if let Ok(token) = bearer_token(&headers) {
        state.service.logout(token).await;
    }
    StatusCode::NO_CONTENT
}
