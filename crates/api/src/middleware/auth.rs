//! Session-resolving extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use cinema_core::error::CoreError;
use cinema_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from an `Authorization: Bearer <token>`
/// header.
///
/// Place it before `Path` and `Json` in a handler's arguments. Axum runs
/// extractors in order, so a request without a live session is rejected
/// with 401 before its path or body is looked at:
///
/// ```ignore
/// async fn rate(
///     State(state): State<AppState>,
///     user: AuthUser,
///     Path(movie_id): Path<DbId>,
/// ) -> AppResult<StatusCode> {
///     state.service.rate_as(user.user_id, movie_id, 8.0).await?;
///     Ok(StatusCode::NO_CONTENT)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Owner of the session behind the token.
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let user_id = state.service.authenticate(token).await?;
        Ok(AuthUser { user_id })
    }
}

/// Read the bearer token out of request headers.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, CoreError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| CoreError::Unauthorized("Missing Authorization header".into()))?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        CoreError::Unauthorized("Invalid Authorization format. Expected: Bearer <token>".into())
    })?;

    if token.trim().is_empty() {
        return Err(CoreError::Unauthorized("Missing session token".into()));
    }
    Ok(token.trim())
}
