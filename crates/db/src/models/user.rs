//! User entity model and DTOs.

use cinema_core::types::{DbId, Timestamp};
use serde::Serialize;

use super::rating::Rating;
use super::review::Review;

/// Full user row.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] or [`UserProfile`] for external-facing output.
#[derive(Debug, Clone)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub created_at: Timestamp,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            created_at: user.created_at,
        }
    }
}

/// A user together with their own reviews and ratings.
///
/// The review and rating lists are views over the review and rating
/// tables, not separately stored state.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub username: String,
    pub reviews: Vec<Review>,
    pub ratings: Vec<Rating>,
}

/// DTO for creating a new user.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
}
