//! Review entity model and DTOs.

use cinema_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// A user's review of a movie. Identity is `(user_id, movie_id)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub user_id: DbId,
    pub movie_id: DbId,
    /// Whether the reviewer recommends the movie.
    pub liked: bool,
    pub title: String,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Review fields supplied by the author. Also the `PUT /reviews/{movie_id}`
/// request body.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewInput {
    pub liked: bool,
    pub title: String,
    pub text: String,
}

/// DTO for inserting or replacing a review.
#[derive(Debug, Clone)]
pub struct UpsertReview {
    pub user_id: DbId,
    pub movie_id: DbId,
    pub input: ReviewInput,
}
