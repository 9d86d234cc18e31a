//! Rating entity model and DTOs.

use cinema_core::rating::Score;
use cinema_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// A user's rating of a movie. Identity is `(user_id, movie_id)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rating {
    pub user_id: DbId,
    pub movie_id: DbId,
    pub rating: Score,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting or replacing a rating.
#[derive(Debug, Clone)]
pub struct UpsertRating {
    pub user_id: DbId,
    pub movie_id: DbId,
    pub rating: Score,
}

/// Request body for `PUT /ratings/{movie_id}`.
///
/// The raw value is checked by [`Score::new`] after the session is.
#[derive(Debug, Deserialize)]
pub struct RateMovie {
    pub rating: f64,
}
