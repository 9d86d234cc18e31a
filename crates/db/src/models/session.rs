//! Login session model and DTOs.

use cinema_core::types::{DbId, Timestamp};

/// An active login session.
///
/// Only the SHA-256 hash of the bearer token is kept.
#[derive(Debug, Clone)]
pub struct Session {
    pub token_hash: String,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub token_hash: String,
    pub user_id: DbId,
    pub expires_at: Timestamp,
}
