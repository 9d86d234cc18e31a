//! Repository for the session table.

use chrono::Utc;
use cinema_core::types::Timestamp;

use crate::models::session::{CreateSession, Session};
use crate::Store;

/// Provides create, lookup and revocation for login sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(store: &Store, input: CreateSession) -> Session {
        let session = Session {
            token_hash: input.token_hash,
            user_id: input.user_id,
            created_at: Utc::now(),
            expires_at: input.expires_at,
        };
        store
            .sessions
            .write()
            .await
            .insert(session.token_hash.clone(), session.clone());
        session
    }

    /// Find an unexpired session by its token hash.
    ///
    /// A session found expired at `now` is removed.
    pub async fn find_active(store: &Store, token_hash: &str, now: Timestamp) -> Option<Session> {
        let session = store.sessions.read().await.get(token_hash).cloned()?;
        if session.expires_at > now {
            return Some(session);
        }

        store.sessions.write().await.remove(token_hash);
        tracing::debug!(user_id = session.user_id, "Expired session purged");
        None
    }

    /// Revoke a single session. Returns `true` if it existed.
    pub async fn revoke(store: &Store, token_hash: &str) -> bool {
        store.sessions.write().await.remove(token_hash).is_some()
    }

    /// Delete sessions that expired at or before `now`. Returns the count.
    pub async fn cleanup_expired(store: &Store, now: Timestamp) -> usize {
        let mut sessions = store.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at > now);
        before - sessions.len()
    }
}
