//! In-memory entity store for the cinema catalog.
//!
//! [`Store`] owns every table. It is built once at startup, wrapped in an
//! `Arc` ([`DbPool`]) and handed to whichever layer needs it; tests build a
//! fresh one each. Nothing is persisted.
//!
//! Each table sits behind its own [`RwLock`]. Repositories that touch more
//! than one table acquire locks in this order:
//!
//! ```text
//! users -> sessions
//! ratings -> movies
//! reviews -> movies
//! movies -> genres -> actors
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::actor::Actor;
use crate::models::genre::Genre;
use crate::models::movie::MovieRow;
use crate::models::rating::Rating;
use crate::models::review::Review;
use crate::models::session::Session;
use crate::models::user::User;

pub mod models;
pub mod repositories;
pub mod seed;

/// Shared handle to the store.
pub type DbPool = Arc<Store>;

/// Canonical collections of all entity types, in insertion order.
#[derive(Default)]
pub struct Store {
    pub(crate) genres: RwLock<Vec<Genre>>,
    pub(crate) actors: RwLock<Vec<Actor>>,
    pub(crate) movies: RwLock<Vec<MovieRow>>,
    pub(crate) users: RwLock<Vec<User>>,
    pub(crate) reviews: RwLock<Vec<Review>>,
    pub(crate) ratings: RwLock<Vec<Rating>>,
    /// Keyed by the SHA-256 hex digest of the bearer token.
    pub(crate) sessions: RwLock<HashMap<String, Session>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Row counts, reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StoreStats {
    pub movies: usize,
    pub actors: usize,
    pub users: usize,
    pub reviews: usize,
    pub ratings: usize,
    pub sessions: usize,
}

/// Create a store, optionally filled with the demo catalog.
pub async fn create_pool(seed_catalog: bool) -> DbPool {
    let store = Arc::new(Store::new());
    if seed_catalog {
        seed::seed_catalog(&store).await;
    }
    store
}

/// Snapshot of table sizes.
pub async fn stats(store: &Store) -> StoreStats {
    StoreStats {
        movies: store.movies.read().await.len(),
        actors: store.actors.read().await.len(),
        users: store.users.read().await.len(),
        reviews: store.reviews.read().await.len(),
        ratings: store.ratings.read().await.len(),
        sessions: store.sessions.read().await.len(),
    }
}

/// Next sequential id for a table whose rows carry ascending ids.
pub(crate) fn next_id<T>(rows: &[T], id_of: impl Fn(&T) -> i64) -> i64 {
    rows.iter().map(id_of).max().unwrap_or(0) + 1
}
