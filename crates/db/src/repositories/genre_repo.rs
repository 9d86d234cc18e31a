//! Repository for the genre table.

use cinema_core::types::DbId;

use crate::models::genre::Genre;
use crate::{next_id, Store};

/// Provides insert and lookup operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a genre, returning the created row.
    ///
    /// Genre names are unique; inserting an existing name returns the
    /// existing row unchanged.
    pub async fn create(store: &Store, name: &str) -> Genre {
        let mut genres = store.genres.write().await;
        if let Some(existing) = genres.iter().find(|g| g.name == name) {
            return existing.clone();
        }
        let genre = Genre {
            id: next_id(&genres, |g| g.id),
            name: name.to_string(),
        };
        genres.push(genre.clone());
        genre
    }

    /// Find a genre by id.
    pub async fn find_by_id(store: &Store, id: DbId) -> Option<Genre> {
        store.genres.read().await.iter().find(|g| g.id == id).cloned()
    }

    /// List all genres in insertion order.
    pub async fn list(store: &Store) -> Vec<Genre> {
        store.genres.read().await.clone()
    }

    /// Resolve a list of ids, skipping any that do not exist.
    pub(crate) async fn resolve(store: &Store, ids: &[DbId]) -> Vec<Genre> {
        let genres = store.genres.read().await;
        ids.iter()
            .filter_map(|id| genres.iter().find(|g| g.id == *id).cloned())
            .collect()
    }
}
