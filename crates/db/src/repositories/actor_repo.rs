//! Repository for the actor table.

use cinema_core::search;
use cinema_core::types::DbId;

use crate::models::actor::{Actor, CreateActor};
use crate::{next_id, Store};

/// Provides insert, lookup and search operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert an actor, returning the created row.
    pub async fn create(store: &Store, input: &CreateActor) -> Actor {
        let mut actors = store.actors.write().await;
        let actor = Actor {
            id: next_id(&actors, |a| a.id),
            tmdb_id: input.tmdb_id,
            name: input.name.clone(),
            gender: input.gender,
            profile_path: input.profile_path.clone(),
        };
        actors.push(actor.clone());
        actor
    }

    /// Find an actor by id.
    pub async fn find_by_id(store: &Store, id: DbId) -> Option<Actor> {
        store.actors.read().await.iter().find(|a| a.id == id).cloned()
    }

    /// Case-insensitive substring search on `name`.
    ///
    /// An absent or empty query returns every actor in insertion order.
    pub async fn search(store: &Store, query: Option<&str>) -> Vec<Actor> {
        let needle = search::normalize_query(query);
        store
            .actors
            .read()
            .await
            .iter()
            .filter(|a| search::matches(&a.name, needle.as_deref()))
            .cloned()
            .collect()
    }

    /// Whether an actor with the given id exists.
    pub async fn exists(store: &Store, id: DbId) -> bool {
        store.actors.read().await.iter().any(|a| a.id == id)
    }

    /// Resolve a list of ids, keeping the order of `ids` and skipping any
    /// that do not exist.
    pub(crate) async fn resolve(store: &Store, ids: &[DbId]) -> Vec<Option<Actor>> {
        let actors = store.actors.read().await;
        ids.iter()
            .map(|id| actors.iter().find(|a| a.id == *id).cloned())
            .collect()
    }
}
