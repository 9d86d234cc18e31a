//! Repository for the movie table.
//!
//! Rows are stored normalized and hydrated with their genres and cast on
//! the way out. Vote aggregates are read-only here; see
//! [`RatingRepo`](super::RatingRepo) for the write path.

use cinema_core::pagination::page_range;
use cinema_core::rating::VoteAggregate;
use cinema_core::search;
use cinema_core::types::DbId;

use crate::models::movie::{stream_link, CreateMovie, Movie, MovieActor, MovieRow};
use crate::repositories::{ActorRepo, GenreRepo};
use crate::{next_id, Store};

/// Provides insert, lookup, search and pagination for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a movie with an empty vote aggregate, returning its id.
    pub async fn create(store: &Store, input: &CreateMovie) -> DbId {
        let mut movies = store.movies.write().await;
        let id = next_id(&movies, |m| m.id);
        movies.push(MovieRow {
            id,
            tmdb_id: input.tmdb_id,
            title: input.title.clone(),
            overview: input.overview.clone(),
            release_date: input.release_date,
            poster_path: input.poster_path.clone(),
            tmdb_vote_average: input.tmdb_vote_average,
            tmdb_vote_count: input.tmdb_vote_count,
            adult: input.adult,
            revenue: input.revenue,
            genre_ids: input.genre_ids.clone(),
            cast: input.cast.clone(),
            votes: VoteAggregate::default(),
        });
        id
    }

    /// Find a movie by id.
    pub async fn find_by_id(store: &Store, id: DbId) -> Option<Movie> {
        let row = store
            .movies
            .read()
            .await
            .iter()
            .find(|m| m.id == id)
            .cloned()?;
        Some(Self::hydrate(store, row).await)
    }

    /// Whether a movie with the given id exists.
    pub async fn exists(store: &Store, id: DbId) -> bool {
        store.movies.read().await.iter().any(|m| m.id == id)
    }

    /// Current vote aggregate for a movie.
    pub async fn votes(store: &Store, id: DbId) -> Option<VoteAggregate> {
        store
            .movies
            .read()
            .await
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.votes)
    }

    /// Case-insensitive substring search on `title`.
    ///
    /// An absent or empty query returns every movie in insertion order.
    pub async fn search(store: &Store, query: Option<&str>) -> Vec<Movie> {
        let needle = search::normalize_query(query);
        let rows: Vec<MovieRow> = store
            .movies
            .read()
            .await
            .iter()
            .filter(|m| search::matches(&m.title, needle.as_deref()))
            .cloned()
            .collect();
        Self::hydrate_all(store, rows).await
    }

    /// One page of movies in insertion order.
    ///
    /// Pages are 1-indexed; a page past the end is empty.
    pub async fn list_page(store: &Store, page: usize, page_size: usize) -> Vec<Movie> {
        let rows: Vec<MovieRow> = {
            let movies = store.movies.read().await;
            movies[page_range(page, page_size, movies.len())].to_vec()
        };
        Self::hydrate_all(store, rows).await
    }

    /// All movies the given actor appears in, in insertion order.
    pub async fn list_for_actor(store: &Store, actor_id: DbId) -> Vec<Movie> {
        let rows: Vec<MovieRow> = store
            .movies
            .read()
            .await
            .iter()
            .filter(|m| m.cast.iter().any(|c| c.actor_id == actor_id))
            .cloned()
            .collect();
        Self::hydrate_all(store, rows).await
    }

    /// Total number of movies.
    pub async fn count(store: &Store) -> usize {
        store.movies.read().await.len()
    }

    /// Publish a freshly computed aggregate.
    ///
    /// Callers must hold the ratings lock so that aggregates are published
    /// in the same order the rating set changed.
    pub(crate) async fn set_votes(store: &Store, id: DbId, votes: VoteAggregate) -> bool {
        let mut movies = store.movies.write().await;
        match movies.iter_mut().find(|m| m.id == id) {
            Some(movie) => {
                movie.votes = votes;
                true
            }
            None => false,
        }
    }

    async fn hydrate_all(store: &Store, rows: Vec<MovieRow>) -> Vec<Movie> {
        let mut movies = Vec::with_capacity(rows.len());
        for row in rows {
            movies.push(Self::hydrate(store, row).await);
        }
        movies
    }

    async fn hydrate(store: &Store, row: MovieRow) -> Movie {
        let genres = GenreRepo::resolve(store, &row.genre_ids).await;

        let actor_ids: Vec<DbId> = row.cast.iter().map(|c| c.actor_id).collect();
        let actors = ActorRepo::resolve(store, &actor_ids)
            .await
            .into_iter()
            .zip(row.cast)
            .filter_map(|(actor, cast)| {
                actor.map(|actor| MovieActor {
                    actor,
                    character: cast.character,
                })
            })
            .collect();

        Movie {
            id: row.id,
            tmdb_id: row.tmdb_id,
            stream_link: stream_link(row.tmdb_id),
            title: row.title,
            overview: row.overview,
            release_date: row.release_date,
            poster_path: row.poster_path,
            tmdb_vote_average: row.tmdb_vote_average,
            tmdb_vote_count: row.tmdb_vote_count,
            vote_average: row.votes.vote_average,
            vote_count: row.votes.vote_count,
            adult: row.adult,
            revenue: row.revenue,
            genres,
            actors,
        }
    }
}
