//! Repository for the rating table, and the write path of movie vote
//! aggregates.
//!
//! Every insert, update or delete recomputes the affected movie's
//! aggregate before releasing the ratings write lock. All read-modify-write
//! cycles on ratings are therefore serialized, which covers both the
//! per-movie aggregate and the per-(user, movie) upsert.

use chrono::Utc;
use cinema_core::error::CoreError;
use cinema_core::rating::{aggregate, VoteAggregate};
use cinema_core::types::DbId;

use crate::models::rating::{Rating, UpsertRating};
use crate::repositories::MovieRepo;
use crate::Store;

/// Result of a rating write: the stored row and the movie's new aggregate.
#[derive(Debug, Clone)]
pub struct RatingWrite {
    pub rating: Rating,
    pub votes: VoteAggregate,
}

/// Provides upsert, delete and listing for ratings.
pub struct RatingRepo;

impl RatingRepo {
    /// Insert or replace the `(user_id, movie_id)` rating and recompute the
    /// movie's aggregate.
    ///
    /// Fails with [`CoreError::NotFound`] if the movie does not exist; the
    /// store is left untouched in that case.
    pub async fn upsert(store: &Store, input: &UpsertRating) -> Result<RatingWrite, CoreError> {
        let mut ratings = store.ratings.write().await;

        if !MovieRepo::exists(store, input.movie_id).await {
            return Err(CoreError::NotFound {
                entity: "Movie",
                id: input.movie_id,
            });
        }

        let now = Utc::now();
        let rating = match ratings
            .iter_mut()
            .find(|r| r.user_id == input.user_id && r.movie_id == input.movie_id)
        {
            Some(existing) => {
                existing.rating = input.rating;
                existing.updated_at = now;
                existing.clone()
            }
            None => {
                let created = Rating {
                    user_id: input.user_id,
                    movie_id: input.movie_id,
                    rating: input.rating,
                    created_at: now,
                    updated_at: now,
                };
                ratings.push(created.clone());
                created
            }
        };

        let votes = Self::publish(store, &ratings, input.movie_id).await;
        Ok(RatingWrite { rating, votes })
    }

    /// Remove the `(user_id, movie_id)` rating and recompute the movie's
    /// aggregate.
    ///
    /// Returns `None` when there was nothing to remove.
    pub async fn delete(store: &Store, user_id: DbId, movie_id: DbId) -> Option<VoteAggregate> {
        let mut ratings = store.ratings.write().await;

        let before = ratings.len();
        ratings.retain(|r| !(r.user_id == user_id && r.movie_id == movie_id));
        if ratings.len() == before {
            return None;
        }

        Some(Self::publish(store, &ratings, movie_id).await)
    }

    /// Recompute a movie's aggregate from the current rating set.
    ///
    /// Returns `None` if the movie does not exist.
    pub async fn recompute(store: &Store, movie_id: DbId) -> Option<VoteAggregate> {
        let ratings = store.ratings.read().await;
        if !MovieRepo::exists(store, movie_id).await {
            return None;
        }
        Some(Self::publish(store, &ratings, movie_id).await)
    }

    /// All ratings for a movie, in insertion order.
    pub async fn list_for_movie(store: &Store, movie_id: DbId) -> Vec<Rating> {
        store
            .ratings
            .read()
            .await
            .iter()
            .filter(|r| r.movie_id == movie_id)
            .cloned()
            .collect()
    }

    /// All ratings by a user, in insertion order.
    pub async fn list_for_user(store: &Store, user_id: DbId) -> Vec<Rating> {
        store
            .ratings
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Aggregate `ratings` for `movie_id` and store it on the movie row.
    ///
    /// `ratings` must be borrowed from a held ratings guard.
    async fn publish(store: &Store, ratings: &[Rating], movie_id: DbId) -> VoteAggregate {
        let votes = aggregate(
            ratings
                .iter()
                .filter(|r| r.movie_id == movie_id)
                .map(|r| r.rating),
        );
        MovieRepo::set_votes(store, movie_id, votes).await;
        tracing::debug!(
            movie_id,
            vote_count = votes.vote_count,
            vote_average = votes.vote_average,
            "Movie votes recomputed"
        );
        votes
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use cinema_core::rating::Score;

    use crate::models::movie::CreateMovie;

    use super::*;

    async fn store_with_movie() -> (Store, DbId) {
        let store = Store::new();
        let id = MovieRepo::create(
            &store,
            &CreateMovie {
                tmdb_id: 13,
                title: "Forrest Gump".to_string(),
                overview: String::new(),
                release_date: None,
                poster_path: None,
                tmdb_vote_average: 8.8,
                tmdb_vote_count: 20_000,
                adult: false,
                revenue: 0,
                genre_ids: Vec::new(),
                cast: Vec::new(),
            },
        )
        .await;
        (store, id)
    }

    fn rate(user_id: DbId, movie_id: DbId, rating: f64) -> UpsertRating {
        UpsertRating {
            user_id,
            movie_id,
            rating: Score::new(rating).unwrap(),
        }
    }

    #[tokio::test]
    async fn upsert_keeps_one_rating_per_pair() {
        let (store, movie) = store_with_movie().await;

        for value in [3.0, 7.0, 5.0] {
            RatingRepo::upsert(&store, &rate(1, movie, value)).await.unwrap();
        }

        let ratings = RatingRepo::list_for_movie(&store, movie).await;
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].rating.value(), 5.0);
        assert_eq!(
            MovieRepo::votes(&store, movie).await,
            Some(VoteAggregate {
                vote_count: 1,
                vote_average: 5.0
            })
        );
    }

    #[tokio::test]
    async fn update_preserves_created_at() {
        let (store, movie) = store_with_movie().await;
        let first = RatingRepo::upsert(&store, &rate(1, movie, 3.0)).await.unwrap();
        let second = RatingRepo::upsert(&store, &rate(1, movie, 4.0)).await.unwrap();
        assert_eq!(first.rating.created_at, second.rating.created_at);
        assert!(second.rating.updated_at >= first.rating.updated_at);
    }

    #[tokio::test]
    async fn aggregate_tracks_inserts_and_deletes() {
        let (store, movie) = store_with_movie().await;

        let w = RatingRepo::upsert(&store, &rate(1, movie, 8.0)).await.unwrap();
        assert_eq!((w.votes.vote_count, w.votes.vote_average), (1, 8.0));

        let w = RatingRepo::upsert(&store, &rate(2, movie, 9.0)).await.unwrap();
        assert_eq!((w.votes.vote_count, w.votes.vote_average), (2, 8.5));

        let votes = RatingRepo::delete(&store, 1, movie).await.expect("rating existed");
        assert_eq!((votes.vote_count, votes.vote_average), (1, 9.0));

        let votes = RatingRepo::delete(&store, 2, movie).await.expect("rating existed");
        assert_eq!(votes, VoteAggregate::default());
    }

    #[tokio::test]
    async fn delete_missing_rating_is_noop() {
        let (store, movie) = store_with_movie().await;
        RatingRepo::upsert(&store, &rate(1, movie, 6.0)).await.unwrap();

        assert!(RatingRepo::delete(&store, 2, movie).await.is_none());
        assert_eq!(RatingRepo::list_for_movie(&store, movie).await.len(), 1);
        assert_eq!(MovieRepo::votes(&store, movie).await.unwrap().vote_count, 1);
    }

    #[tokio::test]
    async fn rating_unknown_movie_fails_without_side_effects() {
        let (store, _movie) = store_with_movie().await;
        let result = RatingRepo::upsert(&store, &rate(1, 404, 5.0)).await;
        assert_matches!(
            result,
            Err(CoreError::NotFound {
                entity: "Movie",
                id: 404
            })
        );
        assert!(RatingRepo::list_for_user(&store, 1).await.is_empty());
    }

    #[tokio::test]
    async fn fractional_ratings_average_exactly() {
        let (store, movie) = store_with_movie().await;
        RatingRepo::upsert(&store, &rate(1, movie, 2.0)).await.unwrap();
        let w = RatingRepo::upsert(&store, &rate(2, movie, 2.3)).await.unwrap();

        // 4.3 / 2 = 2.15 rounds up
        assert_eq!((w.votes.vote_count, w.votes.vote_average), (2, 2.2));
        assert_eq!(MovieRepo::votes(&store, movie).await, Some(w.votes));
    }

    #[tokio::test]
    async fn recompute_matches_rating_set() {
        let (store, movie) = store_with_movie().await;
        RatingRepo::upsert(&store, &rate(1, movie, 10.0)).await.unwrap();
        RatingRepo::upsert(&store, &rate(2, movie, 9.0)).await.unwrap();
        RatingRepo::upsert(&store, &rate(3, movie, 9.0)).await.unwrap();

        let votes = RatingRepo::recompute(&store, movie).await.unwrap();
        assert_eq!(votes.vote_count, 3);
        assert_eq!(votes.vote_average, 9.3);
        assert!(RatingRepo::recompute(&store, 404).await.is_none());
    }

    #[tokio::test]
    async fn concurrent_ratings_do_not_lose_updates() {
        let (store, movie) = store_with_movie().await;
        let store = Arc::new(store);

        let handles: Vec<_> = (1..=50)
            .map(|user| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    RatingRepo::upsert(&store, &rate(user, movie, (user % 11) as f64))
                        .await
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let ratings = RatingRepo::list_for_movie(&store, movie).await;
        let expected = aggregate(ratings.iter().map(|r| r.rating));
        assert_eq!(ratings.len(), 50);
        assert_eq!(MovieRepo::votes(&store, movie).await, Some(expected));
    }
}
