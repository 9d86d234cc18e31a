//! Repository for the review table.

use chrono::Utc;
use cinema_core::error::CoreError;
use cinema_core::types::DbId;

use crate::models::review::{Review, UpsertReview};
use crate::repositories::MovieRepo;
use crate::Store;

/// Provides upsert, delete and listing for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert or replace the `(user_id, movie_id)` review.
    ///
    /// A second call for the same pair edits the existing review in place.
    /// Fails with [`CoreError::NotFound`] if the movie does not exist.
    pub async fn upsert(store: &Store, input: &UpsertReview) -> Result<Review, CoreError> {
        let mut reviews = store.reviews.write().await;

        if !MovieRepo::exists(store, input.movie_id).await {
            return Err(CoreError::NotFound {
                entity: "Movie",
                id: input.movie_id,
            });
        }

        let now = Utc::now();
        let review = match reviews
            .iter_mut()
            .find(|r| r.user_id == input.user_id && r.movie_id == input.movie_id)
        {
            Some(existing) => {
                existing.liked = input.input.liked;
                existing.title.clone_from(&input.input.title);
                existing.text.clone_from(&input.input.text);
                existing.updated_at = now;
                existing.clone()
            }
            None => {
                let created = Review {
                    user_id: input.user_id,
                    movie_id: input.movie_id,
                    liked: input.input.liked,
                    title: input.input.title.clone(),
                    text: input.input.text.clone(),
                    created_at: now,
                    updated_at: now,
                };
                reviews.push(created.clone());
                created
            }
        };
        Ok(review)
    }

    /// Remove the `(user_id, movie_id)` review.
    ///
    /// Returns `true` if a review was removed.
    pub async fn delete(store: &Store, user_id: DbId, movie_id: DbId) -> bool {
        let mut reviews = store.reviews.write().await;
        let before = reviews.len();
        reviews.retain(|r| !(r.user_id == user_id && r.movie_id == movie_id));
        reviews.len() != before
    }

    /// Find the review a user wrote for a movie.
    pub async fn find(store: &Store, user_id: DbId, movie_id: DbId) -> Option<Review> {
        store
            .reviews
            .read()
            .await
            .iter()
            .find(|r| r.user_id == user_id && r.movie_id == movie_id)
            .cloned()
    }

    /// All reviews of a movie, in insertion order.
    pub async fn list_for_movie(store: &Store, movie_id: DbId) -> Vec<Review> {
        store
            .reviews
            .read()
            .await
            .iter()
            .filter(|r| r.movie_id == movie_id)
            .cloned()
            .collect()
    }

    /// All reviews written by a user, in insertion order.
    pub async fn list_for_user(store: &Store, user_id: DbId) -> Vec<Review> {
        store
            .reviews
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }
}
