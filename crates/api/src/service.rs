//! Session-checked catalog operations.
//!
//! [`CatalogService`] is the single entry point for everything a client can
//! do: account management, the rating and review mutations, and the reads
//! that compose several repositories. Handlers stay thin and call into it.
//!
//! Every mutation resolves its session token before touching the store, so
//! an invalid token fails with `Unauthorized` and leaves no trace. Input is
//! validated next, then the repository performs the write. The `*_as`
//! variants take a user id already resolved by the HTTP auth extractor.

use std::sync::OnceLock;

use chrono::{Duration, Utc};
use cinema_core::account::{validate_password_strength, validate_username};
use cinema_core::error::CoreError;
use cinema_core::rating::{Score, VoteAggregate};
use cinema_core::review::validate_review_content;
use cinema_core::types::DbId;
use cinema_db::models::actor::Actor;
use cinema_db::models::genre::Genre;
use cinema_db::models::movie::Movie;
use cinema_db::models::rating::{Rating, UpsertRating};
use cinema_db::models::review::{Review, ReviewInput, UpsertReview};
use cinema_db::models::session::CreateSession;
use cinema_db::models::user::{CreateUser, User, UserProfile};
use cinema_db::repositories::rating_repo::RatingWrite;
use cinema_db::repositories::{
    ActorRepo, GenreRepo, MovieRepo, RatingRepo, ReviewRepo, SessionRepo, UserRepo,
};
use cinema_db::DbPool;
use serde::Serialize;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::{generate_session_token, hash_session_token, SessionConfig};
use crate::error::{AppError, AppResult};

/// Successful login response.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub user_id: DbId,
    pub username: String,
    /// Opaque bearer token for subsequent calls.
    pub token: String,
    /// Session lifetime in seconds.
    pub expires_in: i64,
}

/// Catalog operations over a shared store.
pub struct CatalogService {
    pool: DbPool,
    session: SessionConfig,
}

impl CatalogService {
    pub fn new(pool: DbPool, session: SessionConfig) -> Self {
        Self { pool, session }
    }

    /// The underlying store.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    // -----------------------------------------------------------------------
    // Accounts and sessions
    // -----------------------------------------------------------------------

    /// Create an account. Usernames are unique and case-sensitive.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        validate_username(username)?;
        validate_password_strength(password, self.session.min_password_length)?;

        let password_hash = hash_password(password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

        let user = UserRepo::create(
            &self.pool,
            &CreateUser {
                username: username.to_string(),
                password_hash,
            },
        )
        .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Verify credentials and open a new session.
    ///
    /// Unknown usernames and wrong passwords fail identically, and both pay
    /// for one argon2 verification. Expired sessions are pruned first.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginResponse> {
        let pruned = SessionRepo::cleanup_expired(&self.pool, Utc::now()).await;
        if pruned > 0 {
            tracing::debug!(pruned, "Expired sessions removed");
        }

        let Some(user) = UserRepo::find_by_username(&self.pool, username).await else {
            if let Some(hash) = dummy_password_hash() {
                let _ = verify_password(password, hash);
            }
            tracing::warn!(username, "Login rejected: unknown user");
            return Err(CoreError::InvalidCredentials.into());
        };

        let password_valid = verify_password(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
        if !password_valid {
            tracing::warn!(user_id = user.id, "Login rejected: wrong password");
            return Err(CoreError::InvalidCredentials.into());
        }

        let expires_at = Duration::try_seconds(self.session.ttl_secs)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .ok_or_else(|| AppError::InternalError("Session lifetime out of range".into()))?;

        let (token, token_hash) = generate_session_token();
        SessionRepo::create(
            &self.pool,
            CreateSession {
                token_hash,
                user_id: user.id,
                expires_at,
            },
        )
        .await;

        tracing::info!(user_id = user.id, "User logged in");
        Ok(LoginResponse {
            user_id: user.id,
            username: user.username,
            token,
            expires_in: self.session.ttl_secs,
        })
    }

    /// End the session behind `token`. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) {
        if SessionRepo::revoke(&self.pool, &hash_session_token(token)).await {
            tracing::info!("Session revoked");
        }
    }

    /// Resolve a session token to its user id.
    pub async fn authenticate(&self, token: &str) -> AppResult<DbId> {
        if token.is_empty() {
            return Err(CoreError::Unauthorized("Missing session token".into()).into());
        }

        let session = SessionRepo::find_active(&self.pool, &hash_session_token(token), Utc::now())
            .await
            .ok_or_else(|| CoreError::Unauthorized("Invalid or expired session".into()))?;
        Ok(session.user_id)
    }

    // -----------------------------------------------------------------------
    // Ratings
    // -----------------------------------------------------------------------

    /// Rate a movie, replacing any earlier rating by the same user.
    pub async fn rate(&self, token: &str, movie_id: DbId, rating: f64) -> AppResult<RatingWrite> {
        let user_id = self.authenticate(token).await?;
        self.rate_as(user_id, movie_id, rating).await
    }

    pub async fn rate_as(
        &self,
        user_id: DbId,
        movie_id: DbId,
        rating: f64,
    ) -> AppResult<RatingWrite> {
        let score = Score::new(rating)?;

        let write = RatingRepo::upsert(
            &self.pool,
            &UpsertRating {
                user_id,
                movie_id,
                rating: score,
            },
        )
        .await?;

        tracing::info!(
            user_id,
            movie_id,
            rating = score.value(),
            vote_count = write.votes.vote_count,
            "Movie rated"
        );
        Ok(write)
    }

    /// Withdraw the caller's rating of a movie.
    ///
    /// Returns the movie's new aggregate, or `None` if there was no rating.
    pub async fn unrate(&self, token: &str, movie_id: DbId) -> AppResult<Option<VoteAggregate>> {
        let user_id = self.authenticate(token).await?;
        Ok(self.unrate_as(user_id, movie_id).await)
    }

    pub async fn unrate_as(&self, user_id: DbId, movie_id: DbId) -> Option<VoteAggregate> {
        let votes = RatingRepo::delete(&self.pool, user_id, movie_id).await;
        if votes.is_some() {
            tracing::info!(user_id, movie_id, "Rating removed");
        }
        votes
    }

    // -----------------------------------------------------------------------
    // Reviews
    // -----------------------------------------------------------------------

    /// Write or edit the caller's review of a movie.
    pub async fn review(&self, token: &str, movie_id: DbId, input: ReviewInput) -> AppResult<Review> {
        let user_id = self.authenticate(token).await?;
        self.review_as(user_id, movie_id, input).await
    }

    pub async fn review_as(
        &self,
        user_id: DbId,
        movie_id: DbId,
        input: ReviewInput,
    ) -> AppResult<Review> {
        validate_review_content(&input.title, &input.text)?;

        let review = ReviewRepo::upsert(
            &self.pool,
            &UpsertReview {
                user_id,
                movie_id,
                input,
            },
        )
        .await?;

        tracing::info!(user_id, movie_id, liked = review.liked, "Review saved");
        Ok(review)
    }

    /// Delete the caller's review of a movie. Returns `true` if one existed.
    pub async fn delete_review(&self, token: &str, movie_id: DbId) -> AppResult<bool> {
        let user_id = self.authenticate(token).await?;
        Ok(self.delete_review_as(user_id, movie_id).await)
    }

    pub async fn delete_review_as(&self, user_id: DbId, movie_id: DbId) -> bool {
        let removed = ReviewRepo::delete(&self.pool, user_id, movie_id).await;
        if removed {
            tracing::info!(user_id, movie_id, "Review deleted");
        }
        removed
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub async fn movie(&self, id: DbId) -> AppResult<Movie> {
        MovieRepo::find_by_id(&self.pool, id)
            .await
            .ok_or_else(|| CoreError::NotFound { entity: "Movie", id }.into())
    }

    pub async fn search_movies(&self, query: Option<&str>) -> Vec<Movie> {
        MovieRepo::search(&self.pool, query).await
    }

    /// One page of the catalog; `page` is 1-based.
    pub async fn movies_page(&self, page: usize, page_size: usize) -> Vec<Movie> {
        MovieRepo::list_page(&self.pool, page, page_size).await
    }

    pub async fn actor(&self, id: DbId) -> AppResult<Actor> {
        ActorRepo::find_by_id(&self.pool, id)
            .await
            .ok_or_else(|| CoreError::NotFound { entity: "Actor", id }.into())
    }

    /// Every movie an actor appears in.
    pub async fn actor_movies(&self, actor_id: DbId) -> AppResult<Vec<Movie>> {
        if !ActorRepo::exists(&self.pool, actor_id).await {
            return Err(CoreError::NotFound {
                entity: "Actor",
                id: actor_id,
            }
            .into());
        }
        Ok(MovieRepo::list_for_actor(&self.pool, actor_id).await)
    }

    pub async fn search_actors(&self, query: Option<&str>) -> Vec<Actor> {
        ActorRepo::search(&self.pool, query).await
    }

    pub async fn genres(&self) -> Vec<Genre> {
        GenreRepo::list(&self.pool).await
    }

    pub async fn movie_reviews(&self, movie_id: DbId) -> AppResult<Vec<Review>> {
        self.ensure_movie(movie_id).await?;
        Ok(ReviewRepo::list_for_movie(&self.pool, movie_id).await)
    }

    pub async fn movie_ratings(&self, movie_id: DbId) -> AppResult<Vec<Rating>> {
        self.ensure_movie(movie_id).await?;
        Ok(RatingRepo::list_for_movie(&self.pool, movie_id).await)
    }

    /// A user with their reviews and ratings.
    pub async fn user_profile(&self, user_id: DbId) -> AppResult<UserProfile> {
        let user = UserRepo::find_by_id(&self.pool, user_id)
            .await
            .ok_or(CoreError::NotFound {
                entity: "User",
                id: user_id,
            })?;

        Ok(UserProfile {
            id: user.id,
            username: user.username,
            reviews: ReviewRepo::list_for_user(&self.pool, user_id).await,
            ratings: RatingRepo::list_for_user(&self.pool, user_id).await,
        })
    }

    async fn ensure_movie(&self, movie_id: DbId) -> AppResult<()> {
        if MovieRepo::exists(&self.pool, movie_id).await {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: "Movie",
                id: movie_id,
            }
            .into())
        }
    }
}

/// Hash verified against when a login names an unknown user, so that path
/// costs the same as a wrong password.
fn dummy_password_hash() -> Option<&'static str> {
    static HASH: OnceLock<Option<String>> = OnceLock::new();
    HASH.get_or_init(|| hash_password("cinema-unknown-user").ok()).as_deref()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
