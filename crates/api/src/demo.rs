//! Demo accounts and their activity, loaded on top of the demo catalog.
//!
//! Accounts go through [`CatalogService::register`] so their passwords are
//! hashed like any other. Activity is written straight to the repositories;
//! it needs no session.

use cinema_core::rating::Score;
use cinema_db::models::rating::UpsertRating;
use cinema_db::models::review::{ReviewInput, UpsertReview};
use cinema_db::repositories::{MovieRepo, RatingRepo, ReviewRepo};

use crate::error::AppResult;
use crate::service::CatalogService;

/// Demo logins as `(username, password)`.
pub const DEMO_ACCOUNTS: [(&str, &str); 2] = [("john", "123"), ("alice", "qwerty")];

/// Register the demo accounts and give each a review and a rating.
///
/// Activity on a movie missing from the catalog is skipped.
pub async fn seed_demo_accounts(service: &CatalogService) -> AppResult<()> {
    let pool = service.pool();

    let activity = [
        (1, 9.0, "Лучший фильм", "Смотрю каждый год."),
        (2, 10.0, "Культовый", "Философия + экшен = ♥"),
    ];

    for ((username, password), (movie_id, rating, title, text)) in
        DEMO_ACCOUNTS.into_iter().zip(activity)
    {
        let user = service.register(username, password).await?;

        if !MovieRepo::exists(pool, movie_id).await {
            tracing::warn!(movie_id, "Demo movie missing, skipping demo activity");
            continue;
        }

        ReviewRepo::upsert(
            pool,
            &UpsertReview {
                user_id: user.id,
                movie_id,
                input: ReviewInput {
                    liked: true,
                    title: title.to_string(),
                    text: text.to_string(),
                },
            },
        )
        .await?;

        RatingRepo::upsert(
            pool,
            &UpsertRating {
                user_id: user.id,
                movie_id,
                rating: Score::new(rating)?,
            },
        )
        .await?;
    }

    tracing::info!(accounts = DEMO_ACCOUNTS.len(), "Demo accounts seeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::auth::session::SessionConfig;

    use super::*;

    #[tokio::test]
    async fn demo_accounts_can_log_in_and_have_activity() {
        let pool = cinema_db::create_pool(true).await;
        let service = CatalogService::new(pool, SessionConfig::default());
        seed_demo_accounts(&service).await.unwrap();

        let john = service.login("john", "123").await.unwrap();
        let profile = service.user_profile(john.user_id).await.unwrap();
        assert_eq!(profile.reviews.len(), 1);
        assert_eq!(profile.ratings[0].rating.value(), 9.0);

        let matrix = service.movie(2).await.unwrap();
        assert_eq!((matrix.vote_count, matrix.vote_average), (1, 10.0));
        assert!(service.login("alice", "qwerty").await.is_ok());
    }

    #[tokio::test]
    async fn demo_accounts_without_catalog_have_no_activity() {
        let pool = cinema_db::create_pool(false).await;
        let service = CatalogService::new(pool, SessionConfig::default());
        seed_demo_accounts(&service).await.unwrap();

        let alice = service.login("alice", "qwerty").await.unwrap();
        let profile = service.user_profile(alice.user_id).await.unwrap();
        assert!(profile.reviews.is_empty());
        assert!(profile.ratings.is_empty());
    }
}
