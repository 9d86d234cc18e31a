//! Demo catalog loaded at startup.
//!
//! Only catalog data (genres, actors, movies) lives here. Demo accounts
//! need password hashing and are created by the API layer on top of this.

use chrono::NaiveDate;

use crate::models::actor::{CreateActor, Gender};
use crate::models::movie::{CastRef, CreateMovie};
use crate::repositories::{ActorRepo, GenreRepo, MovieRepo};
use crate::Store;

fn cast(actor_id: i64, character: &str) -> CastRef {
    CastRef {
        actor_id,
        character: Some(character.to_string()),
    }
}

/// Insert the demo genres, actors and movies.
pub async fn seed_catalog(store: &Store) {
    let drama = GenreRepo::create(store, "Drama").await;
    let comedy = GenreRepo::create(store, "Comedy").await;
    let scifi = GenreRepo::create(store, "Sci-Fi").await;
    let thriller = GenreRepo::create(store, "Thriller").await;

    let actors = [
        (31, "Tom Hanks", Gender::Male, "/img/hanks.jpg"),
        (10990, "Emma Watson", Gender::Female, "/img/emma.jpg"),
        (6384, "Keanu Reeves", Gender::Male, "/img/keanu.jpg"),
        (530, "Carrie-Anne Moss", Gender::Female, "/img/carrie.jpg"),
        (2975, "Laurence Fishburne", Gender::Male, "/img/fish.jpg"),
    ];
    let mut actor_ids = [0; 5];
    for (slot, (tmdb_id, name, gender, profile_path)) in actor_ids.iter_mut().zip(actors) {
        let actor = ActorRepo::create(
            store,
            &CreateActor {
                tmdb_id,
                name: name.to_string(),
                gender,
                profile_path: Some(profile_path.to_string()),
            },
        )
        .await;
        *slot = actor.id;
    }
    let [hanks, _watson, reeves, moss, fishburne] = actor_ids;

    MovieRepo::create(
        store,
        &CreateMovie {
            tmdb_id: 13,
            title: "Forrest Gump".to_string(),
            overview: "Life is like a box of chocolates…".to_string(),
            release_date: NaiveDate::from_ymd_opt(1994, 7, 6),
            poster_path: Some("/img/forrest.jpg".to_string()),
            tmdb_vote_average: 8.8,
            tmdb_vote_count: 20_000,
            adult: false,
            revenue: 678_000_000,
            genre_ids: vec![drama.id, comedy.id],
            cast: vec![cast(hanks, "Forrest Gump")],
        },
    )
    .await;

    MovieRepo::create(
        store,
        &CreateMovie {
            tmdb_id: 603,
            title: "The Matrix".to_string(),
            overview: "Welcome to the real world.".to_string(),
            release_date: NaiveDate::from_ymd_opt(1999, 3, 31),
            poster_path: Some(
                "https://image.tmdb.org/t/p/w500/3bhkrj58Vtu7enYsRolD1fZdja1.jpg".to_string(),
            ),
            tmdb_vote_average: 8.7,
            tmdb_vote_count: 24_000,
            adult: false,
            revenue: 463_000_000,
            genre_ids: vec![thriller.id, scifi.id],
            cast: vec![
                cast(reeves, "Neo"),
                cast(fishburne, "Morpheus"),
                cast(moss, "Trinity"),
            ],
        },
    )
    .await;

    tracing::info!(
        movies = MovieRepo::count(store).await,
        "Demo catalog seeded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_catalog_is_consistent() {
        let store = Store::new();
        seed_catalog(&store).await;

        let movies = MovieRepo::search(&store, None).await;
        let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["Forrest Gump", "The Matrix"]);

        let matrix = &movies[1];
        assert_eq!(matrix.genres.len(), 2);
        assert_eq!(matrix.actors.len(), 3);
        assert_eq!(matrix.vote_count, 0);
        assert_eq!(ActorRepo::search(&store, None).await.len(), 5);
    }
}
