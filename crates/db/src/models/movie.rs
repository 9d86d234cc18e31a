//! Movie entity model and DTOs.
//!
//! The store keeps movies normalized ([`MovieRow`] references genres and
//! actors by id). Reads hydrate rows into [`Movie`] for external output.

use chrono::NaiveDate;
use cinema_core::rating::VoteAggregate;
use cinema_core::types::DbId;
use serde::Serialize;

use super::actor::Actor;
use super::genre::Genre;

/// Base URL of the embedded player; the TMDB id is appended.
pub const STREAM_LINK_BASE: &str = "https://vidsrc.xyz/embed/movie";

/// An actor's appearance in a movie, by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct CastRef {
    pub actor_id: DbId,
    /// Character played, when known.
    pub character: Option<String>,
}

/// Movie as held by the store.
///
/// `votes` is derived state: only the rating repository writes it.
#[derive(Debug, Clone)]
pub struct MovieRow {
    pub id: DbId,
    pub tmdb_id: i64,
    pub title: String,
    pub overview: String,
    pub release_date: Option<NaiveDate>,
    pub poster_path: Option<String>,
    pub tmdb_vote_average: f32,
    pub tmdb_vote_count: i64,
    pub adult: bool,
    pub revenue: i64,
    pub genre_ids: Vec<DbId>,
    pub cast: Vec<CastRef>,
    pub votes: VoteAggregate,
}

/// Actor entry embedded in a hydrated [`Movie`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieActor {
    #[serde(flatten)]
    pub actor: Actor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
}

/// Hydrated movie for API responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub tmdb_id: i64,
    pub title: String,
    pub overview: String,
    pub release_date: Option<NaiveDate>,
    pub poster_path: Option<String>,
    pub stream_link: String,
    pub tmdb_vote_average: f32,
    pub tmdb_vote_count: i64,
    pub vote_average: f32,
    pub vote_count: i64,
    pub adult: bool,
    pub revenue: i64,
    pub genres: Vec<Genre>,
    pub actors: Vec<MovieActor>,
}

/// DTO for inserting a movie into the catalog.
///
/// There is no way to set `vote_count` / `vote_average` here; new movies
/// start with an empty aggregate.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub tmdb_id: i64,
    pub title: String,
    pub overview: String,
    pub release_date: Option<NaiveDate>,
    pub poster_path: Option<String>,
    pub tmdb_vote_average: f32,
    pub tmdb_vote_count: i64,
    pub adult: bool,
    pub revenue: i64,
    pub genre_ids: Vec<DbId>,
    pub cast: Vec<CastRef>,
}

/// Build the embedded player link for a TMDB id.
pub fn stream_link(tmdb_id: i64) -> String {
    format!("{STREAM_LINK_BASE}/{tmdb_id}")
}
