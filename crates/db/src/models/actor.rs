//! Actor entity model and DTOs.

use cinema_core::types::DbId;
use serde::Serialize;

/// Actor gender as published by TMDB.
///
/// Serialized as its integer code (`0`, `1`, `2`) to match the upstream
/// catalog format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "i32")]
pub enum Gender {
    #[default]
    Unspecified,
    Female,
    Male,
}

impl From<Gender> for i32 {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Unspecified => 0,
            Gender::Female => 1,
            Gender::Male => 2,
        }
    }
}

impl From<i32> for Gender {
    /// Unknown codes (TMDB also uses `3` for non-binary) collapse to
    /// [`Gender::Unspecified`].
    fn from(code: i32) -> Self {
        match code {
            1 => Gender::Female,
            2 => Gender::Male,
            _ => Gender::Unspecified,
        }
    }
}

/// An actor row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub tmdb_id: i64,
    pub name: String,
    pub gender: Gender,
    pub profile_path: Option<String>,
}

/// DTO for inserting an actor into the catalog.
#[derive(Debug, Clone)]
pub struct CreateActor {
    pub tmdb_id: i64,
    pub name: String,
    pub gender: Gender,
    pub profile_path: Option<String>,
}
