//! Genre entity model.

use cinema_core::types::DbId;
use serde::Serialize;

/// A genre row. Genres are many-to-many with movies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}
