//! Handlers for the `/actors` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use cinema_core::types::DbId;
use cinema_db::models::actor::Actor;
use cinema_db::models::movie::Movie;

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/actors/search?q=
pub async fn search_actors(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<DataResponse<Vec<Actor>>> {
    let actors = state.service.search_actors(params.q.as_deref()).await;
    Json(DataResponse { data: actors })
}

/// GET /api/v1/actors/{id}
pub async fn get_actor(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Actor>>> {
    let actor = state.service.actor(id).await?;
    Ok(Json(DataResponse { data: actor }))
}

/// GET /api/v1/actors/{id}/movies
pub async fn list_actor_movies(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let movies = state.service.actor_movies(id).await?;
    Ok(Json(DataResponse { data: movies }))
}
