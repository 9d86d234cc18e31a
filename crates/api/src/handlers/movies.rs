//! Handlers for the `/movies` and `/genres` resources.

use axum::extract::{Path, Query, State};
use axum::Json;
use cinema_core::pagination::resolve_page_params;
use cinema_core::types::DbId;
use cinema_db::models::genre::Genre;
use cinema_db::models::movie::Movie;
use cinema_db::models::rating::Rating;

use crate::error::AppResult;
use crate::query::{PageParams, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/movies?page=&size=
///
/// One page of the catalog, in catalog order. A page past the end is empty.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let (page, size) = resolve_page_params(params.page, params.size)?;
    let movies = state.service.movies_page(page, size).await;
    tracing::debug!(page, size, count = movies.len(), "Listed movies");
    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/search?q=
///
/// Case-insensitive substring match on the title.
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<DataResponse<Vec<Movie>>> {
    let movies = state.service.search_movies(params.q.as_deref()).await;
    Json(DataResponse { data: movies })
}

/// GET /api/v1/movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Movie>>> {
    let movie = state.service.movie(id).await?;
    Ok(Json(DataResponse { data: movie }))
}

/// GET /api/v1/movies/{id}/ratings
pub async fn list_movie_ratings(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Rating>>>> {
    let ratings = state.service.movie_ratings(id).await?;
    Ok(Json(DataResponse { data: ratings }))
}

/// GET /api/v1/genres
pub async fn list_genres(State(state): State<AppState>) -> Json<DataResponse<Vec<Genre>>> {
    Json(DataResponse {
        data: state.service.genres().await,
    })
}
