//! Liveness endpoint.

use axum::extract::State;
use axum::Json;
use cinema_db::StoreStats;
use serde::Serialize;

use crate::state::AppState;

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: StoreStats,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        store: cinema_db::stats(&state.pool).await,
    })
}
