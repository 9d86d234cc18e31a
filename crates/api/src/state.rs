use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::CatalogService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The entity store. Read-only handlers may query it directly.
    pub pool: cinema_db::DbPool,
    /// Session-checked mutations and composed reads over `pool`.
    pub service: Arc<CatalogService>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state around an existing store.
    pub fn new(pool: cinema_db::DbPool, config: ServerConfig) -> Self {
        let service = CatalogService::new(pool.clone(), config.session.clone());
        Self {
            pool,
            service: Arc::new(service),
            config: Arc::new(config),
        }
    }
}
