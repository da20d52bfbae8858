use std::sync::Arc;

use starchart_swapi::CharacterSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, established before the listener binds.
    pub pool: starchart_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Remote character source used by ingestion.
    pub source: Arc<dyn CharacterSource>,
}
