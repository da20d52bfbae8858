pub mod characters;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Routes advertised by the not-found fallback.
pub const AVAILABLE_ROUTES: &[&str] = &[
    "GET /",
    "GET /api",
    "GET /api/health",
    "GET /api/ready",
    "POST /api/external-data",
    "GET /api/external-data/{id}",
    "GET /api/data",
    "GET /api/export-csv",
];

/// Build the `/api` route tree.
///
/// ```text
/// /health                  liveness
/// /ready                   readiness (database reachable)
///
/// /external-data           run ingestion (POST)
/// /external-data/{id}      enriched remote preview (GET)
/// /data                    paginated characters + page statistics
/// /export-csv              CSV download of all characters
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(characters::router())
}
