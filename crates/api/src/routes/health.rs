use axum::routing::get;
use axum::Router;

use crate::handlers::info;
use crate::state::AppState;

/// Liveness and readiness, mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(info::health))
        .route("/ready", get(info::ready))
}
