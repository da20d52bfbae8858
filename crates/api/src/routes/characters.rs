//! Route definitions for the character import/read/export surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::characters;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// POST   /external-data        -> ingest
/// GET    /external-data/{id}   -> preview
/// GET    /data                 -> list_page
/// GET    /export-csv           -> export_csv
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/external-data", post(characters::ingest))
        .route("/external-data/{id}", get(characters::preview))
        .route("/data", get(characters::list_page))
        .route("/export-csv", get(characters::export_csv))
}
