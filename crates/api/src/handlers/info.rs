//! Service metadata, liveness, readiness and the unmatched-route fallback.

use axum::extract::{OriginalUri, State};
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use crate::routes::AVAILABLE_ROUTES;
use crate::state::AppState;

const SERVICE_NAME: &str = "Star Wars Characters API";

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// GET /
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    let db_connected = starchart_db::health_check(&state.pool).await.is_ok();

    Json(json!({
        "success": true,
        "message": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "timestamp": now(),
        "environment": state.config.environment.as_str(),
        "database": {
            "status": if db_connected { "connected" } else { "disconnected" },
            "type": "PostgreSQL",
            "host": state.config.database.display_host(),
        },
        "endpoints": {
            "apiInfo": "/api",
            "health": "/api/health",
            "ready": "/api/ready",
            "fetchExternalData": "POST /api/external-data",
            "previewExternalCharacter": "GET /api/external-data/{id}",
            "getData": "GET /api/data",
            "exportCSV": "GET /api/export-csv",
        },
    }))
}

/// GET /api
pub async fn api_info() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /api/health",
            "fetchData": "POST /api/external-data",
            "getData": "GET /api/data",
            "exportCSV": "GET /api/export-csv",
        },
        "documentation": {
            "POST /api/external-data": "Fetches characters from the external API and stores the new ones",
            "GET /api/external-data/{id}": "Returns one enriched external character without storing it",
            "GET /api/data": "Returns stored characters with statistics for the requested page",
            "GET /api/export-csv": "Downloads a CSV file with all stored characters",
        },
    }))
}

/// GET /api/health -- liveness only, never touches the database.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "API is running",
        "timestamp": now(),
        "environment": state.config.environment.as_str(),
    }))
}

/// GET /api/ready -- 503 until the database answers.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    match starchart_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "success": true, "status": "ready" })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "success": false, "status": "unavailable" })),
            )
        }
    }
}

/// Fallback for every unmatched path.
pub async fn route_not_found(method: Method, OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Route not found",
            "path": uri.to_string(),
            "method": method.as_str(),
            "availableRoutes": AVAILABLE_ROUTES,
            "timestamp": now(),
        })),
    )
}
