//! Re-renders error bodies with internal details outside production.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::ErrorReport;
use crate::state::AppState;

/// Swap the public error body for the detailed one when the environment
/// allows it. Responses without an [`ErrorReport`] pass through untouched.
pub async fn expose_error_details(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if !state.config.environment.exposes_error_details() {
        return response;
    }

    match response.extensions().get::<ErrorReport>().cloned() {
        Some(report) => (response.status(), Json(report.detailed_body())).into_response(),
        None => response,
    }
}
