use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};
use starchart_core::error::CoreError;
use starchart_pipeline::IngestError;
use starchart_swapi::RemoteFetchError;

/// Application-level error type for HTTP handlers.
///
/// Wraps domain, store and remote-source errors. Implements [`IntoResponse`]
/// to produce consistent JSON error bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `starchart_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The remote character source failed.
    #[error(transparent)]
    Remote(#[from] RemoteFetchError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<IngestError> for AppError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::Remote(e) => AppError::Remote(e),
            IngestError::Store(e) => AppError::Database(e),
        }
    }
}

/// Everything needed to render an error body, with and without internals.
///
/// Attached to error responses as an extension so the error-detail
/// middleware can re-render the body outside production.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub message: String,
    pub code: &'static str,
    /// Safe to show in production.
    pub public_error: String,
    /// Full error text.
    pub detail: String,
    /// `detail` followed by each `source()` in the chain.
    pub chain: Vec<String>,
}

impl ErrorReport {
    pub fn public_body(&self) -> Value {
        json!({
            "success": false,
            "message": self.message,
            "code": self.code,
            "error": self.public_error,
        })
    }

    pub fn detailed_body(&self) -> Value {
        json!({
            "success": false,
            "message": self.message,
            "code": self.code,
            "error": self.detail,
            "details": self.chain,
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, public_error) = match &self {
            // --- CoreError variants ---
            AppError::Core(CoreError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), msg.clone())
            }

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Remote source ---
            AppError::Remote(err) => {
                tracing::error!(error = %err, "External API call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REMOTE_FETCH_ERROR",
                    "Error calling the external API".to_string(),
                    "External API request failed".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                msg.clone(),
                msg.clone(),
            ),
        };

        let report = ErrorReport {
            message,
            code,
            public_error,
            detail: self.to_string(),
            chain: error_chain(&self),
        };

        let mut response = (status, axum::Json(report.public_body())).into_response();
        response.extensions_mut().insert(report);
        response
    }
}

/// Classify a sqlx error into an HTTP status, error code and messages.
///
/// - Connection-class failures map to 503.
/// - Everything else maps to 500 with a sanitized public message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String, String) {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => {
            tracing::error!(error = %err, "Database connection error");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "DATABASE_UNAVAILABLE",
                "Database connection failed".to_string(),
                "Service temporarily unavailable".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Database query failed".to_string(),
                "Database error".to_string(),
            )
        }
    }
}

fn error_chain(err: &(dyn std::error::Error + 'static)) -> Vec<String> {
    let mut chain = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }
    chain
}
