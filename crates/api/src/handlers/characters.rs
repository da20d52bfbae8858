//! Handlers for importing, reading and exporting characters.
//!
//! ```text
//! POST /api/external-data        import from the remote source
//! GET  /api/external-data/{id}   enriched preview of one remote character
//! GET  /api/data                 paginated read with page statistics
//! GET  /api/export-csv           full CSV dump
//! ```

use std::convert::Infallible;

use axum::body::Body;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures::stream;
use serde::Serialize;
use starchart_core::error::CoreError;
use starchart_core::export::{export_filename, header_line};
use starchart_core::statistics::{PageStatistics, StatSample};
use starchart_db::models::character::{Character, NewCharacter};
use starchart_db::repositories::CharacterRepo;
use starchart_pipeline::{preview_character, run_ingestion, IngestOptions, IngestionSummary};

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Payload of `GET /api/data`.
#[derive(Debug, Serialize)]
pub struct CharacterPage {
    pub characters: Vec<Character>,
    pub statistics: PageStatistics,
}

/// POST /api/external-data
///
/// Runs one ingestion. Reports everything fetched and only the rows that
/// were newly inserted.
pub async fn ingest(State(state): State<AppState>) -> AppResult<Json<ApiResponse<IngestionSummary>>> {
    let options = IngestOptions {
        homeworld_concurrency: state.config.homeworld_concurrency,
    };
    let summary = run_ingestion(&state.pool, state.source.as_ref(), &options).await?;

    let message = format!(
        "External API call succeeded. Saved {} characters",
        summary.new_characters
    );
    Ok(Json(ApiResponse::new(message, summary)))
}

/// GET /api/external-data/{id}
///
/// A non-integer id is a JSON 400 in the usual error envelope.
pub async fn preview(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<ApiResponse<NewCharacter>>> {
    let Path(id) = id.map_err(|rejection| {
        AppError::BadRequest(format!("Invalid character id: {}", rejection.body_text()))
    })?;
    let character = preview_character(state.source.as_ref(), id).await?;
    Ok(Json(ApiResponse::new(
        format!("Fetched character {id} from the external API"),
        character,
    )))
}

/// GET /api/data?page=&limit=
///
/// Statistics cover only the returned page.
pub async fn list_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<ApiResponse<CharacterPage>>> {
    let request = params.to_request();
    let characters = CharacterRepo::list_page(&state.pool, request.limit, request.offset()).await?;

    let samples: Vec<StatSample<'_>> = characters.iter().map(Character::stat_sample).collect();
    let statistics = PageStatistics::compute(&samples);

    Ok(Json(ApiResponse::new(
        "Data retrieved successfully",
        CharacterPage {
            characters,
            statistics,
        },
    )))
}

/// GET /api/export-csv
///
/// Streams every stored character, newest first, as a CSV attachment.
/// Nothing is written to disk.
pub async fn export_csv(State(state): State<AppState>) -> AppResult<Response> {
    let characters = CharacterRepo::list_all(&state.pool).await?;
    if characters.is_empty() {
        return Err(CoreError::NotFound("No data available to export".to_string()).into());
    }

    let filename = export_filename(chrono::Utc::now().timestamp_millis());
    tracing::info!(rows = characters.len(), %filename, "Exporting characters");

    let lines = std::iter::once(header_line())
        .chain(characters.into_iter().map(|c| c.csv_row()))
        .map(Ok::<_, Infallible>);

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Body::from_stream(stream::iter(lines)),
    )
        .into_response())
}
