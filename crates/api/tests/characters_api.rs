//! Integration tests for ingestion, paginated reads and CSV export.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, get, post, sample_source};
use sqlx::PgPool;
use starchart_api::config::Environment;
use starchart_swapi::InMemorySource;

// ---------------------------------------------------------------------------
// POST /api/external-data
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn ingest_stores_enriched_characters(pool: PgPool) {
    let app = common::build_test_app(pool, sample_source());

    let response = post(app, "/api/external-data").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "External API call succeeded. Saved 3 characters");
    assert_eq!(json["data"]["totalFetched"], 3);
    assert_eq!(json["data"]["newCharacters"], 3);

    let stored = json["data"]["characters"].as_array().unwrap();
    assert_eq!(stored[0]["name"], "Luke Skywalker");
    assert_eq!(stored[0]["homeworld"], "Tatooine");
    assert!(stored[0]["id"].is_number());
    assert_eq!(stored[2]["name"], "Padmé Amidala");
    assert_eq!(stored[2]["height"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn repeated_ingest_saves_nothing_new(pool: PgPool) {
    let app = common::build_test_app(pool, sample_source());

    let first = post(app.clone(), "/api/external-data").await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = body_json(post(app, "/api/external-data").await).await;
    assert_eq!(second["message"], "External API call succeeded. Saved 0 characters");
    assert_eq!(second["data"]["totalFetched"], 3);
    assert_eq!(second["data"]["newCharacters"], 0);
    assert_eq!(second["data"]["characters"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ingest_remote_failure_returns_500_with_details_outside_production(pool: PgPool) {
    let app = common::build_test_app(pool, sample_source().failing_listing());

    let response = post(app, "/api/external-data").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Error calling the external API");
    assert_eq!(json["code"], "REMOTE_FETCH_ERROR");
    assert!(json["error"].as_str().unwrap().contains("503"));
    assert!(json["details"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ingest_remote_failure_is_sanitized_in_production(pool: PgPool) {
    let mut config = common::test_config();
    config.environment = Environment::Production;
    let app = common::build_app_with_config(pool, sample_source().failing_listing(), config);

    let response = post(app, "/api/external-data").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Error calling the external API");
    assert_eq!(json["error"], "External API request failed");
    assert!(json.get("details").is_none());
}

// ---------------------------------------------------------------------------
// GET /api/external-data/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn preview_returns_enriched_character_without_storing(pool: PgPool) {
    let app = common::build_test_app(pool.clone(), sample_source());

    let response = get(app, "/api/external-data/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Luke Skywalker");
    assert_eq!(json["data"]["homeworld"], "Tatooine");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM characters")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn preview_of_missing_character_is_a_remote_error(pool: PgPool) {
    let app = common::build_test_app(pool, sample_source());

    let response = get(app, "/api/external-data/99").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "REMOTE_FETCH_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn preview_with_non_numeric_id_is_a_json_400(pool: PgPool) {
    let app = common::build_test_app(pool, sample_source());

    let response = get(app, "/api/external-data/luke").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid character id"));
}

// ---------------------------------------------------------------------------
// GET /api/data
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn data_returns_newest_first_with_page_statistics(pool: PgPool) {
    let app = common::build_test_app(pool, sample_source());
    post(app.clone(), "/api/external-data").await;

    let response = get(app, "/api/data").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Data retrieved successfully");

    let names: Vec<_> = json["data"]["characters"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Padmé Amidala", "C-3PO", "Luke Skywalker"]);

    let stats = &json["data"]["statistics"];
    assert_eq!(stats["totalInPage"], 3);
    assert_eq!(stats["genderDistribution"]["male"], 1);
    assert_eq!(stats["genderDistribution"]["n/a"], 1);
    assert_eq!(stats["genderDistribution"]["female"], 1);
    assert_eq!(stats["homeworldDistribution"]["Tatooine"], 2);
    assert_eq!(stats["homeworldDistribution"]["Naboo"], 1);
    // (172 + 167) / 2 = 169.5, unknown height excluded.
    assert_eq!(stats["averageHeight"], 170);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn data_statistics_cover_only_the_requested_page(pool: PgPool) {
    let app = common::build_test_app(pool, sample_source());
    post(app.clone(), "/api/external-data").await;

    let json = body_json(get(app, "/api/data?page=2&limit=2").await).await;

    let characters = json["data"]["characters"].as_array().unwrap();
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0]["name"], "Luke Skywalker");

    let stats = &json["data"]["statistics"];
    assert_eq!(stats["totalInPage"], 1);
    assert_eq!(stats["homeworldDistribution"]["Tatooine"], 1);
    assert!(stats["homeworldDistribution"].get("Naboo").is_none());
    assert_eq!(stats["averageHeight"], 172);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn data_beyond_last_page_is_empty(pool: PgPool) {
    let app = common::build_test_app(pool, sample_source());
    post(app.clone(), "/api/external-data").await;

    let response = get(app, "/api/data?page=5&limit=10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["characters"].as_array().unwrap().len(), 0);
    let stats = &json["data"]["statistics"];
    assert_eq!(stats["totalInPage"], 0);
    assert_eq!(stats["averageHeight"], 0);
    assert_eq!(stats["genderDistribution"], serde_json::json!({}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn data_ignores_malformed_pagination(pool: PgPool) {
    let app = common::build_test_app(pool, sample_source());
    post(app.clone(), "/api/external-data").await;

    let response = get(app, "/api/data?page=abc&limit=-4").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["characters"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn data_on_empty_store_is_empty(pool: PgPool) {
    let app = common::build_test_app(pool, InMemorySource::default());

    let json = body_json(get(app, "/api/data").await).await;

    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["characters"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["statistics"]["totalInPage"], 0);
}

// ---------------------------------------------------------------------------
// GET /api/export-csv
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn export_on_empty_store_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool, InMemorySource::default());

    let response = get(app, "/api/export-csv").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "No data available to export");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn export_streams_all_rows_as_csv_attachment(pool: PgPool) {
    let app = common::build_test_app(pool, sample_source());
    post(app.clone(), "/api/external-data").await;

    let response = get(app, "/api/export-csv").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/csv; charset=utf-8"
    );

    let disposition = response
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"characters_"));
    assert!(disposition.ends_with(".csv\""));

    let body = body_text(response).await;
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "ID,Name,Height,Mass,Hair Color,Skin Color,Eye Color,Birth Year,Gender,Homeworld,Created At"
    );
    assert!(lines[1].contains(",Padmé Amidala,,77,"));
    assert!(lines[3].contains(",Luke Skywalker,172,77,blond,fair,blue,19BBY,male,Tatooine,"));
}
