#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use starchart_api::config::{DatabaseConfig, Environment, ServerConfig};
use starchart_api::router::build_app_router;
use starchart_api::state::AppState;
use starchart_swapi::{InMemorySource, RawRemoteCharacter, SwapiConfig};

pub const TATOOINE: &str = "https://swapi.test/api/planets/1/";
pub const NABOO: &str = "https://swapi.test/api/planets/8/";

/// Build a test `ServerConfig` with safe defaults.
///
/// Runs in the `test` environment (error details exposed) and allows any
/// CORS origin.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: Environment::Test,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        database: DatabaseConfig {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            database: "postgres".to_string(),
            ssl: false,
            max_connections: 5,
        },
        swapi: SwapiConfig::default(),
        homeworld_concurrency: 2,
    }
}

/// Build the full application router, using the given database pool and
/// in-memory remote source.
///
/// Goes through `build_app_router` so integration tests exercise the same
/// middleware stack production uses.
pub fn build_test_app(pool: PgPool, source: InMemorySource) -> Router {
    build_app_with_config(pool, source, test_config())
}

pub fn build_app_with_config(pool: PgPool, source: InMemorySource, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        source: Arc::new(source),
    };
    build_app_router(state, &config)
}

/// A remote character with every attribute populated.
pub fn raw_character(name: &str, height: &str, gender: &str, homeworld: &str) -> RawRemoteCharacter {
    RawRemoteCharacter {
        name: name.to_string(),
        height: Some(height.to_string()),
        mass: Some("77".to_string()),
        hair_color: Some("blond".to_string()),
        skin_color: Some("fair".to_string()),
        eye_color: Some("blue".to_string()),
        birth_year: Some("19BBY".to_string()),
        gender: Some(gender.to_string()),
        homeworld: Some(homeworld.to_string()),
        url: Some(format!("https://swapi.test/api/people/{}/", name.len())),
    }
}

/// Three characters over two planets, one with an unknown height.
pub fn sample_source() -> InMemorySource {
    InMemorySource::new(vec![
        raw_character("Luke Skywalker", "172", "male", TATOOINE),
        raw_character("C-3PO", "167", "n/a", TATOOINE),
        raw_character("Padmé Amidala", "unknown", "female", NABOO),
    ])
    .with_planet(TATOOINE, "Tatooine")
    .with_planet(NABOO, "Naboo")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri).await
}

async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
