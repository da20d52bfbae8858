use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use sqlx::ConnectOptions;
use starchart_pipeline::ingest::DEFAULT_HOMEWORLD_CONCURRENCY;
use starchart_swapi::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use starchart_swapi::SwapiConfig;

/// Deployment environment, read from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    /// Parse an `APP_ENV` value. Anything unrecognised is treated as development.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "test" => Self::Test,
            _ => Self::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Whether error responses may carry internal error text.
    pub fn exposes_error_details(&self) -> bool {
        !self.is_production()
    }
}

/// Relational store connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full connection URL. When set, the discrete fields are ignored.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Require TLS for the database connection.
    pub ssl: bool,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Build sqlx connect options. Statement logging is only kept in development.
    pub fn connect_options(&self, environment: Environment) -> Result<PgConnectOptions, sqlx::Error> {
        let options = match &self.url {
            Some(url) => PgConnectOptions::from_str(url)?,
            None => PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.database)
                .ssl_mode(if self.ssl {
                    PgSslMode::Require
                } else {
                    PgSslMode::Disable
                }),
        };

        Ok(match environment {
            Environment::Development => options,
            _ => options.disable_statement_logging(),
        })
    }

    /// Host name for informational output.
    pub fn display_host(&self) -> String {
        match &self.url {
            Some(url) => PgConnectOptions::from_str(url)
                .map(|o| o.get_host().to_string())
                .unwrap_or_else(|_| "not configured".to_string()),
            None => self.host.clone(),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    pub environment: Environment,
    /// Allowed CORS origins; `*` allows any.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `60`).
    pub request_timeout_secs: u64,
    pub database: DatabaseConfig,
    pub swapi: SwapiConfig,
    /// Homeworld lookups in flight during one ingestion run.
    pub homeworld_concurrency: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                        |
    /// |-------------------------|--------------------------------|
    /// | `HOST`                  | `0.0.0.0`                      |
    /// | `PORT`                  | `3000`                         |
    /// | `APP_ENV`               | `development`                  |
    /// | `CORS_ORIGINS`          | `*`                            |
    /// | `REQUEST_TIMEOUT_SECS`  | `60`                           |
    /// | `DATABASE_URL`          | unset                          |
    /// | `DB_HOST`               | `localhost`                    |
    /// | `DB_PORT`               | `5433`                         |
    /// | `DB_USER`               | `postgres`                     |
    /// | `DB_PASSWORD`           | empty                          |
    /// | `DB_DATABASE`           | `postgres`                     |
    /// | `DB_SSL`                | `true` in production           |
    /// | `DB_MAX_CONNECTIONS`    | `10`                           |
    /// | `SWAPI_BASE_URL`        | `https://swapi.py4e.com/api`   |
    /// | `SWAPI_TIMEOUT_SECS`    | `10`                           |
    /// | `HOMEWORLD_CONCURRENCY` | `4`                            |
    ///
    /// Panics on malformed numeric values so misconfiguration fails fast.
    pub fn from_env() -> Self {
        let environment = Environment::parse(&env_or("APP_ENV", "development"));

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let database = DatabaseConfig {
            url: std::env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            host: env_or("DB_HOST", "localhost"),
            port: parse_env("DB_PORT", 5433),
            user: env_or("DB_USER", "postgres"),
            password: env_or("DB_PASSWORD", ""),
            database: env_or("DB_DATABASE", "postgres"),
            ssl: parse_bool_env("DB_SSL", environment.is_production()),
            max_connections: parse_env("DB_MAX_CONNECTIONS", starchart_db::DEFAULT_MAX_CONNECTIONS),
        };

        let swapi = SwapiConfig {
            base_url: env_or("SWAPI_BASE_URL", DEFAULT_BASE_URL),
            timeout: Duration::from_secs(parse_env(
                "SWAPI_TIMEOUT_SECS",
                DEFAULT_TIMEOUT.as_secs(),
            )),
        };

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: parse_env("PORT", 3000),
            environment,
            cors_origins,
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", 60),
            database,
            swapi,
            homeworld_concurrency: parse_env("HOMEWORLD_CONCURRENCY", DEFAULT_HOMEWORLD_CONCURRENCY),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid number: {e}")),
        Err(_) => default,
    }
}

fn parse_bool_env(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(raw) => matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db_config(url: Option<&str>) -> DatabaseConfig {
        DatabaseConfig {
            url: url.map(str::to_string),
            host: "db.internal".to_string(),
            port: 5433,
            user: "postgres".to_string(),
            password: String::new(),
            database: "characters".to_string(),
            ssl: false,
            max_connections: 5,
        }
    }

    #[test]
    fn environment_parsing() {
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse(" PROD "), Environment::Production);
        assert_eq!(Environment::parse("test"), Environment::Test);
        assert_eq!(Environment::parse("staging"), Environment::Development);
        assert!(!Environment::Production.exposes_error_details());
        assert!(Environment::Development.exposes_error_details());
    }

    #[test]
    fn display_host_prefers_url() {
        assert_eq!(db_config(None).display_host(), "db.internal");
        assert_eq!(
            db_config(Some("postgres://u:p@pg.example:5432/app")).display_host(),
            "pg.example"
        );
    }

    #[test]
    fn connect_options_from_parts() {
        let options = db_config(None)
            .connect_options(Environment::Production)
            .unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("characters"));
    }
}
