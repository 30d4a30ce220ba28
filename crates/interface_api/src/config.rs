//! API configuration
//!
//! Values come from `API_*` environment variables (a `.env` file is loaded
//! first by the server binary), with the defaults below for anything unset.

use axum::http::HeaderValue;
use serde::{Deserialize, Deserializer};

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Maximum connections in the database pool
    pub db_max_connections: u32,
    /// Log filter directive used when `RUST_LOG` is unset
    pub log_level: String,
    pub log_format: LogFormat,
    /// Origin allowed by the CORS layer; must be an `http` or `https` origin
    #[serde(deserialize_with = "deserialize_origin")]
    pub cors_origin: HeaderValue,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/insurance_crm".to_string(),
            db_max_connections: 10,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the environment over the defaults
    ///
    /// # Errors
    ///
    /// Fails when a value does not parse, including a CORS origin that is not
    /// an `http(s)://` origin.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("database_url", defaults.database_url)?
            .set_default("db_max_connections", i64::from(defaults.db_max_connections))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "pretty")?
            .set_default("cors_origin", DEFAULT_CORS_ORIGIN)?
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parses a CORS origin such as `https://app.example.com`
pub fn parse_origin(raw: &str) -> Result<HeaderValue, String> {
    let raw = raw.trim();
    let has_host = raw
        .strip_prefix("https://")
        .or_else(|| raw.strip_prefix("http://"))
        .is_some_and(|host| !host.is_empty() && !host.contains('/'));
    if !has_host {
        return Err(format!("invalid CORS origin: {raw:?}"));
    }
    HeaderValue::from_str(raw).map_err(|_| format!("invalid CORS origin: {raw:?}"))
}

fn deserialize_origin<'de, D>(deserializer: D) -> Result<HeaderValue, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_origin(&raw).map_err(serde::de::Error::custom)
}
