//! Application configuration structs
//!
//! Loads configuration from environment variables (with optional .env file).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub snowflake: SnowflakeConfig,
    pub rate_limit: RateLimitConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SnowflakeConfig {
    #[serde(default)]
    pub worker_id: u16,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

// Default value functions
fn default_app_name() -> String {
    "campus-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

/// Reads an optional environment variable, falling back on parse failure.
fn env_or<T: FromStr>(key: &'static str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(fallback)
}

/// Reads a required environment variable and parses it.
fn env_required<T: FromStr>(key: &'static str) -> Result<T, ConfigError> {
    let raw = env::var(key).map_err(|_| ConfigError::MissingVar(key))?;
    raw.parse()
        .map_err(|_| ConfigError::InvalidValue(key, raw.clone()))
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    /// or hold values that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let worker_id: u16 = env_or("WORKER_ID", 0);
        // Ten bits of worker id in the generated identifiers.
        if worker_id >= 1024 {
            return Err(ConfigError::InvalidValue("WORKER_ID", worker_id.to_string()));
        }

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: env_required("API_PORT")?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env_or("DATABASE_MAX_CONNECTIONS", default_max_connections()),
                min_connections: env_or("DATABASE_MIN_CONNECTIONS", default_min_connections()),
            },
            snowflake: SnowflakeConfig { worker_id },
            rate_limit: RateLimitConfig {
                requests_per_second: env_or(
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second(),
                ),
                burst: env_or("RATE_LIMIT_BURST", default_burst()),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
