//! Tracing and logging setup
//!
//! Configures the `tracing` subscriber with environment-based filtering.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::Environment;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Log level filter (e.g., "info", "debug", "trace")
    pub level: Level,
    /// Enable JSON output format
    pub json: bool,
    /// Include span events (new, close)
    pub span_events: bool,
    /// Include file and line numbers
    pub file_line: bool,
    /// Include thread names
    pub thread_names: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
            span_events: false,
            file_line: true,
            thread_names: false,
        }
    }
}

impl TracingConfig {
    /// Create a development configuration with debug logging
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            span_events: true,
            thread_names: true,
            ..Self::default()
        }
    }

    /// Create a production configuration with JSON logging
    #[must_use]
    pub fn production() -> Self {
        Self {
            json: true,
            file_line: false,
            ..Self::default()
        }
    }

    /// Pick a configuration matching the deployment environment
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Staging | Environment::Production => Self::production(),
        }
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Initialize the tracing subscriber with default configuration
///
/// Uses `RUST_LOG` environment variable for filtering if set,
/// otherwise defaults to "info" level.
///
/// # Panics
/// Panics if the subscriber cannot be initialized (usually means it's already set).
pub fn init_tracing() {
    init_tracing_with_config(TracingConfig::default());
}

/// Initialize the tracing subscriber with custom configuration
///
/// # Panics
/// Panics if the subscriber cannot be initialized (usually means it's already set).
pub fn init_tracing_with_config(config: TracingConfig) {
    if let Err(err) = try_init_tracing_with_config(config) {
        panic!("failed to initialize tracing: {err}");
    }
}

/// Try to initialize tracing, returning an error if a subscriber is already set
///
/// Unlike `init_tracing`, this function will not panic if called multiple times.
pub fn try_init_tracing() -> Result<(), TracingError> {
    try_init_tracing_with_config(TracingConfig::default())
}

/// Try to initialize tracing with custom configuration
///
/// Unlike `init_tracing_with_config`, this function will not panic if called multiple times.
pub fn try_init_tracing_with_config(config: TracingConfig) -> Result<(), TracingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let fmt_layer = fmt::layer()
        .with_file(config.file_line)
        .with_line_number(config.file_line)
        .with_thread_names(config.thread_names)
        .with_span_events(config.span_events());

    if config.json {
        // JSON format for production/structured logging
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    } else {
        // Pretty format for development
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    }
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
