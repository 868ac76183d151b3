//! Application error types
//!
//! Unified error handling for the entire application.

use campus_core::DomainError;
use serde::Serialize;
use std::fmt;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // Rate limiting
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::Validation(_) => 400,

            // 404 Not Found
            Self::NotFound(_) => 404,

            // 409 Conflict
            Self::Conflict(_) => 409,

            // 429 Too Many Requests
            Self::RateLimitExceeded => 429,

            // 500 Internal Server Error
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,

            // Map domain errors to appropriate status codes
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_authorization() {
                    403
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else if e.is_unavailable() {
                    // Transient store failures are retryable
                    503
                } else {
                    500
                }
            }
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        let status = self.status_code();
        (400..500).contains(&status)
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        let status = self.status_code();
        (500..600).contains(&status)
    }

    /// Create a not found error for a resource type
    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::NotFound(resource.to_string())
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            details: None,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
