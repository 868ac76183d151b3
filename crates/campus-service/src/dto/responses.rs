//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Wire fields are
//! camelCase and Snowflake IDs are serialized as strings for JavaScript
//! compatibility.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

// ============================================================================
// Engagement Responses
// ============================================================================

/// Post-toggle reaction state for a target
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    /// Live reaction count for the target after the toggle
    pub count: i64,
    /// Whether the toggling user's reaction is present after the toggle
    pub is_active: bool,
}

/// Comment with its live engagement numbers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
    pub viewer_has_liked: bool,
}

// ============================================================================
// Board Responses
// ============================================================================

/// Board message with its live engagement numbers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
    pub comment_count: i64,
    pub viewer_has_liked: bool,
}

// ============================================================================
// Meal Rating Responses
// ============================================================================

/// One user's verdict on a meal date
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRatingResponse {
    pub meal_date: NaiveDate,
    pub liked: bool,
}

/// Aggregate verdict counts for a meal date
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRatingStatsResponse {
    pub meal_date: NaiveDate,
    pub like_count: i64,
    pub dislike_count: i64,
}

/// Result of a rating history purge
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgeResponse {
    /// Number of rating rows removed
    pub purged: u64,
}

// ============================================================================
// Topic Responses
// ============================================================================

/// Agenda topic
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicResponse {
    pub id: String,
    pub title: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
