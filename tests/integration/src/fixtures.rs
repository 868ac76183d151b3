//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. The suite runs
//! against a persistent database, so identities and meal dates are made
//! unique across runs, not just within one process.

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Mint a user id unique across test runs
///
/// User ids are caller-supplied Snowflakes, so tests invent their own.
/// A millisecond timestamp base keeps reruns from colliding with rows
/// left behind by earlier runs.
pub fn unique_user_id() -> String {
    let base = Utc::now().timestamp_millis() * 1000;
    (base + (unique_suffix() % 1000) as i64).to_string()
}

/// Pick a meal date no other test has touched
///
/// Verdict aggregates are keyed by calendar date across all users, so
/// every test works on its own far-future date.
pub fn unique_meal_date() -> NaiveDate {
    let days = (Utc::now().timestamp_millis() % 3_000_000) + unique_suffix() as i64;
    NaiveDate::from_ymd_opt(2100, 1, 1).unwrap() + Duration::days(days)
}

/// A synthetic user identity for exercising the API
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: String,
    pub name: String,
}

impl TestUser {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            id: unique_user_id(),
            name: format!("student{suffix}"),
        }
    }
}

/// Create message request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    pub user_id: String,
    pub user_name: String,
    pub body: String,
}

impl CreateMessageRequest {
    pub fn posted_by(user: &TestUser, body: &str) -> Self {
        Self {
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            body: body.to_string(),
        }
    }
}

/// Create comment request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub user_id: String,
    pub user_name: String,
    pub body: String,
}

impl CreateCommentRequest {
    pub fn posted_by(user: &TestUser, body: &str) -> Self {
        Self {
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            body: body.to_string(),
        }
    }
}

/// Acting-user body for toggle and delete endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorRequest {
    pub user_id: String,
}

impl ActorRequest {
    pub fn from_user(user: &TestUser) -> Self {
        Self {
            user_id: user.id.clone(),
        }
    }
}

/// Meal rating request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateMealRequest {
    pub user_id: String,
    pub liked: bool,
}

impl RateMealRequest {
    pub fn from_user(user: &TestUser, liked: bool) -> Self {
        Self {
            user_id: user.id.clone(),
            liked,
        }
    }
}

/// Create topic request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicRequest {
    pub title: String,
    pub position: Option<i32>,
}

impl CreateTopicRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Agenda item {suffix}"),
            position: None,
        }
    }

    pub fn at_position(position: i32) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Agenda item {suffix}"),
            position: Some(position),
        }
    }
}

/// Update topic request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTopicRequest {
    pub title: Option<String>,
    pub position: Option<i32>,
}

/// Topic position entry for bulk reorder
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicPosition {
    pub id: String,
    pub position: i32,
}

/// Message response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub body: String,
    pub created_at: String,
    pub like_count: i64,
    pub comment_count: i64,
    pub viewer_has_liked: bool,
}

/// Comment response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub author_name: String,
    pub body: String,
    pub created_at: String,
    pub like_count: i64,
    pub viewer_has_liked: bool,
}

/// Post-toggle reaction state
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub count: i64,
    pub is_active: bool,
}

/// One user's meal verdict
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRatingResponse {
    pub meal_date: String,
    pub liked: bool,
}

/// Aggregate verdict counts for one date
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRatingStatsResponse {
    pub meal_date: String,
    pub like_count: i64,
    pub dislike_count: i64,
}

/// Rating history purge result
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgeResponse {
    pub purged: u64,
}

/// Agenda topic
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicResponse {
    pub id: String,
    pub title: String,
    pub position: i32,
    pub created_at: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
