//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Wire fields are camelCase; caller-supplied IDs arrive as
//! strings and are parsed into Snowflakes at the service layer.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Actor Requests
// ============================================================================

/// Request body for endpoints whose only input is the acting user
///
/// Used by the toggle and delete endpoints; the target is named in the path.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActorRequest {
    /// Acting user ID (Snowflake as string)
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,
}

// ============================================================================
// Board Requests
// ============================================================================

/// Create message request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    /// Posting user ID (Snowflake as string)
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    #[validate(length(min = 1, max = 32, message = "userName must be 1-32 characters"))]
    pub user_name: String,

    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub body: String,
}

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    /// Commenting user ID (Snowflake as string)
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    #[validate(length(min = 1, max = 32, message = "userName must be 1-32 characters"))]
    pub user_name: String,

    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub body: String,
}

// ============================================================================
// Meal Rating Requests
// ============================================================================

/// Rate one day's cafeteria menu
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RateMealRequest {
    /// Rating user ID (Snowflake as string)
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    /// Verdict: true = liked, false = disliked
    pub liked: bool,
}

// ============================================================================
// Topic Requests
// ============================================================================

/// Create topic request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    /// Position in the agenda list (defaults to 0)
    pub position: Option<i32>,
}

/// Update topic request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTopicRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: Option<String>,

    pub position: Option<i32>,
}

/// Topic position entry for bulk reorder
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicPosition {
    /// Topic ID (Snowflake as string)
    pub id: String,
    /// New position
    pub position: i32,
}
