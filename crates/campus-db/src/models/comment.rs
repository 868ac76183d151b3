//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Comment row joined with its like count and viewer probe
#[derive(Debug, Clone, FromRow)]
pub struct CommentViewModel {
    pub id: i64,
    pub message_id: i64,
    pub author_id: i64,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
    pub viewer_has_liked: bool,
}
