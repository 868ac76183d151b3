//! Message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Message row joined with its derived engagement counts
///
/// Produced by the listing queries, which compute `like_count`,
/// `comment_count` and the viewer probe in SQL.
#[derive(Debug, Clone, FromRow)]
pub struct MessageViewModel {
    pub id: i64,
    pub author_id: i64,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub like_count: i64,
    pub comment_count: i64,
    pub viewer_has_liked: bool,
}

impl MessageViewModel {
    /// Check if anyone has engaged with this message
    #[inline]
    pub fn has_engagement(&self) -> bool {
        self.like_count > 0 || self.comment_count > 0
    }
}
