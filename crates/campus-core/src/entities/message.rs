//! Message entity - a post on the campus board

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Board message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new Message
    pub fn new(id: Snowflake, author_id: Snowflake, author_name: String, body: String) -> Self {
        Self {
            id,
            author_id,
            author_name,
            body,
            created_at: Utc::now(),
        }
    }

    /// Check whether the given user wrote this message
    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }
}

/// Message joined with its live engagement numbers
///
/// Counts are derived from the reaction and comment sets at read time;
/// they are never stored alongside the message row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub message: Message,
    pub like_count: i64,
    pub comment_count: i64,
    pub viewer_has_liked: bool,
}

impl MessageView {
    /// View of a freshly created message (no engagement yet)
    pub fn fresh(message: Message) -> Self {
        Self {
            message,
            like_count: 0,
            comment_count: 0,
            viewer_has_liked: false,
        }
    }
}
