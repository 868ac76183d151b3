//! Comment entity - a reply in a message thread
//!
//! Comments are immutable once created; the only mutation is deletion,
//! either author-initiated or cascading from the parent message.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Comment entity, owned by its parent message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub message_id: Snowflake,
    pub author_id: Snowflake,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(
        id: Snowflake,
        message_id: Snowflake,
        author_id: Snowflake,
        author_name: String,
        body: String,
    ) -> Self {
        Self {
            id,
            message_id,
            author_id,
            author_name,
            body,
            created_at: Utc::now(),
        }
    }

    /// Check whether the given user wrote this comment
    #[inline]
    pub fn is_authored_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }
}

/// Comment joined with its live engagement numbers
///
/// `viewer_has_liked` reflects only the viewing user's own reaction rows,
/// never anyone else's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub comment: Comment,
    pub like_count: i64,
    pub viewer_has_liked: bool,
}

impl CommentView {
    /// View of a freshly created comment (no engagement yet)
    pub fn fresh(comment: Comment) -> Self {
        Self {
            comment,
            like_count: 0,
            viewer_has_liked: false,
        }
    }
}
