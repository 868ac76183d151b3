//! Topic entity - a pinned agenda headline shown above the board
//!
//! Topics are ordered by an explicit editor-controlled position, with
//! newer topics first among equals.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Agenda topic entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: Snowflake,
    pub title: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl Topic {
    /// Create a new Topic
    pub fn new(id: Snowflake, title: String, position: i32) -> Self {
        Self {
            id,
            title,
            position,
            created_at: Utc::now(),
        }
    }
}
