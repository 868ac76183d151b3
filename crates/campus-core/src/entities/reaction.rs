//! Reaction entity - a user's binary "like" on a target
//!
//! A reaction carries no payload beyond presence: a user either has a row
//! for a given target or does not. The composite key (user, target, type)
//! is what makes the toggle idempotent.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::value_objects::Snowflake;

/// The kind of entity a reaction is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    Message,
    Comment,
}

impl TargetType {
    /// Stable textual form, used for storage and lock keys
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub user_id: Snowflake,
    pub target_id: Snowflake,
    pub target_type: TargetType,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(user_id: Snowflake, target_id: Snowflake, target_type: TargetType) -> Self {
        Self {
            user_id,
            target_id,
            target_type,
            created_at: Utc::now(),
        }
    }
}

/// Post-toggle state of a target, as observed by the toggling user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionState {
    /// Whether the user's reaction is present after the toggle
    pub active: bool,
    /// Live reaction count for the target after the toggle
    pub count: i64,
}

impl ReactionState {
    /// Create a new ReactionState
    pub fn new(active: bool, count: i64) -> Self {
        Self { active, count }
    }
}
