//! Domain errors - error types for the domain layer
//!
//! Every failure the engagement service surfaces falls into one of four
//! externally visible kinds: validation, not-found, authorization, or
//! store-unavailable (plus a conflict kind for the low-level reaction
//! `add`). Raw driver errors never cross this boundary.

use chrono::NaiveDate;
use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Message not found: {0}")]
    MessageNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("Topic not found: {0}")]
    TopicNotFound(Snowflake),

    #[error("Reaction not found")]
    ReactionNotFound,

    #[error("No meal rating for {meal_date}")]
    MealRatingNotFound { meal_date: NaiveDate },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Cannot attach to nonexistent message: {0}")]
    ParentMessageMissing(Snowflake),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not message author")]
    NotMessageAuthor,

    #[error("Not comment author")]
    NotCommentAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Reaction already exists")]
    ReactionAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::TopicNotFound(_) => "UNKNOWN_TOPIC",
            Self::ReactionNotFound => "UNKNOWN_REACTION",
            Self::MealRatingNotFound { .. } => "UNKNOWN_MEAL_RATING",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyField(_) => "EMPTY_FIELD",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::ParentMessageMissing(_) => "UNKNOWN_PARENT_MESSAGE",

            // Authorization
            Self::NotMessageAuthor => "NOT_MESSAGE_AUTHOR",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",

            // Conflict
            Self::ReactionAlreadyExists => "REACTION_ALREADY_EXISTS",

            // Infrastructure
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MessageNotFound(_)
                | Self::CommentNotFound(_)
                | Self::TopicNotFound(_)
                | Self::ReactionNotFound
                | Self::MealRatingNotFound { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::EmptyField(_)
                | Self::ContentTooLong { .. }
                | Self::ParentMessageMissing(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotMessageAuthor | Self::NotCommentAuthor)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ReactionAlreadyExists)
    }

    /// Check if this is a transient infrastructure error (safe to retry)
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}
