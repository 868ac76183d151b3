//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The reaction and comment stores are the
//! only shared mutable state in the system and are mutated exclusively
//! through these operations.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{
    Comment, CommentView, MealRating, MealRatingStats, Message, MessageView, Reaction,
    ReactionState, TargetType, Topic,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Message Repository
// ============================================================================

/// Pagination options for board listings
#[derive(Debug, Clone)]
pub struct MessageQuery {
    pub before: Option<Snowflake>,
    pub after: Option<Snowflake>,
    pub limit: i64,
}

impl Default for MessageQuery {
    /// Latest page of 50, no cursor
    fn default() -> Self {
        Self {
            before: None,
            after: None,
            limit: 50,
        }
    }
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Check that a message exists
    async fn exists(&self, id: Snowflake) -> RepoResult<bool>;

    /// Get one message with derived engagement numbers
    async fn find_view(
        &self,
        id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> RepoResult<Option<MessageView>>;

    /// List board messages newest first, with derived engagement numbers
    async fn list(
        &self,
        query: MessageQuery,
        viewer_id: Option<Snowflake>,
    ) -> RepoResult<Vec<MessageView>>;

    /// List one author's messages newest first
    async fn list_by_author(
        &self,
        author_id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> RepoResult<Vec<MessageView>>;

    /// Create a new message
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Delete a message and cascade its comments and every reaction row
    /// referencing the message or its comments, in one atomic unit.
    ///
    /// Fails with an authorization error when `requester_id` is not the
    /// author, and with a not-found error when the message does not exist.
    async fn delete(&self, id: Snowflake, requester_id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Check that a comment exists
    async fn exists(&self, id: Snowflake) -> RepoResult<bool>;

    /// Create a new comment
    ///
    /// Fails with a validation error when the parent message does not
    /// exist; comments are never orphaned at birth.
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// List a message's comments newest first (`created_at` descending,
    /// ties broken by id descending), each with its derived like count and
    /// the viewer's own like flag.
    async fn list_by_message(
        &self,
        message_id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> RepoResult<Vec<CommentView>>;

    /// Delete a comment and purge its reaction rows in one atomic unit
    ///
    /// Fails with an authorization error when `requester_id` is not the
    /// author, and with a not-found error when the comment does not exist.
    async fn delete(&self, id: Snowflake, requester_id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Check whether the user currently has a reaction on the target
    async fn exists(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        target_type: TargetType,
    ) -> RepoResult<bool>;

    /// Add a reaction; fails with a conflict error when one is already
    /// present (never a silent double insert).
    async fn add(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Remove a reaction; fails with a not-found error when absent
    async fn remove(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        target_type: TargetType,
    ) -> RepoResult<()>;

    /// Live reaction count for a target, derived from the reaction set
    async fn count(&self, target_id: Snowflake, target_type: TargetType) -> RepoResult<i64>;

    /// Atomically flip the user's reaction on the target and return the
    /// post-toggle state.
    ///
    /// The delete-if-present / insert-if-absent decision and the count
    /// re-derivation happen inside a single atomic unit serialized per
    /// (user, target, type) key, so back-to-back toggles from one user
    /// strictly alternate and concurrent toggles never double-count.
    async fn toggle(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        target_type: TargetType,
    ) -> RepoResult<ReactionState>;

    /// Purge every reaction row for a target; returns the number removed
    async fn delete_for_target(
        &self,
        target_id: Snowflake,
        target_type: TargetType,
    ) -> RepoResult<u64>;
}

// ============================================================================
// Meal Rating Repository
// ============================================================================

#[async_trait]
pub trait MealRatingRepository: Send + Sync {
    /// Record or overwrite the user's verdict for a date (atomic upsert)
    async fn rate(&self, rating: &MealRating) -> RepoResult<()>;

    /// Withdraw the user's verdict; fails with a not-found error if the
    /// user never rated that date.
    async fn remove(&self, user_id: Snowflake, meal_date: NaiveDate) -> RepoResult<()>;

    /// Aggregate like/dislike counts for one date (zeroes when unrated)
    async fn stats_for_date(&self, meal_date: NaiveDate) -> RepoResult<MealRatingStats>;

    /// Aggregate counts for every rated date, newest date first
    async fn stats(&self) -> RepoResult<Vec<MealRatingStats>>;

    /// All of one user's ratings, newest date first
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<MealRating>>;

    /// Delete ratings for dates strictly before the cutoff; returns the
    /// number removed.
    async fn purge_before(&self, cutoff: NaiveDate) -> RepoResult<u64>;
}

// ============================================================================
// Topic Repository
// ============================================================================

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Find topic by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Topic>>;

    /// List all topics ordered by position, then newest first
    async fn list(&self) -> RepoResult<Vec<Topic>>;

    /// Create a new topic
    async fn create(&self, topic: &Topic) -> RepoResult<()>;

    /// Update an existing topic
    async fn update(&self, topic: &Topic) -> RepoResult<()>;

    /// Delete a topic; fails with a not-found error when absent
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Apply a new position to each listed topic in one atomic unit
    async fn update_positions(&self, positions: &[(Snowflake, i32)]) -> RepoResult<()>;
}
