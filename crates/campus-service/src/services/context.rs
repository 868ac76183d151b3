//! Service context - dependency container for services
//!
//! Holds the repositories and other dependencies needed by services.

use std::sync::Arc;

use campus_core::traits::{
    CommentRepository, MealRatingRepository, MessageRepository, ReactionRepository,
    TopicRepository,
};
use campus_core::SnowflakeGenerator;
use campus_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - Snowflake generator for ID generation
/// - The raw pool, for health probes only
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    message_repo: Arc<dyn MessageRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    meal_rating_repo: Arc<dyn MealRatingRepository>,
    topic_repo: Arc<dyn TopicRepository>,

    // Services
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        message_repo: Arc<dyn MessageRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        meal_rating_repo: Arc<dyn MealRatingRepository>,
        topic_repo: Arc<dyn TopicRepository>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            pool,
            message_repo,
            comment_repo,
            reaction_repo,
            meal_rating_repo,
            topic_repo,
            snowflake_generator,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the meal rating repository
    pub fn meal_rating_repo(&self) -> &dyn MealRatingRepository {
        self.meal_rating_repo.as_ref()
    }

    /// Get the topic repository
    pub fn topic_repo(&self) -> &dyn TopicRepository {
        self.topic_repo.as_ref()
    }

    // === Services ===

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> campus_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    meal_rating_repo: Option<Arc<dyn MealRatingRepository>>,
    topic_repo: Option<Arc<dyn TopicRepository>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            message_repo: None,
            comment_repo: None,
            reaction_repo: None,
            meal_rating_repo: None,
            topic_repo: None,
            snowflake_generator: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn meal_rating_repo(mut self, repo: Arc<dyn MealRatingRepository>) -> Self {
        self.meal_rating_repo = Some(repo);
        self
    }

    pub fn topic_repo(mut self, repo: Arc<dyn TopicRepository>) -> Self {
        self.topic_repo = Some(repo);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.message_repo
                .ok_or_else(|| super::error::ServiceError::validation("message_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| super::error::ServiceError::validation("comment_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| super::error::ServiceError::validation("reaction_repo is required"))?,
            self.meal_rating_repo
                .ok_or_else(|| super::error::ServiceError::validation("meal_rating_repo is required"))?,
            self.topic_repo
                .ok_or_else(|| super::error::ServiceError::validation("topic_repo is required"))?,
            self.snowflake_generator
                .ok_or_else(|| super::error::ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
