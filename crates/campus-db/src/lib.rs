//! # campus-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `campus-core`. It handles:
//!
//! - Connection pool management and schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Model -> Entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use campus_db::pool::{create_pool, init_schema, DatabaseConfig};
//! use campus_db::repositories::PgMessageRepository;
//! use campus_core::traits::MessageRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     init_schema(&pool).await?;
//!     let message_repo = PgMessageRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, init_schema, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentRepository, PgMealRatingRepository, PgMessageRepository, PgReactionRepository,
    PgTopicRepository,
};
