//! # campus-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, CommentView, MealRating, MealRatingStats, Message, MessageView, Reaction,
    ReactionState, TargetType, Topic,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, MealRatingRepository, MessageQuery, MessageRepository, ReactionRepository,
    RepoResult, TopicRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
