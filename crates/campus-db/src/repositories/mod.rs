//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in campus-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod meal_rating;
mod message;
mod reaction;
mod topic;

pub use comment::PgCommentRepository;
pub use meal_rating::PgMealRatingRepository;
pub use message::PgMessageRepository;
pub use reaction::PgReactionRepository;
pub use topic::PgTopicRepository;
