//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod meal_rating;
mod message;
mod topic;

pub use comment::CommentViewModel;
pub use meal_rating::{MealRatingModel, MealRatingStatsModel};
pub use message::MessageViewModel;
pub use topic::TopicModel;
