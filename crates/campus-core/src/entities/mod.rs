//! Domain entities - core business objects

mod comment;
mod meal_rating;
mod message;
mod reaction;
mod topic;

pub use comment::{Comment, CommentView};
pub use meal_rating::{MealRating, MealRatingStats};
pub use message::{Message, MessageView};
pub use reaction::{Reaction, ReactionState, TargetType};
pub use topic::Topic;
