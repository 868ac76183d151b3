//! Repository traits (ports) for the persistence layer

mod repositories;

pub use repositories::{
    CommentRepository, MealRatingRepository, MessageQuery, MessageRepository, ReactionRepository,
    RepoResult, TopicRepository,
};
