//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod engagement;
pub mod error;
pub mod meal_rating;
pub mod message;
pub mod topic;

#[cfg(test)]
pub(crate) mod support;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use engagement::EngagementService;
pub use error::{ServiceError, ServiceResult};
pub use meal_rating::MealRatingService;
pub use message::MessageService;
pub use topic::TopicService;
