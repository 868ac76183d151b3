//! # campus-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the service surface the API layer consumes
pub use dto::{
    ActorRequest, CommentResponse, CreateCommentRequest, CreateMessageRequest, CreateTopicRequest,
    HealthChecks, HealthResponse, MealRatingResponse, MealRatingStatsResponse, MessageResponse,
    PurgeResponse, RateMealRequest, ReadinessResponse, ToggleResponse, TopicPosition,
    TopicResponse, UpdateTopicRequest,
};
pub use services::{
    EngagementService, MealRatingService, MessageService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, TopicService,
};
