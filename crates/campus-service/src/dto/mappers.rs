//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use campus_core::entities::{
    CommentView, MealRating, MealRatingStats, MessageView, ReactionState, Topic,
};

use super::responses::{
    CommentResponse, MealRatingResponse, MealRatingStatsResponse, MessageResponse, ToggleResponse,
    TopicResponse,
};

// ============================================================================
// Engagement Mappers
// ============================================================================

impl From<ReactionState> for ToggleResponse {
    fn from(state: ReactionState) -> Self {
        Self {
            count: state.count,
            is_active: state.active,
        }
    }
}

impl From<&CommentView> for CommentResponse {
    fn from(view: &CommentView) -> Self {
        Self {
            id: view.comment.id.to_string(),
            author_name: view.comment.author_name.clone(),
            body: view.comment.body.clone(),
            created_at: view.comment.created_at,
            like_count: view.like_count,
            viewer_has_liked: view.viewer_has_liked,
        }
    }
}

impl From<CommentView> for CommentResponse {
    fn from(view: CommentView) -> Self {
        Self::from(&view)
    }
}

// ============================================================================
// Board Mappers
// ============================================================================

impl From<&MessageView> for MessageResponse {
    fn from(view: &MessageView) -> Self {
        Self {
            id: view.message.id.to_string(),
            author_id: view.message.author_id.to_string(),
            author_name: view.message.author_name.clone(),
            body: view.message.body.clone(),
            created_at: view.message.created_at,
            like_count: view.like_count,
            comment_count: view.comment_count,
            viewer_has_liked: view.viewer_has_liked,
        }
    }
}

impl From<MessageView> for MessageResponse {
    fn from(view: MessageView) -> Self {
        Self::from(&view)
    }
}

// ============================================================================
// Meal Rating Mappers
// ============================================================================

impl From<&MealRating> for MealRatingResponse {
    fn from(rating: &MealRating) -> Self {
        Self {
            meal_date: rating.meal_date,
            liked: rating.liked,
        }
    }
}

impl From<MealRating> for MealRatingResponse {
    fn from(rating: MealRating) -> Self {
        Self::from(&rating)
    }
}

impl From<MealRatingStats> for MealRatingStatsResponse {
    fn from(stats: MealRatingStats) -> Self {
        Self {
            meal_date: stats.meal_date,
            like_count: stats.like_count,
            dislike_count: stats.dislike_count,
        }
    }
}

// ============================================================================
// Topic Mappers
// ============================================================================

impl From<&Topic> for TopicResponse {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id.to_string(),
            title: topic.title.clone(),
            position: topic.position,
            created_at: topic.created_at,
        }
    }
}

impl From<Topic> for TopicResponse {
    fn from(topic: Topic) -> Self {
        Self::from(&topic)
    }
}
