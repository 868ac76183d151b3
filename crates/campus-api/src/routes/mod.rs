//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{comments, health, likes, meals, messages, topics};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(message_routes())
        .merge(user_routes())
        .merge(meal_routes())
        .merge(topic_routes())
}

/// Board message routes, including per-message engagement
fn message_routes() -> Router<AppState> {
    Router::new()
        // Message CRUD
        .route("/messages", post(messages::create_message))
        .route("/messages", get(messages::list_messages))
        .route("/messages/:message_id", get(messages::get_message))
        .route("/messages/:message_id", delete(messages::delete_message))
        // Like toggles
        .route("/messages/:message_id/like", post(likes::toggle_message_like))
        .route("/comments/:comment_id/like", post(likes::toggle_comment_like))
        // Comment threads
        .route("/messages/:message_id/comments", get(comments::list_comments))
        .route("/messages/:message_id/comments", post(comments::create_comment))
        .route(
            "/messages/:message_id/comments/:comment_id",
            delete(comments::delete_comment),
        )
}

/// Per-user listing routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id/messages", get(messages::get_user_messages))
        .route("/users/:user_id/meal-ratings", get(meals::get_user_ratings))
}

/// Meal rating routes
fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/meals/:date/rating", put(meals::rate_meal))
        .route("/meals/:date/rating", delete(meals::remove_rating))
        .route("/meals/ratings", get(meals::list_stats))
        .route("/meals/ratings/history", delete(meals::purge_history))
}

/// Topic routes
///
/// The static /topics/positions segment takes priority over /topics/:topic_id.
fn topic_routes() -> Router<AppState> {
    Router::new()
        .route("/topics", get(topics::list_topics))
        .route("/topics", post(topics::create_topic))
        .route("/topics/positions", patch(topics::reorder_topics))
        .route("/topics/:topic_id", get(topics::get_topic))
        .route("/topics/:topic_id", patch(topics::update_topic))
        .route("/topics/:topic_id", delete(topics::delete_topic))
}
