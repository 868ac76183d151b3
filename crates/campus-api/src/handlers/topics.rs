//! Topic handlers
//!
//! Endpoints for the pinned agenda topic list.

use axum::{
    extract::{Path, State},
    Json,
};
use campus_service::{
    CreateTopicRequest, TopicPosition, TopicResponse, TopicService, UpdateTopicRequest,
};

use crate::extractors::{JsonBody, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List topics in display order
///
/// GET /topics
pub async fn list_topics(State(state): State<AppState>) -> ApiResult<Json<Vec<TopicResponse>>> {
    let service = TopicService::new(state.service_context());
    let topics = service.list_topics().await?;
    Ok(Json(topics))
}

/// Create a topic
///
/// POST /topics
pub async fn create_topic(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTopicRequest>,
) -> ApiResult<Created<Json<TopicResponse>>> {
    let service = TopicService::new(state.service_context());
    let response = service.create_topic(request).await?;
    Ok(Created(Json(response)))
}

/// Get topic by ID
///
/// GET /topics/{topic_id}
pub async fn get_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<String>,
) -> ApiResult<Json<TopicResponse>> {
    let topic_id = topic_id
        .parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid topic_id format"))?;

    let service = TopicService::new(state.service_context());
    let response = service.get_topic(topic_id).await?;
    Ok(Json(response))
}

/// Update a topic's title or position
///
/// PATCH /topics/{topic_id}
pub async fn update_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateTopicRequest>,
) -> ApiResult<Json<TopicResponse>> {
    let topic_id = topic_id
        .parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid topic_id format"))?;

    let service = TopicService::new(state.service_context());
    let response = service.update_topic(topic_id, request).await?;
    Ok(Json(response))
}

/// Delete a topic
///
/// DELETE /topics/{topic_id}
pub async fn delete_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<String>,
) -> ApiResult<NoContent> {
    let topic_id = topic_id
        .parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid topic_id format"))?;

    let service = TopicService::new(state.service_context());
    service.delete_topic(topic_id).await?;
    Ok(NoContent)
}

/// Apply a full reordering in one shot
///
/// PATCH /topics/positions
pub async fn reorder_topics(
    State(state): State<AppState>,
    JsonBody(positions): JsonBody<Vec<TopicPosition>>,
) -> ApiResult<Json<Vec<TopicResponse>>> {
    let service = TopicService::new(state.service_context());
    let topics = service.reorder_topics(positions).await?;
    Ok(Json(topics))
}
