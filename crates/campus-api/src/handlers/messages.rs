//! Message handlers
//!
//! Endpoints for board message operations.

use axum::{
    extract::{Path, State},
    Json,
};
use campus_service::{ActorRequest, CreateMessageRequest, MessageResponse, MessageService};

use crate::extractors::{Pagination, ValidatedJson, Viewer};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Post a message to the board
///
/// POST /messages
pub async fn create_message(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.create_message(request).await?;
    Ok(Created(Json(response)))
}

/// List board messages newest first
///
/// GET /messages
pub async fn list_messages(
    State(state): State<AppState>,
    viewer: Viewer,
    pagination: Pagination,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let messages = service
        .list_messages(pagination.into_query(), viewer.0)
        .await?;
    Ok(Json(messages))
}

/// Get message by ID
///
/// GET /messages/{message_id}
pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    viewer: Viewer,
) -> ApiResult<Json<MessageResponse>> {
    let message_id = message_id
        .parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid message_id format"))?;

    let service = MessageService::new(state.service_context());
    let response = service.get_message(message_id, viewer.0).await?;
    Ok(Json(response))
}

/// List one author's messages newest first
///
/// GET /users/{user_id}/messages
pub async fn get_user_messages(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    viewer: Viewer,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let user_id = user_id
        .parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid user_id format"))?;

    let service = MessageService::new(state.service_context());
    let messages = service.list_author_messages(user_id, viewer.0).await?;
    Ok(Json(messages))
}

/// Delete a message and its whole engagement trail
///
/// DELETE /messages/{message_id}
pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    ValidatedJson(request): ValidatedJson<ActorRequest>,
) -> ApiResult<NoContent> {
    let message_id = message_id
        .parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid message_id format"))?;

    let service = MessageService::new(state.service_context());
    service.delete_message(message_id, request).await?;
    Ok(NoContent)
}
