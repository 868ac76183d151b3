//! Comment handlers
//!
//! Endpoints for message comment threads.

use axum::{
    extract::{Path, State},
    Json,
};
use campus_core::Snowflake;
use campus_service::{ActorRequest, CommentResponse, CreateCommentRequest, EngagementService};

use crate::extractors::{ValidatedJson, Viewer};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List a message's comments newest first
///
/// GET /messages/{message_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    viewer: Viewer,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let message_id = message_id
        .parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid message_id format"))?;

    let service = EngagementService::new(state.service_context());
    let comments = service.list_comments(message_id, viewer.0).await?;
    Ok(Json(comments))
}

/// Add a comment to a message
///
/// POST /messages/{message_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let message_id = message_id
        .parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid message_id format"))?;

    let service = EngagementService::new(state.service_context());
    let response = service.add_comment(message_id, request).await?;
    Ok(Created(Json(response)))
}

/// Delete a comment (author only)
///
/// DELETE /messages/{message_id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    Path((message_id, comment_id)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<ActorRequest>,
) -> ApiResult<NoContent> {
    // Comments are keyed globally, the parent segment is only checked for shape
    message_id
        .parse::<Snowflake>()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid message_id format"))?;
    let comment_id = comment_id
        .parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid comment_id format"))?;

    let service = EngagementService::new(state.service_context());
    service.delete_comment(comment_id, request).await?;
    Ok(NoContent)
}
