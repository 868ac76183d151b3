//! Like toggle handlers
//!
//! One endpoint per target kind; both funnel into the same atomic toggle.

use axum::{
    extract::{Path, State},
    Json,
};
use campus_core::TargetType;
use campus_service::{ActorRequest, EngagementService, ToggleResponse};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Toggle the acting user's like on a message
///
/// POST /messages/{message_id}/like
pub async fn toggle_message_like(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    ValidatedJson(request): ValidatedJson<ActorRequest>,
) -> ApiResult<Json<ToggleResponse>> {
    let message_id = message_id
        .parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid message_id format"))?;

    let service = EngagementService::new(state.service_context());
    let response = service
        .toggle_reaction(message_id, TargetType::Message, request)
        .await?;
    Ok(Json(response))
}

/// Toggle the acting user's like on a comment
///
/// POST /comments/{comment_id}/like
pub async fn toggle_comment_like(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    ValidatedJson(request): ValidatedJson<ActorRequest>,
) -> ApiResult<Json<ToggleResponse>> {
    let comment_id = comment_id
        .parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid comment_id format"))?;

    let service = EngagementService::new(state.service_context());
    let response = service
        .toggle_reaction(comment_id, TargetType::Comment, request)
        .await?;
    Ok(Json(response))
}
