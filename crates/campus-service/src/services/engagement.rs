//! Engagement service
//!
//! The façade over the reaction and comment stores: like toggles with
//! always-consistent derived counts, and per-message comment threads.

use campus_core::entities::{Comment, CommentView, TargetType};
use campus_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{ActorRequest, CommentResponse, CreateCommentRequest, ToggleResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Longest accepted comment body, counted in characters after trimming
const MAX_COMMENT_BODY: usize = 1000;

/// Engagement service
pub struct EngagementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EngagementService<'a> {
    /// Create a new EngagementService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Flip the acting user's reaction on a message or comment
    ///
    /// Returns the post-toggle state: whether the user's reaction is now
    /// present, and the live count for the target.
    #[instrument(skip(self, request))]
    pub async fn toggle_reaction(
        &self,
        target_id: Snowflake,
        target_type: TargetType,
        request: ActorRequest,
    ) -> ServiceResult<ToggleResponse> {
        let user_id = Snowflake::parse(&request.user_id)
            .map_err(|_| ServiceError::validation("Invalid userId"))?;

        // Reject toggles on targets that do not exist
        let (known, resource) = match target_type {
            TargetType::Message => (self.ctx.message_repo().exists(target_id).await?, "Message"),
            TargetType::Comment => (self.ctx.comment_repo().exists(target_id).await?, "Comment"),
        };
        if !known {
            return Err(ServiceError::not_found(resource, target_id.to_string()));
        }

        let state = self
            .ctx
            .reaction_repo()
            .toggle(user_id, target_id, target_type)
            .await?;

        info!(
            user_id = %user_id,
            target_id = %target_id,
            target_type = %target_type,
            active = state.active,
            count = state.count,
            "Reaction toggled"
        );

        Ok(ToggleResponse::from(state))
    }

    /// List a message's comments newest first, with like counts and the
    /// viewer's own like flags
    #[instrument(skip(self))]
    pub async fn list_comments(
        &self,
        message_id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<Vec<CommentResponse>> {
        if !self.ctx.message_repo().exists(message_id).await? {
            return Err(ServiceError::not_found("Message", message_id.to_string()));
        }

        let comments = self
            .ctx
            .comment_repo()
            .list_by_message(message_id, viewer_id)
            .await?;

        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Add a comment to a message's thread
    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        message_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let author_id = Snowflake::parse(&request.user_id)
            .map_err(|_| ServiceError::validation("Invalid userId"))?;
        let author_name = clean_name(&request.user_name)?;
        let body = clean_body(&request.body)?;

        let comment_id = self.ctx.generate_id();
        let comment = Comment::new(comment_id, message_id, author_id, author_name, body);

        // A missing parent message surfaces as a validation error from the store
        self.ctx.comment_repo().create(&comment).await?;

        info!(
            comment_id = %comment_id,
            message_id = %message_id,
            author_id = %author_id,
            "Comment added"
        );

        Ok(CommentResponse::from(CommentView::fresh(comment)))
    }

    /// Delete a comment, author-only; its reaction rows go with it
    #[instrument(skip(self, request))]
    pub async fn delete_comment(
        &self,
        comment_id: Snowflake,
        request: ActorRequest,
    ) -> ServiceResult<()> {
        let requester_id = Snowflake::parse(&request.user_id)
            .map_err(|_| ServiceError::validation("Invalid userId"))?;

        self.ctx.comment_repo().delete(comment_id, requester_id).await?;

        info!(comment_id = %comment_id, requester_id = %requester_id, "Comment deleted");

        Ok(())
    }
}

fn clean_name(name: &str) -> ServiceResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyField("author_name").into());
    }
    Ok(trimmed.to_string())
}

fn clean_body(body: &str) -> ServiceResult<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyField("body").into());
    }
    if trimmed.chars().count() > MAX_COMMENT_BODY {
        return Err(DomainError::ContentTooLong {
            max: MAX_COMMENT_BODY,
        }
        .into());
    }
    Ok(trimmed.to_string())
}
