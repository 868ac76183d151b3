//! Message service
//!
//! Handles board message creation, listing, and deletion. Listings come
//! back enriched with derived like and comment counts and the viewer's
//! own like flags.

use campus_core::entities::{Message, MessageView};
use campus_core::traits::MessageQuery;
use campus_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{ActorRequest, CreateMessageRequest, MessageResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Longest accepted message body, counted in characters after trimming
const MAX_MESSAGE_BODY: usize = 2000;

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a new message to the board
    #[instrument(skip(self, request))]
    pub async fn create_message(
        &self,
        request: CreateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let author_id = Snowflake::parse(&request.user_id)
            .map_err(|_| ServiceError::validation("Invalid userId"))?;
        let author_name = clean_name(&request.user_name)?;
        let body = clean_body(&request.body)?;

        let message_id = self.ctx.generate_id();
        let message = Message::new(message_id, author_id, author_name, body);

        self.ctx.message_repo().create(&message).await?;

        info!(message_id = %message_id, author_id = %author_id, "Message posted");

        Ok(MessageResponse::from(MessageView::fresh(message)))
    }

    /// Get one message with its engagement numbers
    #[instrument(skip(self))]
    pub async fn get_message(
        &self,
        id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<MessageResponse> {
        let view = self
            .ctx
            .message_repo()
            .find_view(id, viewer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message", id.to_string()))?;

        Ok(MessageResponse::from(view))
    }

    /// List board messages newest first
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        query: MessageQuery,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let views = self.ctx.message_repo().list(query, viewer_id).await?;
        Ok(views.iter().map(MessageResponse::from).collect())
    }

    /// List one author's messages newest first
    #[instrument(skip(self))]
    pub async fn list_author_messages(
        &self,
        author_id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let views = self
            .ctx
            .message_repo()
            .list_by_author(author_id, viewer_id)
            .await?;
        Ok(views.iter().map(MessageResponse::from).collect())
    }

    /// Delete a message, author-only
    ///
    /// The message's comments and every reaction on the message or its
    /// comments go with it, in one atomic unit.
    #[instrument(skip(self, request))]
    pub async fn delete_message(
        &self,
        id: Snowflake,
        request: ActorRequest,
    ) -> ServiceResult<()> {
        let requester_id = Snowflake::parse(&request.user_id)
            .map_err(|_| ServiceError::validation("Invalid userId"))?;

        self.ctx.message_repo().delete(id, requester_id).await?;

        info!(message_id = %id, requester_id = %requester_id, "Message deleted");

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
    if trimmed.chars().count() > MAX_MESSAGE_BODY {
        return Err(DomainError::ContentTooLong {
            max: MAX_MESSAGE_BODY,
        }
        .into());
    }
    Ok(trimmed.to_string())
}
