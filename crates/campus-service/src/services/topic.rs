//! Topic service
//!
//! Handles the pinned agenda headlines shown above the board, including
//! the transactional bulk reorder.

use campus_core::entities::Topic;
use campus_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateTopicRequest, TopicPosition, TopicResponse, UpdateTopicRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Longest accepted topic title, counted in characters after trimming
const MAX_TOPIC_TITLE: usize = 100;

/// Topic service
pub struct TopicService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TopicService<'a> {
    /// Create a new TopicService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new agenda topic
    #[instrument(skip(self, request))]
    pub async fn create_topic(&self, request: CreateTopicRequest) -> ServiceResult<TopicResponse> {
        let title = clean_title(&request.title)?;
        let position = request.position.unwrap_or(0);

        let topic = Topic::new(self.ctx.generate_id(), title, position);
        self.ctx.topic_repo().create(&topic).await?;

        info!(topic_id = %topic.id, position, "Topic created");

        Ok(TopicResponse::from(&topic))
    }

    /// Get one topic
    #[instrument(skip(self))]
    pub async fn get_topic(&self, id: Snowflake) -> ServiceResult<TopicResponse> {
        let topic = self
            .ctx
            .topic_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Topic", id.to_string()))?;

        Ok(TopicResponse::from(topic))
    }

    /// List topics ordered by position, newest first among equals
    #[instrument(skip(self))]
    pub async fn list_topics(&self) -> ServiceResult<Vec<TopicResponse>> {
        let topics = self.ctx.topic_repo().list().await?;
        Ok(topics.iter().map(TopicResponse::from).collect())
    }

    /// Update a topic's title or position
    #[instrument(skip(self, request))]
    pub async fn update_topic(
        &self,
        id: Snowflake,
        request: UpdateTopicRequest,
    ) -> ServiceResult<TopicResponse> {
        let mut topic = self
            .ctx
            .topic_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Topic", id.to_string()))?;

        if let Some(title) = request.title {
            topic.title = clean_title(&title)?;
        }
        if let Some(position) = request.position {
            topic.position = position;
        }

        self.ctx.topic_repo().update(&topic).await?;

        info!(topic_id = %id, "Topic updated");

        Ok(TopicResponse::from(topic))
    }

    /// Delete a topic
    #[instrument(skip(self))]
    pub async fn delete_topic(&self, id: Snowflake) -> ServiceResult<()> {
        self.ctx.topic_repo().delete(id).await?;

        info!(topic_id = %id, "Topic deleted");

        Ok(())
    }

    /// Apply new positions to the listed topics in one atomic unit and
    /// return the reordered list
    #[instrument(skip(self, entries))]
    pub async fn reorder_topics(
        &self,
        entries: Vec<TopicPosition>,
    ) -> ServiceResult<Vec<TopicResponse>> {
        let mut positions = Vec::with_capacity(entries.len());
        for entry in &entries {
            let id = Snowflake::parse(&entry.id)
                .map_err(|_| ServiceError::validation("Invalid topic id in positions"))?;
            positions.push((id, entry.position));
        }

        self.ctx.topic_repo().update_positions(&positions).await?;

        info!(count = positions.len(), "Topics reordered");

        self.list_topics().await
    }
}

fn clean_title(title: &str) -> ServiceResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyField("title").into());
    }
    if trimmed.chars().count() > MAX_TOPIC_TITLE {
        return Err(DomainError::ContentTooLong { max: MAX_TOPIC_TITLE }.into());
    }
    Ok(trimmed.to_string())
}
