//! PostgreSQL implementation of TopicRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use campus_core::entities::Topic;
use campus_core::error::DomainError;
use campus_core::traits::{RepoResult, TopicRepository};
use campus_core::value_objects::Snowflake;

use crate::models::TopicModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TopicRepository
#[derive(Clone)]
pub struct PgTopicRepository {
    pool: PgPool,
}

impl PgTopicRepository {
    /// Create a new PgTopicRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicRepository for PgTopicRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Topic>> {
        let result = sqlx::query_as::<_, TopicModel>(
            r#"
            SELECT id, title, position, created_at
            FROM topics
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Topic::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Topic>> {
        let results = sqlx::query_as::<_, TopicModel>(
            r#"
            SELECT id, title, position, created_at
            FROM topics
            ORDER BY position ASC, created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Topic::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, topic: &Topic) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO topics (id, title, position, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(topic.id.into_inner())
        .bind(&topic.title)
        .bind(topic.position)
        .bind(topic.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, topic: &Topic) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE topics
            SET title = $2, position = $3
            WHERE id = $1
            "#,
        )
        .bind(topic.id.into_inner())
        .bind(&topic.title)
        .bind(topic.position)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TopicNotFound(topic.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM topics WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TopicNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_positions(&self, positions: &[(Snowflake, i32)]) -> RepoResult<()> {
        // Use a transaction for bulk position update
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for (topic_id, position) in positions {
            sqlx::query(
                r#"
                UPDATE topics SET position = $2 WHERE id = $1
                "#,
            )
            .bind(topic_id.into_inner())
            .bind(position)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
