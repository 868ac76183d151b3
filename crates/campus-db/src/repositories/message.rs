//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use campus_core::entities::{Message, MessageView};
use campus_core::error::DomainError;
use campus_core::traits::{MessageQuery, MessageRepository, RepoResult};
use campus_core::value_objects::Snowflake;

use crate::models::MessageViewModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
///
/// Listing queries compute the derived counts (`like_count`,
/// `comment_count`) and the viewer probe in SQL, so a view is always
/// consistent with the reaction rows at read time.
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn exists(&self, id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM messages WHERE id = $1)
            "#,
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn find_view(
        &self,
        id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> RepoResult<Option<MessageView>> {
        let result = sqlx::query_as::<_, MessageViewModel>(
            r#"
            SELECT m.id, m.author_id, m.author_name, m.body, m.created_at,
                   (SELECT COUNT(*) FROM reactions r
                     WHERE r.target_id = m.id AND r.target_type = 'message') AS like_count,
                   (SELECT COUNT(*) FROM comments c
                     WHERE c.message_id = m.id) AS comment_count,
                   EXISTS(SELECT 1 FROM reactions r
                     WHERE r.target_id = m.id AND r.target_type = 'message'
                       AND r.user_id = $2) AS viewer_has_liked
            FROM messages m
            WHERE m.id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(viewer_id.map(Snowflake::into_inner))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(MessageView::from))
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        query: MessageQuery,
        viewer_id: Option<Snowflake>,
    ) -> RepoResult<Vec<MessageView>> {
        let limit = query.limit.clamp(1, 100);
        let viewer = viewer_id.map(Snowflake::into_inner);

        let results = match (query.before, query.after) {
            (Some(before), None) => {
                // Fetch messages before cursor (scrolling down the board)
                sqlx::query_as::<_, MessageViewModel>(
                    r#"
                    SELECT m.id, m.author_id, m.author_name, m.body, m.created_at,
                           (SELECT COUNT(*) FROM reactions r
                             WHERE r.target_id = m.id AND r.target_type = 'message') AS like_count,
                           (SELECT COUNT(*) FROM comments c
                             WHERE c.message_id = m.id) AS comment_count,
                           EXISTS(SELECT 1 FROM reactions r
                             WHERE r.target_id = m.id AND r.target_type = 'message'
                               AND r.user_id = $1) AS viewer_has_liked
                    FROM messages m
                    WHERE m.id < $2
                    ORDER BY m.id DESC
                    LIMIT $3
                    "#,
                )
                .bind(viewer)
                .bind(before.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            (None, Some(after)) => {
                // Fetch messages after cursor (catching up on newer posts)
                sqlx::query_as::<_, MessageViewModel>(
                    r#"
                    SELECT m.id, m.author_id, m.author_name, m.body, m.created_at,
                           (SELECT COUNT(*) FROM reactions r
                             WHERE r.target_id = m.id AND r.target_type = 'message') AS like_count,
                           (SELECT COUNT(*) FROM comments c
                             WHERE c.message_id = m.id) AS comment_count,
                           EXISTS(SELECT 1 FROM reactions r
                             WHERE r.target_id = m.id AND r.target_type = 'message'
                               AND r.user_id = $1) AS viewer_has_liked
                    FROM messages m
                    WHERE m.id > $2
                    ORDER BY m.id ASC
                    LIMIT $3
                    "#,
                )
                .bind(viewer)
                .bind(after.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            _ => {
                // Fetch latest messages (no cursor)
                sqlx::query_as::<_, MessageViewModel>(
                    r#"
                    SELECT m.id, m.author_id, m.author_name, m.body, m.created_at,
                           (SELECT COUNT(*) FROM reactions r
                             WHERE r.target_id = m.id AND r.target_type = 'message') AS like_count,
                           (SELECT COUNT(*) FROM comments c
                             WHERE c.message_id = m.id) AS comment_count,
                           EXISTS(SELECT 1 FROM reactions r
                             WHERE r.target_id = m.id AND r.target_type = 'message'
                               AND r.user_id = $1) AS viewer_has_liked
                    FROM messages m
                    ORDER BY m.id DESC
                    LIMIT $2
                    "#,
                )
                .bind(viewer)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MessageView::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_author(
        &self,
        author_id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> RepoResult<Vec<MessageView>> {
        let results = sqlx::query_as::<_, MessageViewModel>(
            r#"
            SELECT m.id, m.author_id, m.author_name, m.body, m.created_at,
                   (SELECT COUNT(*) FROM reactions r
                     WHERE r.target_id = m.id AND r.target_type = 'message') AS like_count,
                   (SELECT COUNT(*) FROM comments c
                     WHERE c.message_id = m.id) AS comment_count,
                   EXISTS(SELECT 1 FROM reactions r
                     WHERE r.target_id = m.id AND r.target_type = 'message'
                       AND r.user_id = $1) AS viewer_has_liked
            FROM messages m
            WHERE m.author_id = $2
            ORDER BY m.created_at DESC, m.id DESC
            "#,
        )
        .bind(viewer_id.map(Snowflake::into_inner))
        .bind(author_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MessageView::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, author_id, author_name, body, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(message.id.into_inner())
        .bind(message.author_id.into_inner())
        .bind(&message.author_name)
        .bind(&message.body)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake, requester_id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let author_id = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT author_id FROM messages WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(author_id) = author_id else {
            return Err(DomainError::MessageNotFound(id));
        };
        if author_id != requester_id.into_inner() {
            return Err(DomainError::NotMessageAuthor);
        }

        // Purge the reaction ledger for the message and for every comment
        // under it. The comments themselves go with the message via the
        // ON DELETE CASCADE foreign key.
        sqlx::query(
            r#"
            DELETE FROM reactions
            WHERE target_type = 'comment'
              AND target_id IN (SELECT id FROM comments WHERE message_id = $1)
            "#,
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r#"
            DELETE FROM reactions WHERE target_type = 'message' AND target_id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r#"
            DELETE FROM messages WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
