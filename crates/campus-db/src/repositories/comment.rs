//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use campus_core::entities::{Comment, CommentView};
use campus_core::error::DomainError;
use campus_core::traits::{CommentRepository, RepoResult};
use campus_core::value_objects::Snowflake;

use crate::models::CommentViewModel;

use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn exists(&self, id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1)
            "#,
        )
        .bind(id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        let message_id = comment.message_id;

        sqlx::query(
            r#"
            INSERT INTO comments (id, message_id, author_id, author_name, body, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(comment.id.into_inner())
        .bind(comment.message_id.into_inner())
        .bind(comment.author_id.into_inner())
        .bind(&comment.author_name)
        .bind(&comment.body)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::ParentMessageMissing(message_id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_by_message(
        &self,
        message_id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> RepoResult<Vec<CommentView>> {
        let results = sqlx::query_as::<_, CommentViewModel>(
            r#"
            SELECT c.id, c.message_id, c.author_id, c.author_name, c.body, c.created_at,
                   (SELECT COUNT(*) FROM reactions r
                     WHERE r.target_id = c.id AND r.target_type = 'comment') AS like_count,
                   EXISTS(SELECT 1 FROM reactions r
                     WHERE r.target_id = c.id AND r.target_type = 'comment'
                       AND r.user_id = $1) AS viewer_has_liked
            FROM comments c
            WHERE c.message_id = $2
            ORDER BY c.created_at DESC, c.id DESC
            "#,
        )
        .bind(viewer_id.map(Snowflake::into_inner))
        .bind(message_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CommentView::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake, requester_id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let author_id = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT author_id FROM comments WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(author_id) = author_id else {
            return Err(DomainError::CommentNotFound(id));
        };
        if author_id != requester_id.into_inner() {
            return Err(DomainError::NotCommentAuthor);
        }

        // Purge the comment's reaction rows in the same transaction so no
        // orphaned likes survive the delete.
        sqlx::query(
            r#"
            DELETE FROM reactions WHERE target_type = 'comment' AND target_id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r#"
            DELETE FROM comments WHERE id = $1
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
