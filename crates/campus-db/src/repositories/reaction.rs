//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use campus_core::entities::{Reaction, ReactionState, TargetType};
use campus_core::error::DomainError;
use campus_core::traits::{ReactionRepository, RepoResult};
use campus_core::value_objects::Snowflake;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn exists(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        target_type: TargetType,
    ) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM reactions
                WHERE user_id = $1 AND target_id = $2 AND target_type = $3
            )
            "#,
        )
        .bind(user_id.into_inner())
        .bind(target_id.into_inner())
        .bind(target_type.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn add(&self, reaction: &Reaction) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reactions (user_id, target_id, target_type, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(reaction.user_id.into_inner())
        .bind(reaction.target_id.into_inner())
        .bind(reaction.target_type.as_str())
        .bind(reaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ReactionAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        target_type: TargetType,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM reactions
            WHERE user_id = $1 AND target_id = $2 AND target_type = $3
            "#,
        )
        .bind(user_id.into_inner())
        .bind(target_id.into_inner())
        .bind(target_type.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ReactionNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self, target_id: Snowflake, target_type: TargetType) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM reactions WHERE target_id = $1 AND target_type = $2
            "#,
        )
        .bind(target_id.into_inner())
        .bind(target_type.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn toggle(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        target_type: TargetType,
    ) -> RepoResult<ReactionState> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Serialize concurrent toggles of the same (user, target, type) key
        // across all server instances. The transaction-scoped advisory lock
        // is released on commit or rollback.
        let lock_key = format!(
            "reaction:{}:{}:{}",
            user_id,
            target_id,
            target_type.as_str()
        );
        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
            .bind(&lock_key)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let removed = sqlx::query(
            r#"
            DELETE FROM reactions
            WHERE user_id = $1 AND target_id = $2 AND target_type = $3
            "#,
        )
        .bind(user_id.into_inner())
        .bind(target_id.into_inner())
        .bind(target_type.as_str())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        let active = if removed == 0 {
            sqlx::query(
                r#"
                INSERT INTO reactions (user_id, target_id, target_type, created_at)
                VALUES ($1, $2, $3, NOW())
                ON CONFLICT (user_id, target_id, target_type) DO NOTHING
                "#,
            )
            .bind(user_id.into_inner())
            .bind(target_id.into_inner())
            .bind(target_type.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            true
        } else {
            false
        };

        // Count inside the same transaction so the reported total matches
        // the row this toggle just wrote or removed.
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM reactions WHERE target_id = $1 AND target_type = $2
            "#,
        )
        .bind(target_id.into_inner())
        .bind(target_type.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(ReactionState::new(active, count))
    }

    #[instrument(skip(self))]
    async fn delete_for_target(
        &self,
        target_id: Snowflake,
        target_type: TargetType,
    ) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM reactions WHERE target_id = $1 AND target_type = $2
            "#,
        )
        .bind(target_id.into_inner())
        .bind(target_type.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
