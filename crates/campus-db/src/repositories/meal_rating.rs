//! PostgreSQL implementation of MealRatingRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use campus_core::entities::{MealRating, MealRatingStats};
use campus_core::error::DomainError;
use campus_core::traits::{MealRatingRepository, RepoResult};
use campus_core::value_objects::Snowflake;

use crate::models::{MealRatingModel, MealRatingStatsModel};

use super::error::map_db_error;

/// PostgreSQL implementation of MealRatingRepository
#[derive(Clone)]
pub struct PgMealRatingRepository {
    pool: PgPool,
}

impl PgMealRatingRepository {
    /// Create a new PgMealRatingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MealRatingRepository for PgMealRatingRepository {
    #[instrument(skip(self))]
    async fn rate(&self, rating: &MealRating) -> RepoResult<()> {
        // One verdict per user per day. Re-rating flips the stored value
        // in place rather than stacking a second row.
        sqlx::query(
            r#"
            INSERT INTO meal_ratings (user_id, meal_date, liked, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            ON CONFLICT (user_id, meal_date)
            DO UPDATE SET liked = EXCLUDED.liked, updated_at = NOW()
            "#,
        )
        .bind(rating.user_id.into_inner())
        .bind(rating.meal_date)
        .bind(rating.liked)
        .bind(rating.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, user_id: Snowflake, meal_date: NaiveDate) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM meal_ratings WHERE user_id = $1 AND meal_date = $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(meal_date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MealRatingNotFound { meal_date });
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn stats_for_date(&self, meal_date: NaiveDate) -> RepoResult<MealRatingStats> {
        let result = sqlx::query_as::<_, MealRatingStatsModel>(
            r#"
            SELECT $1::date AS meal_date,
                   COUNT(*) FILTER (WHERE liked) AS like_count,
                   COUNT(*) FILTER (WHERE NOT liked) AS dislike_count
            FROM meal_ratings
            WHERE meal_date = $1
            "#,
        )
        .bind(meal_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(MealRatingStats::from(result))
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> RepoResult<Vec<MealRatingStats>> {
        let results = sqlx::query_as::<_, MealRatingStatsModel>(
            r#"
            SELECT meal_date,
                   COUNT(*) FILTER (WHERE liked) AS like_count,
                   COUNT(*) FILTER (WHERE NOT liked) AS dislike_count
            FROM meal_ratings
            GROUP BY meal_date
            ORDER BY meal_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MealRatingStats::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<MealRating>> {
        let results = sqlx::query_as::<_, MealRatingModel>(
            r#"
            SELECT user_id, meal_date, liked, created_at, updated_at
            FROM meal_ratings
            WHERE user_id = $1
            ORDER BY meal_date DESC
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MealRating::from).collect())
    }

    #[instrument(skip(self))]
    async fn purge_before(&self, cutoff: NaiveDate) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM meal_ratings WHERE meal_date < $1
            "#,
        )
        .bind(cutoff)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
