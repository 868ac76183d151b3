//! Meal rating database models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for meal_ratings table
#[derive(Debug, Clone, FromRow)]
pub struct MealRatingModel {
    pub user_id: i64,
    pub meal_date: NaiveDate,
    pub liked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregated per-day rating counts (from query)
#[derive(Debug, Clone, FromRow)]
pub struct MealRatingStatsModel {
    pub meal_date: NaiveDate,
    pub like_count: i64,
    pub dislike_count: i64,
}
