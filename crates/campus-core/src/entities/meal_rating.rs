//! Meal rating entity - the like/dislike variant of the reaction model
//!
//! Unlike board reactions, a meal rating carries a `liked: bool` payload
//! and is keyed by (user, calendar date) rather than by a target ID.
//! Re-rating overwrites the previous verdict in place.

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::Snowflake;

/// A user's verdict on one day's cafeteria menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealRating {
    pub user_id: Snowflake,
    pub meal_date: NaiveDate,
    pub liked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MealRating {
    /// Create a new MealRating
    pub fn new(user_id: Snowflake, meal_date: NaiveDate, liked: bool) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            meal_date,
            liked,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Aggregate verdict counts for one meal date, derived from the rating set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealRatingStats {
    pub meal_date: NaiveDate,
    pub like_count: i64,
    pub dislike_count: i64,
}

impl MealRatingStats {
    /// Create a new MealRatingStats
    pub fn new(meal_date: NaiveDate, like_count: i64, dislike_count: i64) -> Self {
        Self {
            meal_date,
            like_count,
            dislike_count,
        }
    }

    /// Stats for a date nobody has rated
    pub fn empty(meal_date: NaiveDate) -> Self {
        Self::new(meal_date, 0, 0)
    }

    /// Total number of ratings for the date
    #[inline]
    pub fn total(&self) -> i64 {
        self.like_count + self.dislike_count
    }
}
