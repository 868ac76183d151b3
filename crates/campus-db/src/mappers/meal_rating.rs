//! Meal rating model -> entity mappers

use campus_core::entities::{MealRating, MealRatingStats};
use campus_core::value_objects::Snowflake;

use crate::models::{MealRatingModel, MealRatingStatsModel};

/// Convert MealRatingModel to MealRating entity
impl From<MealRatingModel> for MealRating {
    fn from(model: MealRatingModel) -> Self {
        MealRating {
            user_id: Snowflake::new(model.user_id),
            meal_date: model.meal_date,
            liked: model.liked,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert MealRatingStatsModel to MealRatingStats entity
impl From<MealRatingStatsModel> for MealRatingStats {
    fn from(model: MealRatingStatsModel) -> Self {
        MealRatingStats {
            meal_date: model.meal_date,
            like_count: model.like_count,
            dislike_count: model.dislike_count,
        }
    }
}
