//! Meal rating service
//!
//! The like/dislike variant of the reaction model: one verdict per user
//! per calendar date, re-rating overwrites in place, aggregates are
//! derived from the rating set at read time.

use campus_core::entities::MealRating;
use campus_core::Snowflake;
use chrono::{NaiveDate, Utc};
use tracing::{info, instrument};

use crate::dto::{
    ActorRequest, MealRatingResponse, MealRatingStatsResponse, PurgeResponse, RateMealRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Meal rating service
pub struct MealRatingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MealRatingService<'a> {
    /// Create a new MealRatingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record or overwrite the acting user's verdict for a date
    ///
    /// Returns the date's aggregate counts after the upsert.
    #[instrument(skip(self, request))]
    pub async fn rate_meal(
        &self,
        meal_date: NaiveDate,
        request: RateMealRequest,
    ) -> ServiceResult<MealRatingStatsResponse> {
        let user_id = Snowflake::parse(&request.user_id)
            .map_err(|_| ServiceError::validation("Invalid userId"))?;

        let rating = MealRating::new(user_id, meal_date, request.liked);
        self.ctx.meal_rating_repo().rate(&rating).await?;

        info!(
            user_id = %user_id,
            meal_date = %meal_date,
            liked = request.liked,
            "Meal rated"
        );

        let stats = self.ctx.meal_rating_repo().stats_for_date(meal_date).await?;
        Ok(MealRatingStatsResponse::from(stats))
    }

    /// Withdraw the acting user's verdict for a date
    ///
    /// Returns the date's aggregate counts after the removal.
    #[instrument(skip(self, request))]
    pub async fn remove_rating(
        &self,
        meal_date: NaiveDate,
        request: ActorRequest,
    ) -> ServiceResult<MealRatingStatsResponse> {
        let user_id = Snowflake::parse(&request.user_id)
            .map_err(|_| ServiceError::validation("Invalid userId"))?;

        self.ctx.meal_rating_repo().remove(user_id, meal_date).await?;

        info!(user_id = %user_id, meal_date = %meal_date, "Meal rating withdrawn");

        let stats = self.ctx.meal_rating_repo().stats_for_date(meal_date).await?;
        Ok(MealRatingStatsResponse::from(stats))
    }

    /// Aggregate counts for every rated date, newest date first
    #[instrument(skip(self))]
    pub async fn list_stats(&self) -> ServiceResult<Vec<MealRatingStatsResponse>> {
        let stats = self.ctx.meal_rating_repo().stats().await?;
        Ok(stats.into_iter().map(MealRatingStatsResponse::from).collect())
    }

    /// All of one user's verdicts, newest date first
    #[instrument(skip(self))]
    pub async fn user_ratings(&self, user_id: Snowflake) -> ServiceResult<Vec<MealRatingResponse>> {
        let ratings = self.ctx.meal_rating_repo().find_by_user(user_id).await?;
        Ok(ratings.iter().map(MealRatingResponse::from).collect())
    }

    /// Purge ratings for dates strictly before today
    #[instrument(skip(self))]
    pub async fn purge_history(&self) -> ServiceResult<PurgeResponse> {
        let cutoff = Utc::now().date_naive();
        let purged = self.ctx.meal_rating_repo().purge_before(cutoff).await?;

        info!(cutoff = %cutoff, purged, "Meal rating history purged");

        Ok(PurgeResponse { purged })
    }
}
