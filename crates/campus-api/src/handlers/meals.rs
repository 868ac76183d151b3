//! Meal rating handlers
//!
//! Endpoints for daily cafeteria menu verdicts.

use axum::{
    extract::{Path, State},
    Json,
};
use campus_service::{
    ActorRequest, MealRatingResponse, MealRatingStatsResponse, MealRatingService, PurgeResponse,
    RateMealRequest,
};
use chrono::NaiveDate;

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Record or overwrite the acting user's verdict for a date
///
/// PUT /meals/{date}/rating
pub async fn rate_meal(
    State(state): State<AppState>,
    Path(date): Path<String>,
    ValidatedJson(request): ValidatedJson<RateMealRequest>,
) -> ApiResult<Json<MealRatingStatsResponse>> {
    let meal_date = parse_meal_date(&date)?;

    let service = MealRatingService::new(state.service_context());
    let response = service.rate_meal(meal_date, request).await?;
    Ok(Json(response))
}

/// Withdraw the acting user's verdict for a date
///
/// DELETE /meals/{date}/rating
pub async fn remove_rating(
    State(state): State<AppState>,
    Path(date): Path<String>,
    ValidatedJson(request): ValidatedJson<ActorRequest>,
) -> ApiResult<Json<MealRatingStatsResponse>> {
    let meal_date = parse_meal_date(&date)?;

    let service = MealRatingService::new(state.service_context());
    let response = service.remove_rating(meal_date, request).await?;
    Ok(Json(response))
}

/// Aggregate verdicts for every rated date, newest first
///
/// GET /meals/ratings
pub async fn list_stats(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<MealRatingStatsResponse>>> {
    let service = MealRatingService::new(state.service_context());
    let stats = service.list_stats().await?;
    Ok(Json(stats))
}

/// All of one user's verdicts, newest date first
///
/// GET /users/{user_id}/meal-ratings
pub async fn get_user_ratings(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<MealRatingResponse>>> {
    let user_id = user_id
        .parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid user_id format"))?;

    let service = MealRatingService::new(state.service_context());
    let ratings = service.user_ratings(user_id).await?;
    Ok(Json(ratings))
}

/// Purge ratings for dates before today
///
/// DELETE /meals/ratings/history
pub async fn purge_history(State(state): State<AppState>) -> ApiResult<Json<PurgeResponse>> {
    let service = MealRatingService::new(state.service_context());
    let response = service.purge_history().await?;
    Ok(Json(response))
}

fn parse_meal_date(raw: &str) -> Result<NaiveDate, crate::response::ApiError> {
    raw.parse().map_err(|_| {
        crate::response::ApiError::invalid_path("Invalid date format, expected YYYY-MM-DD")
    })
}
