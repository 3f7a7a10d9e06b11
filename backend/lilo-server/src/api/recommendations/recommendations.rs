//! Recommendation REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CurrentUser, DailyRecommendationDto, Envelope, FeedbackRequest,
    ListOutfitsQuery, OutfitDto, RecommendationDto,
};

use lilo_core::{Feedback, Outfit, Recommendation};
use lilo_store::OutfitFilter;

use std::str::FromStr;

use axum::{
    Json,
    extract::{Query, State},
};
use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;

/// Maximum number of outfits suggested per day
pub const DAILY_RECOMMENDATION_COUNT: usize = 3;

const DAILY_REASON: &str = "Picked from your outfits for today";

/// GET /api/recommendations/daily
///
/// Picks up to [`DAILY_RECOMMENDATION_COUNT`] of the caller's outfits, marks
/// each one recommended and records a recommendation for feedback.
pub async fn daily_recommendations(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Envelope<Vec<DailyRecommendationDto>>>> {
    let outfits = state.outfits.find_by_user(&user.id, &OutfitFilter::default())?;

    let picks = {
        let mut rng = state.rng.lock();
        pick_daily(outfits, &mut *rng)
    };

    let recommendations = record_daily_picks(&state, &user.id, picks)?;

    info!(
        "Recommended {} outfits to user {}",
        recommendations.len(),
        user.id
    );

    Ok(Json(Envelope::data(recommendations)))
}

/// GET /api/recommendations/explore
pub async fn explore_recommendations(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<ListOutfitsQuery>,
) -> ApiResult<Json<Envelope<Vec<OutfitDto>>>> {
    let Ok(filter) = query.into_filter() else {
        debug!("Unparseable explore flag from user {}, returning no outfits", user.id);
        return Ok(Json(Envelope::data(Vec::new())));
    };

    let outfits = state.outfits.find_by_user(&user.id, &filter)?;

    Ok(Json(Envelope::data(
        outfits.into_iter().map(OutfitDto::from).collect(),
    )))
}

/// POST /api/recommendations/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<FeedbackRequest>,
) -> ApiResult<Json<Envelope<RecommendationDto>>> {
    let recommendation_id = req.recommendation_id.trim();
    if recommendation_id.is_empty() {
        return Err(ApiError::validation(
            "recommendationId is required",
            Some("recommendationId"),
        ));
    }

    let feedback = Feedback::from_str(req.feedback.trim())?;
    let updated = state
        .recommendations
        .set_feedback(recommendation_id, &user.id, feedback)?;

    info!(
        "User {} rated recommendation {} as {}",
        user.id, updated.id, feedback
    );

    Ok(Json(Envelope::with_message(
        updated.into(),
        "Feedback submitted successfully",
    )))
}

/// GET /api/recommendations
///
/// Recommendation history, oldest first
pub async fn list_recommendations(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Envelope<Vec<RecommendationDto>>>> {
    let mut recommendations = state.recommendations.find_by_user(&user.id)?;
    recommendations.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

    Ok(Json(Envelope::data(
        recommendations
            .into_iter()
            .map(RecommendationDto::from)
            .collect(),
    )))
}

/// Mark each pick recommended and store a recommendation for it. Picks
/// deleted since they were listed are skipped, never recorded.
pub fn record_daily_picks(
    state: &AppState,
    user_id: &str,
    picks: Vec<Outfit>,
) -> ApiResult<Vec<DailyRecommendationDto>> {
    let mut recommendations = Vec::with_capacity(picks.len());
    for pick in picks {
        let outfit = match state.outfits.mark_recommended(&pick.id, user_id) {
            Ok(outfit) => outfit,
            Err(e) if e.is_not_found() => {
                debug!("Outfit {} vanished before it could be recommended", pick.id);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let recommendation = state.recommendations.create(Recommendation::new(
            user_id.to_string(),
            outfit.id.clone(),
            Some(DAILY_REASON.to_string()),
        ))?;

        recommendations.push(DailyRecommendationDto {
            recommendation_id: recommendation.id,
            outfit: outfit.into(),
        });
    }
    Ok(recommendations)
}

/// Choose today's outfits. The input is put in a stable order first so the
/// result depends only on the outfits and the random source.
pub fn pick_daily<R: Rng + ?Sized>(mut outfits: Vec<Outfit>, rng: &mut R) -> Vec<Outfit> {
    outfits.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
    outfits.shuffle(rng);
    outfits.truncate(DAILY_RECOMMENDATION_COUNT);
    outfits
}
