//! Reflection REST API handlers

use crate::{ApiResult, AppState, CreateReflectionRequest, CurrentUser, Envelope, ReflectionDto};

use lilo_core::Reflection;

use axum::{Json, extract::State, http::StatusCode};
use log::info;

/// GET /api/reflections
pub async fn list_reflections(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Envelope<Vec<ReflectionDto>>>> {
    let reflections = state.reflections.find_by_user(&user.id)?;

    Ok(Json(Envelope::data(
        reflections.into_iter().map(ReflectionDto::from).collect(),
    )))
}

/// POST /api/reflections
///
/// The outfit must belong to the caller; anyone else's outfit is a 404.
pub async fn create_reflection(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateReflectionRequest>,
) -> ApiResult<(StatusCode, Json<Envelope<ReflectionDto>>)> {
    let mut reflection = Reflection::new(
        user.id.clone(),
        req.outfit_id.trim().to_string(),
        req.confidence,
        req.comfort,
    );
    if let Some(date) = req.date {
        reflection.date = date;
    }
    reflection.would_rewear = req.would_rewear;
    reflection.notes = req.notes;

    reflection.validate()?;
    state.outfits.find_owned(&reflection.outfit_id, &user.id)?;

    let created = state.reflections.create(reflection)?;
    info!(
        "User {} reflected on outfit {}",
        user.id, created.outfit_id
    );

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(
            created.into(),
            "Reflection submitted successfully",
        )),
    ))
}
