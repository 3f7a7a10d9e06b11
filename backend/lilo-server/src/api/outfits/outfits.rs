//! Outfit REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CreateOutfitRequest, CurrentUser, Envelope, ListOutfitsQuery,
    MessageResponse, OutfitDto, UpdateOutfitRequest,
};

use lilo_core::Outfit;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use log::{debug, info};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/outfits
pub async fn list_outfits(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<ListOutfitsQuery>,
) -> ApiResult<Json<Envelope<Vec<OutfitDto>>>> {
    let Ok(filter) = query.into_filter() else {
        debug!("Unparseable outfit flag from user {}, returning no outfits", user.id);
        return Ok(Json(Envelope::data(Vec::new())));
    };

    let outfits = state.outfits.find_by_user(&user.id, &filter)?;

    Ok(Json(Envelope::data(
        outfits.into_iter().map(OutfitDto::from).collect(),
    )))
}

/// POST /api/outfits
pub async fn create_outfit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateOutfitRequest>,
) -> ApiResult<(StatusCode, Json<Envelope<OutfitDto>>)> {
    let mut outfit = Outfit::new(user.id.clone(), req.name.trim().to_string(), req.items);
    outfit.description = req.description;
    outfit.occasion = req.occasion;
    outfit.season = req.season;
    outfit.image_url = req.image_url;
    outfit.is_favorite = req.is_favorite;

    outfit.validate()?;
    ensure_items_owned(&state, &outfit.items, &user.id)?;

    let created = state.outfits.create(outfit)?;
    info!("User {} created outfit {}", user.id, created.id);

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(
            created.into(),
            "Outfit created successfully",
        )),
    ))
}

/// GET /api/outfits/{id}
pub async fn get_outfit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<OutfitDto>>> {
    let outfit = state.outfits.find_owned(&id, &user.id)?;
    Ok(Json(Envelope::data(outfit.into())))
}

/// PUT /api/outfits/{id}
pub async fn update_outfit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateOutfitRequest>,
) -> ApiResult<Json<Envelope<OutfitDto>>> {
    let updated = state.outfits.update(&id, &user.id, |outfit| -> ApiResult<()> {
        if let Some(name) = req.name {
            outfit.name = name.trim().to_string();
        }
        if req.description.is_some() {
            outfit.description = req.description;
        }
        let items_changed = req.items.is_some();
        if let Some(items) = req.items {
            outfit.items = items;
        }
        if let Some(occasion) = req.occasion {
            outfit.occasion = occasion;
        }
        if let Some(season) = req.season {
            outfit.season = season;
        }
        if req.image_url.is_some() {
            outfit.image_url = req.image_url;
        }
        if let Some(is_favorite) = req.is_favorite {
            outfit.is_favorite = is_favorite;
        }

        outfit.validate()?;
        // Holds the outfit lock while reading items; nothing locks the other way round
        if items_changed {
            ensure_items_owned(&state, &outfit.items, &user.id)?;
        }
        Ok(())
    })?;

    Ok(Json(Envelope::with_message(
        updated.into(),
        "Outfit updated successfully",
    )))
}

/// DELETE /api/outfits/{id}
pub async fn delete_outfit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.outfits.delete(&id, &user.id)?;
    info!("User {} deleted outfit {}", user.id, id);

    Ok(Json(MessageResponse::new("Outfit deleted successfully")))
}

/// POST /api/outfits/{id}/favorite
pub async fn favorite_outfit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<OutfitDto>>> {
    let outfit = state.outfits.set_favorite(&id, &user.id, true)?;
    Ok(Json(Envelope::with_message(
        outfit.into(),
        "Outfit added to favorites",
    )))
}

/// DELETE /api/outfits/{id}/favorite
pub async fn unfavorite_outfit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<OutfitDto>>> {
    let outfit = state.outfits.set_favorite(&id, &user.id, false)?;
    Ok(Json(Envelope::with_message(
        outfit.into(),
        "Outfit removed from favorites",
    )))
}

// =============================================================================
// Helpers
// =============================================================================

/// Every referenced item must exist in the caller's own wardrobe
fn ensure_items_owned(state: &AppState, item_ids: &[String], user_id: &str) -> ApiResult<()> {
    for item_id in item_ids {
        match state.clothing_items.find_owned(item_id, user_id) {
            Ok(_) => {}
            Err(e) if e.is_not_found() => {
                return Err(ApiError::validation(
                    format!("Clothing item {} not found in wardrobe", item_id),
                    Some("items"),
                ));
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
