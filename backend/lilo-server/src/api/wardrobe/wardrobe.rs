//! Wardrobe REST API handlers
//!
//! Every handler is scoped to the authenticated user; ids belonging to
//! someone else behave exactly like unknown ids.

use crate::{
    ApiResult, AppState, ClothingItemDto, CreateClothingItemRequest, CurrentUser, Envelope,
    ListClothingItemsQuery, MessageResponse, UpdateClothingItemRequest,
};

use lilo_core::{ClothingCategory, ClothingItem};

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use log::{debug, info};

/// GET /api/wardrobe/items
pub async fn list_clothing_items(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<ListClothingItemsQuery>,
) -> ApiResult<Json<Envelope<Vec<ClothingItemDto>>>> {
    let Ok(filter) = query.into_filter() else {
        debug!("Unparseable isOwned flag from user {}, returning no items", user.id);
        return Ok(Json(Envelope::data(Vec::new())));
    };

    let items = state.clothing_items.find_by_user(&user.id, &filter)?;

    Ok(Json(Envelope::data(
        items.into_iter().map(ClothingItemDto::from).collect(),
    )))
}

/// POST /api/wardrobe/items
pub async fn create_clothing_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateClothingItemRequest>,
) -> ApiResult<(StatusCode, Json<Envelope<ClothingItemDto>>)> {
    let mut item = ClothingItem::new(
        user.id.clone(),
        req.name.trim().to_string(),
        req.category.trim().to_string(),
        req.color.trim().to_string(),
    );
    item.subcategory = req.subcategory;
    item.season = req.season;
    item.brand = req.brand;
    item.size = req.size;
    item.image_urls = req.image_urls;
    item.is_owned = req.is_owned.unwrap_or(true);

    item.validate()?;

    let created = state.clothing_items.create(item)?;
    info!("User {} added clothing item {}", user.id, created.id);

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(
            created.into(),
            "Clothing item created successfully",
        )),
    ))
}

/// GET /api/wardrobe/items/{id}
pub async fn get_clothing_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<ClothingItemDto>>> {
    let item = state.clothing_items.find_owned(&id, &user.id)?;
    Ok(Json(Envelope::data(item.into())))
}

/// PUT /api/wardrobe/items/{id}
pub async fn update_clothing_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateClothingItemRequest>,
) -> ApiResult<Json<Envelope<ClothingItemDto>>> {
    // Merge against the stored item under its lock; a failed validation
    // leaves it untouched
    let updated = state.clothing_items.update(&id, &user.id, |item| -> ApiResult<()> {
        if let Some(name) = req.name {
            item.name = name.trim().to_string();
        }
        if let Some(category) = req.category {
            item.category = category.trim().to_string();
        }
        if let Some(subcategory) = req.subcategory {
            item.subcategory = subcategory;
        }
        if let Some(color) = req.color {
            item.color = color.trim().to_string();
        }
        if let Some(season) = req.season {
            item.season = season;
        }
        if req.brand.is_some() {
            item.brand = req.brand;
        }
        if req.size.is_some() {
            item.size = req.size;
        }
        if let Some(image_urls) = req.image_urls {
            item.image_urls = image_urls;
        }
        if let Some(is_owned) = req.is_owned {
            item.is_owned = is_owned;
        }

        item.validate()?;
        Ok(())
    })?;

    Ok(Json(Envelope::with_message(
        updated.into(),
        "Clothing item updated successfully",
    )))
}

/// DELETE /api/wardrobe/items/{id}
pub async fn delete_clothing_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.clothing_items.delete(&id, &user.id)?;
    info!("User {} deleted clothing item {}", user.id, id);

    Ok(Json(MessageResponse::new("Clothing item deleted successfully")))
}

/// GET /api/wardrobe/categories
pub async fn list_categories(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> Json<Envelope<Vec<ClothingCategory>>> {
    Json(Envelope::data(state.clothing_items.categories()))
}
