use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::wishlist::{AddToWishlistRequest, WishlistList},
    entity::wishlist_items::{ActiveModel, Column, Entity as WishlistItems, Model as WishlistModel},
    error::{AppError, AppResult},
    models::WishlistItem,
    response::{ApiResponse, Meta},
    services::product_service::find_product,
    state::AppState,
};

pub async fn list_wishlist(
    state: &AppState,
    user_id: &str,
) -> AppResult<ApiResponse<WishlistList>> {
    let items = WishlistItems::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_desc(Column::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(wishlist_item_from_entity)
        .collect();

    Ok(ApiResponse::success("Wishlist", WishlistList { items }, None))
}

/// Adding a product that is already on the list returns the stored row.
pub async fn add_to_wishlist(
    state: &AppState,
    payload: AddToWishlistRequest,
) -> AppResult<ApiResponse<WishlistItem>> {
    let product = find_product(state, payload.product_id).await?;

    let existing = WishlistItems::find()
        .filter(Column::UserId.eq(payload.user_id.as_str()))
        .filter(Column::ProductId.eq(product.id))
        .one(&state.orm)
        .await?;

    if let Some(item) = existing {
        return Ok(ApiResponse::success(
            "Already in wishlist",
            wishlist_item_from_entity(item),
            Some(Meta::empty()),
        ));
    }

    let item = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(payload.user_id),
        product_id: Set(product.id),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Added to wishlist",
        wishlist_item_from_entity(item),
        Some(Meta::empty()),
    ))
}

pub async fn remove_from_wishlist(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = WishlistItems::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Wishlist item"));
    }

    Ok(ApiResponse::success(
        "Item removed from wishlist",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn wishlist_item_from_entity(model: WishlistModel) -> WishlistItem {
    WishlistItem {
        id: model.id,
        product_id: model.product_id,
        user_id: model.user_id,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
