use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::{
        cms::CreatedResponse,
        menu::{CreateMenuItemRequest, MenuItemList, UpdateMenuItemRequest},
    },
    entity::menu_items::{ActiveModel, Column, Entity as MenuItems, Model as MenuItemModel},
    error::{AppError, AppResult},
    models::MenuItem,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_active(state: &AppState) -> AppResult<ApiResponse<MenuItemList>> {
    let items = MenuItems::find()
        .filter(Column::IsActive.eq(true))
        .order_by_asc(Column::SortOrder)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(menu_item_from_entity)
        .collect();
    Ok(ApiResponse::success("Menu items", MenuItemList { items }, None))
}

pub async fn create_item(
    state: &AppState,
    payload: CreateMenuItemRequest,
) -> AppResult<ApiResponse<CreatedResponse>> {
    if let Some(parent_id) = payload.parent_id {
        MenuItems::find_by_id(parent_id)
            .one(&state.orm)
            .await?
            .ok_or(AppError::NotFound("Parent menu item"))?;
    }

    let item = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(payload.title),
        url: Set(payload.url),
        icon: Set(payload.icon),
        sort_order: Set(payload.order),
        is_active: Set(payload.is_active),
        parent_id: Set(payload.parent_id),
        updated_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Menu item created successfully",
        CreatedResponse { id: item.id },
        Some(Meta::empty()),
    ))
}

pub async fn update_item(
    state: &AppState,
    id: Uuid,
    payload: UpdateMenuItemRequest,
) -> AppResult<ApiResponse<MenuItem>> {
    let existing = MenuItems::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Menu item"))?;

    let mut active: ActiveModel = existing.into();
    if let Some(title) = payload.title {
        active.title = Set(title);
    }
    if let Some(url) = payload.url {
        active.url = Set(url);
    }
    if let Some(icon) = payload.icon {
        active.icon = Set(Some(icon));
    }
    if let Some(order) = payload.order {
        active.sort_order = Set(order);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    active.updated_at = Set(Utc::now().into());

    let item = active.update(&state.orm).await?;
    Ok(ApiResponse::success(
        "Menu item updated successfully",
        menu_item_from_entity(item),
        Some(Meta::empty()),
    ))
}

pub async fn delete_item(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = MenuItems::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Menu item"));
    }
    Ok(ApiResponse::success(
        "Menu item deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn menu_item_from_entity(model: MenuItemModel) -> MenuItem {
    MenuItem {
        id: model.id,
        title: model.title,
        url: model.url,
        icon: model.icon,
        order: model.sort_order,
        is_active: model.is_active,
        parent_id: model.parent_id,
    }
}
