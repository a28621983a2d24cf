use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use uuid::Uuid;

use crate::{
    dto::{
        cms::CreatedResponse,
        menu::{CreateMenuItemRequest, MenuItemList, UpdateMenuItemRequest},
    },
    error::AppResult,
    middleware::auth::AdminUser,
    models::MenuItem,
    response::ApiResponse,
    services::menu_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", put(update_item).delete(delete_item))
}

#[utoipa::path(
    get,
    path = "/api/menu/items",
    responses((status = 200, description = "Active items by order", body = ApiResponse<MenuItemList>)),
    tag = "Menu"
)]
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<ApiResponse<MenuItemList>>> {
    let resp = menu_service::list_active(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/menu/items",
    request_body = CreateMenuItemRequest,
    responses(
        (status = 200, description = "Item created", body = ApiResponse<CreatedResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Parent menu item not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Menu"
)]
pub async fn create_item(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<CreateMenuItemRequest>,
) -> AppResult<Json<ApiResponse<CreatedResponse>>> {
    let resp = menu_service::create_item(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/menu/items/{id}",
    params(("id" = Uuid, Path, description = "Menu item ID")),
    request_body = UpdateMenuItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ApiResponse<MenuItem>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Menu item not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Menu"
)]
pub async fn update_item(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMenuItemRequest>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    let resp = menu_service::update_item(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/menu/items/{id}",
    params(("id" = Uuid, Path, description = "Menu item ID")),
    responses(
        (status = 200, description = "Item deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Menu item not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Menu"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = menu_service::delete_item(&state, id).await?;
    Ok(Json(resp))
}
