use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post},
};
use uuid::Uuid;

use crate::{
    dto::{
        cart::UserQuery,
        wishlist::{AddToWishlistRequest, WishlistList},
    },
    error::AppResult,
    models::WishlistItem,
    response::ApiResponse,
    services::wishlist_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wishlist))
        .route("/add", post(add_to_wishlist))
        .route("/{item_id}", delete(remove_from_wishlist))
}

#[utoipa::path(
    get,
    path = "/api/wishlist",
    params(
        ("userId" = Option<String>, Query, description = "Wishlist owner, default guest")
    ),
    responses(
        (status = 200, description = "Wishlist entries", body = ApiResponse<WishlistList>),
    ),
    tag = "Wishlist"
)]
pub async fn list_wishlist(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<ApiResponse<WishlistList>>> {
    let resp = wishlist_service::list_wishlist(&state, &query.user_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/wishlist/add",
    request_body = AddToWishlistRequest,
    responses(
        (status = 200, description = "Added, or the existing entry", body = ApiResponse<WishlistItem>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Wishlist"
)]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    Json(payload): Json<AddToWishlistRequest>,
) -> AppResult<Json<ApiResponse<WishlistItem>>> {
    let resp = wishlist_service::add_to_wishlist(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/wishlist/{item_id}",
    params(("item_id" = Uuid, Path, description = "Wishlist entry ID")),
    responses(
        (status = 200, description = "Removed"),
        (status = 404, description = "Wishlist item not found"),
    ),
    tag = "Wishlist"
)]
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = wishlist_service::remove_from_wishlist(&state, item_id).await?;
    Ok(Json(resp))
}
