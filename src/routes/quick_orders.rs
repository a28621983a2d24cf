use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::quick_orders::{CreateQuickOrderRequest, QuickOrderList, QuickOrderQuery},
    error::AppResult,
    models::QuickOrder,
    response::ApiResponse,
    services::quick_order_service,
    state::AppState,
};

/// Mounted at the API root: `/quick-order` and `/quick-orders` differ.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quick-order", post(create_quick_order))
        .route("/quick-orders", get(list_quick_orders))
        .route("/quick-orders/{id}", get(get_quick_order))
}

#[utoipa::path(
    post,
    path = "/api/quick-order",
    request_body = CreateQuickOrderRequest,
    responses(
        (status = 200, description = "Quick order placed", body = ApiResponse<QuickOrder>),
        (status = 400, description = "Insufficient stock or invalid quantity"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Orders"
)]
pub async fn create_quick_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuickOrderRequest>,
) -> AppResult<Json<ApiResponse<QuickOrder>>> {
    let resp = quick_order_service::create_quick_order(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/quick-orders",
    params(("phone" = Option<String>, Query, description = "Customer phone")),
    responses(
        (status = 200, description = "Quick orders, newest first", body = ApiResponse<QuickOrderList>),
    ),
    tag = "Orders"
)]
pub async fn list_quick_orders(
    State(state): State<AppState>,
    Query(query): Query<QuickOrderQuery>,
) -> AppResult<Json<ApiResponse<QuickOrderList>>> {
    let resp = quick_order_service::list_quick_orders(&state, query.phone).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/quick-orders/{id}",
    params(("id" = Uuid, Path, description = "Quick order ID")),
    responses(
        (status = 200, description = "Quick order", body = ApiResponse<QuickOrder>),
        (status = 404, description = "Quick order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_quick_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<QuickOrder>>> {
    let resp = quick_order_service::get_quick_order(&state, id).await?;
    Ok(Json(resp))
}
