use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    routing::{get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::{
        admin::{
            AdminOrderQuery, DashboardStats, DaysQuery, ImageUploadResponse, LimitQuery,
            OrderStats, RevenueChart, StatusBreakdown, TopCustomerList, TopProductList,
            UpdateOrderStatusRequest,
        },
        orders::OrderList,
        settings::UpdateSiteSettingsRequest,
    },
    error::AppResult,
    middleware::auth::AdminUser,
    models::{Order, SiteSettings},
    response::ApiResponse,
    routes::upload::read_upload_form,
    services::{admin_service, media_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(dashboard_stats))
        .route("/revenue-chart", get(revenue_chart))
        .route("/top-products", get(top_products))
        .route("/orders", get(list_orders))
        .route("/orders/stats", get(order_stats))
        .route("/orders/by-status", get(orders_by_status))
        .route("/orders/top-customers", get(top_customers))
        .route("/orders/{id}/status", put(update_order_status))
        .route("/upload-image", post(upload_image))
        .route("/site-settings", get(get_site_settings).post(save_site_settings))
}

#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Dashboard counters", body = ApiResponse<DashboardStats>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn dashboard_stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<ApiResponse<DashboardStats>>> {
    let resp = admin_service::dashboard_stats(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/revenue-chart",
    params(("days" = Option<i64>, Query, description = "Days back including today, default 7")),
    responses(
        (status = 200, description = "Revenue per day", body = ApiResponse<RevenueChart>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn revenue_chart(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<DaysQuery>,
) -> AppResult<Json<ApiResponse<RevenueChart>>> {
    let resp = admin_service::revenue_chart(&state, query.days).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/top-products",
    params(("limit" = Option<usize>, Query, description = "Number of products, default 5")),
    responses(
        (status = 200, description = "Best sellers by units", body = ApiResponse<TopProductList>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn top_products(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<ApiResponse<TopProductList>>> {
    let resp = admin_service::top_products(&state, query.limit).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("status" = Option<String>, Query, description = "Filter by status"),
    ),
    responses(
        (status = 200, description = "All orders, newest first", body = ApiResponse<OrderList>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<AdminOrderQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = admin_service::list_orders(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/orders/{id}/status",
    params(("id" = Uuid, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status changed", body = ApiResponse<Order>),
        (status = 400, description = "Empty status"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Order not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = admin_service::update_order_status(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/stats",
    responses(
        (status = 200, description = "Orders per known status", body = ApiResponse<OrderStats>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn order_stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<ApiResponse<OrderStats>>> {
    let resp = admin_service::order_stats(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/by-status",
    responses(
        (status = 200, description = "Count and share per status", body = ApiResponse<StatusBreakdown>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn orders_by_status(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<ApiResponse<StatusBreakdown>>> {
    let resp = admin_service::orders_by_status(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/top-customers",
    params(("limit" = Option<usize>, Query, description = "Number of customers, default 10")),
    responses(
        (status = 200, description = "Customers by amount spent", body = ApiResponse<TopCustomerList>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn top_customers(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<ApiResponse<TopCustomerList>>> {
    let resp = admin_service::top_customers(&state, query.limit).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/upload-image",
    request_body(content_type = "multipart/form-data", description = "Form with a `file` part"),
    responses(
        (status = 200, description = "Image stored", body = ApiResponse<ImageUploadResponse>),
        (status = 400, description = "Not an image or too large"),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn upload_image(
    State(state): State<AppState>,
    _admin: AdminUser,
    multipart: Multipart,
) -> AppResult<Json<ApiResponse<ImageUploadResponse>>> {
    let (file, _) = read_upload_form(multipart).await?;
    let resp = media_service::upload_image(&state, file).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/site-settings",
    responses(
        (status = 200, description = "Stored settings document", body = ApiResponse<SiteSettings>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_site_settings(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<ApiResponse<SiteSettings>>> {
    let resp = admin_service::get_site_settings(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/site-settings",
    request_body = UpdateSiteSettingsRequest,
    responses(
        (status = 200, description = "Settings saved", body = ApiResponse<SiteSettings>),
        (status = 400, description = "settings_data is not an object"),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn save_site_settings(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<UpdateSiteSettingsRequest>,
) -> AppResult<Json<ApiResponse<SiteSettings>>> {
    let resp = admin_service::save_site_settings(&state, payload).await?;
    Ok(Json(resp))
}
