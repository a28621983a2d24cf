use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::payments::{
        CallbackRequest, CallbackResponse, CheckoutResponse, CreateCheckoutQuery,
        PaymentStatusResponse,
    },
    error::AppResult,
    response::ApiResponse,
    services::payment_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-checkout", post(create_checkout))
        .route("/callback", post(callback))
        .route("/status/{order_id}", get(payment_status))
}

#[utoipa::path(
    post,
    path = "/api/liqpay/create-checkout",
    params(
        ("order_id" = String, Query, description = "Order being paid"),
        ("amount" = f64, Query, description = "Amount in UAH"),
        ("description" = Option<String>, Query, description = "Payment description"),
        ("result_url" = Option<String>, Query, description = "Where the buyer returns"),
        ("server_url" = Option<String>, Query, description = "Callback URL"),
    ),
    responses(
        (status = 200, description = "Signed checkout form", body = ApiResponse<CheckoutResponse>),
        (status = 400, description = "Invalid amount"),
    ),
    tag = "Payments"
)]
pub async fn create_checkout(
    State(state): State<AppState>,
    Query(query): Query<CreateCheckoutQuery>,
) -> AppResult<Json<ApiResponse<CheckoutResponse>>> {
    let resp = payment_service::create_checkout(&state, query)?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/liqpay/callback",
    request_body = CallbackRequest,
    responses(
        (status = 200, description = "Callback accepted", body = ApiResponse<CallbackResponse>),
        (status = 400, description = "Invalid signature"),
    ),
    tag = "Payments"
)]
pub async fn callback(
    State(state): State<AppState>,
    Json(payload): Json<CallbackRequest>,
) -> AppResult<Json<ApiResponse<CallbackResponse>>> {
    let resp = payment_service::handle_callback(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/liqpay/status/{order_id}",
    params(("order_id" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Payment state", body = ApiResponse<PaymentStatusResponse>),
        (status = 404, description = "Order not found"),
    ),
    tag = "Payments"
)]
pub async fn payment_status(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<ApiResponse<PaymentStatusResponse>>> {
    let resp = payment_service::payment_status(&state, &order_id).await?;
    Ok(Json(resp))
}
