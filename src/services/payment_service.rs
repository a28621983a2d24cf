use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

use crate::{
    dto::payments::{
        CallbackRequest, CallbackResponse, CheckoutResponse, CreateCheckoutQuery,
        PaymentStatusResponse,
    },
    entity::orders::{ActiveModel as OrderActive, Entity as Orders},
    error::{AppError, AppResult},
    liqpay::{CheckoutRequest, LiqPayClient},
    response::ApiResponse,
    services::order_service::PAYMENT_PAID,
    state::AppState,
};

pub fn create_checkout(
    state: &AppState,
    query: CreateCheckoutQuery,
) -> AppResult<ApiResponse<CheckoutResponse>> {
    let client = LiqPayClient::new(&state.config.liqpay);
    let checkout = client.checkout(CheckoutRequest {
        order_id: &query.order_id,
        amount: query.amount,
        description: query.description.as_deref(),
        result_url: query.result_url.as_deref(),
        server_url: query.server_url.as_deref(),
    })?;
    tracing::info!(order_id = %query.order_id, amount = query.amount, "liqpay checkout prepared");

    Ok(ApiResponse::success("Checkout created", checkout, None))
}

/// Handles the server-to-server notification. A verified paid status marks
/// the order as paid; callbacks for unknown orders are acknowledged.
pub async fn handle_callback(
    state: &AppState,
    payload: CallbackRequest,
) -> AppResult<ApiResponse<CallbackResponse>> {
    let client = LiqPayClient::new(&state.config.liqpay);
    if !client.verify(&payload.data, &payload.signature) {
        tracing::warn!("liqpay callback with invalid signature");
        return Err(AppError::BadRequest("Invalid signature".into()));
    }

    let callback = client.decode(&payload.data)?;
    if callback.is_paid() {
        if let Some(order_id) = callback.order_id.as_deref() {
            mark_paid(state, order_id, callback.status.as_deref().unwrap_or_default()).await?;
        }
    }

    Ok(ApiResponse::success(
        "Callback processed",
        CallbackResponse {
            status: "ok".to_string(),
            order_id: callback.order_id,
            payment_status: callback.status,
        },
        None,
    ))
}

pub async fn payment_status(
    state: &AppState,
    order_id: &str,
) -> AppResult<ApiResponse<PaymentStatusResponse>> {
    let id = Uuid::parse_str(order_id).map_err(|_| AppError::NotFound("Order"))?;
    let order = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Order"))?;

    Ok(ApiResponse::success(
        "Payment status",
        PaymentStatusResponse {
            order_id: order_id.to_string(),
            payment_status: order.payment_status,
            liqpay_status: order.liqpay_status,
            paid_at: order.paid_at.map(|at| at.with_timezone(&Utc)),
        },
        None,
    ))
}

async fn mark_paid(state: &AppState, order_id: &str, liqpay_status: &str) -> AppResult<()> {
    let Ok(id) = Uuid::parse_str(order_id) else {
        tracing::warn!(order_id = %order_id, "liqpay callback for malformed order id");
        return Ok(());
    };
    let Some(order) = Orders::find_by_id(id).one(&state.orm).await? else {
        tracing::warn!(order_id = %order_id, "liqpay callback for unknown order");
        return Ok(());
    };

    let mut active: OrderActive = order.into();
    active.payment_status = Set(PAYMENT_PAID.to_string());
    active.liqpay_status = Set(Some(liqpay_status.to_string()));
    active.paid_at = Set(Some(Utc::now().into()));
    active.update(&state.orm).await?;
    tracing::info!(order_id = %order_id, status = %liqpay_status, "order paid");
    Ok(())
}
