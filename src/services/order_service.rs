use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    dto::orders::{CreateOrderRequest, OrderList},
    entity::orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
    error::{AppError, AppResult},
    models::{Order, OrderLine},
    response::{ApiResponse, Meta},
    services::cart_service::clear_cart_for,
    state::AppState,
};

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CANCELLED: &str = "cancelled";
pub const PAYMENT_PENDING: &str = "pending";
pub const PAYMENT_PAID: &str = "paid";

/// Places an order from the submitted snapshot. The client total is stored
/// as sent and product stock is left untouched. The user's cart is emptied
/// in the same transaction.
pub async fn create_order(
    state: &AppState,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    if payload.items.is_empty() {
        return Err(AppError::BadRequest("Order must contain at least one item".into()));
    }
    if !payload.total_amount.is_finite() || payload.total_amount < 0.0 {
        return Err(AppError::BadRequest("Total amount must be a non-negative number".into()));
    }

    let items = serde_json::to_value(&payload.items)?;
    let user_id = payload.user_id;

    let txn = state.orm.begin().await?;
    let order = OrderActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id.clone()),
        items: Set(items),
        total_amount: Set(payload.total_amount),
        customer_name: Set(payload.customer_name),
        customer_phone: Set(payload.customer_phone),
        customer_email: Set(payload.customer_email),
        delivery_address: Set(payload.delivery_address),
        delivery_method: Set(payload.delivery_method),
        payment_method: Set(payload.payment_method),
        status: Set(STATUS_PENDING.to_string()),
        payment_status: Set(PAYMENT_PENDING.to_string()),
        liqpay_status: Set(None),
        paid_at: Set(None),
        notes: Set(payload.notes),
        created_at: Set(Utc::now().into()),
    }
    .insert(&txn)
    .await?;
    let cleared = clear_cart_for(&txn, &user_id).await?;
    txn.commit().await?;

    tracing::info!(
        order_id = %order.id,
        user_id = %user_id,
        total = order.total_amount,
        cleared_cart_lines = cleared,
        "order created"
    );

    Ok(ApiResponse::success(
        "Order created",
        order_from_entity(order),
        Some(Meta::empty()),
    ))
}

pub async fn list_orders(state: &AppState, user_id: &str) -> AppResult<ApiResponse<OrderList>> {
    let items = Orders::find()
        .filter(OrderCol::UserId.eq(user_id))
        .order_by_desc(OrderCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect();

    Ok(ApiResponse::success("Orders", OrderList { items }, None))
}

pub async fn get_order(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Order>> {
    let order = find_order(state, id).await?;
    Ok(ApiResponse::success("Order", order_from_entity(order), None))
}

pub(crate) async fn find_order(state: &AppState, id: Uuid) -> AppResult<OrderModel> {
    Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Order"))
}

/// Lines of a stored order. Rows whose snapshot no longer parses yield no lines.
pub(crate) fn order_lines(model: &OrderModel) -> Vec<OrderLine> {
    serde_json::from_value(model.items.clone()).unwrap_or_default()
}

pub(crate) fn order_from_entity(model: OrderModel) -> Order {
    Order {
        items: order_lines(&model),
        id: model.id,
        user_id: model.user_id,
        total_amount: model.total_amount,
        customer_name: model.customer_name,
        customer_phone: model.customer_phone,
        customer_email: model.customer_email,
        delivery_address: model.delivery_address,
        delivery_method: model.delivery_method,
        payment_method: model.payment_method,
        status: model.status,
        payment_status: model.payment_status,
        liqpay_status: model.liqpay_status,
        paid_at: model.paid_at.map(|at| at.with_timezone(&Utc)),
        notes: model.notes,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
