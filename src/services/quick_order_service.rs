use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::quick_orders::{CreateQuickOrderRequest, QuickOrderList},
    entity::quick_orders::{ActiveModel, Column, Entity as QuickOrders, Model as QuickOrderModel},
    error::{AppError, AppResult},
    models::QuickOrder,
    response::{ApiResponse, Meta},
    services::{order_service::STATUS_PENDING, product_service::find_product},
    state::AppState,
};

/// One-click purchase of a single product. Stock is checked but not
/// decremented.
pub async fn create_quick_order(
    state: &AppState,
    payload: CreateQuickOrderRequest,
) -> AppResult<ApiResponse<QuickOrder>> {
    let product = find_product(state, payload.product_id).await?;

    if payload.quantity < 1 {
        return Err(AppError::BadRequest("Quantity must be at least 1".into()));
    }
    if product.stock < payload.quantity {
        return Err(AppError::BadRequest("Insufficient stock".into()));
    }
    if payload.customer_name.trim().is_empty() || payload.customer_phone.trim().is_empty() {
        return Err(AppError::BadRequest("Customer name and phone are required".into()));
    }

    let order = ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(product.id),
        product_name: Set(product.name),
        product_image: Set(product.image),
        price: Set(product.price),
        quantity: Set(payload.quantity),
        customer_name: Set(payload.customer_name.trim().to_string()),
        customer_phone: Set(payload.customer_phone.trim().to_string()),
        status: Set(STATUS_PENDING.to_string()),
        notes: Set(payload.notes),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;
    tracing::info!(quick_order_id = %order.id, product_id = %order.product_id, "quick order created");

    Ok(ApiResponse::success(
        "Quick order created",
        quick_order_from_entity(order),
        Some(Meta::empty()),
    ))
}

pub async fn list_quick_orders(
    state: &AppState,
    phone: Option<String>,
) -> AppResult<ApiResponse<QuickOrderList>> {
    let mut finder = QuickOrders::find();
    if let Some(phone) = phone.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()) {
        finder = finder.filter(Column::CustomerPhone.eq(phone));
    }

    let items = finder
        .order_by_desc(Column::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(quick_order_from_entity)
        .collect();

    Ok(ApiResponse::success("Quick orders", QuickOrderList { items }, None))
}

pub async fn get_quick_order(state: &AppState, id: Uuid) -> AppResult<ApiResponse<QuickOrder>> {
    let order = QuickOrders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Quick order"))?;
    Ok(ApiResponse::success(
        "Quick order",
        quick_order_from_entity(order),
        None,
    ))
}

fn quick_order_from_entity(model: QuickOrderModel) -> QuickOrder {
    QuickOrder {
        id: model.id,
        product_id: model.product_id,
        product_name: model.product_name,
        product_image: model.product_image,
        price: model.price,
        quantity: model.quantity,
        customer_name: model.customer_name,
        customer_phone: model.customer_phone,
        status: model.status,
        notes: model.notes,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
