use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    dto::cart::{AddToCartRequest, CartList, UpdateCartItemRequest},
    entity::cart_items::{ActiveModel, Column, Entity as CartItems, Model as CartItemModel},
    error::{AppError, AppResult},
    models::CartItem,
    response::{ApiResponse, Meta},
    services::product_service::find_product,
    state::AppState,
};

pub async fn list_cart(state: &AppState, user_id: &str) -> AppResult<ApiResponse<CartList>> {
    let items = CartItems::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(cart_item_from_entity)
        .collect();

    Ok(ApiResponse::success("Cart", CartList { items }, None))
}

/// Adds a product to the cart. A second add of the same product for the
/// same user increments the existing line instead of creating another.
pub async fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartItem>> {
    validate_quantity(payload.quantity)?;
    let product = find_product(state, payload.product_id).await?;

    let existing = CartItems::find()
        .filter(Column::UserId.eq(payload.user_id.as_str()))
        .filter(Column::ProductId.eq(product.id))
        .one(&state.orm)
        .await?;

    let item = match existing {
        Some(line) => {
            let quantity = line.quantity.saturating_add(payload.quantity);
            let mut active: ActiveModel = line.into();
            active.quantity = Set(quantity);
            active.update(&state.orm).await?
        }
        None => {
            ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(payload.user_id),
                product_id: Set(product.id),
                product_name: Set(product.name),
                product_image: Set(product.image),
                price: Set(product.price),
                quantity: Set(payload.quantity),
                created_at: Set(Utc::now().into()),
            }
            .insert(&state.orm)
            .await?
        }
    };
    tracing::debug!(user_id = %item.user_id, product_id = %item.product_id, quantity = item.quantity, "cart line saved");

    Ok(ApiResponse::success(
        "Added to cart",
        cart_item_from_entity(item),
        Some(Meta::empty()),
    ))
}

pub async fn update_cart_item(
    state: &AppState,
    id: Uuid,
    payload: UpdateCartItemRequest,
) -> AppResult<ApiResponse<CartItem>> {
    validate_quantity(payload.quantity)?;
    let existing = CartItems::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Cart item"))?;

    let mut active: ActiveModel = existing.into();
    active.quantity = Set(payload.quantity);
    let item = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Cart updated",
        cart_item_from_entity(item),
        Some(Meta::empty()),
    ))
}

pub async fn remove_cart_item(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = CartItems::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Cart item"));
    }

    Ok(ApiResponse::success(
        "Item removed from cart",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn clear_cart(
    state: &AppState,
    user_id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let removed = clear_cart_for(&state.orm, user_id).await?;
    Ok(ApiResponse::success(
        "Cart cleared",
        serde_json::json!({ "removed": removed }),
        Some(Meta::empty()),
    ))
}

/// Deletes every cart line of `user_id`, returning how many were removed.
pub(crate) async fn clear_cart_for<C>(conn: &C, user_id: &str) -> AppResult<u64>
where
    C: ConnectionTrait,
{
    let result = CartItems::delete_many()
        .filter(Column::UserId.eq(user_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

fn validate_quantity(quantity: i32) -> AppResult<()> {
    if quantity < 1 {
        return Err(AppError::BadRequest("Quantity must be at least 1".into()));
    }
    Ok(())
}

fn cart_item_from_entity(model: CartItemModel) -> CartItem {
    CartItem {
        id: model.id,
        product_id: model.product_id,
        product_name: model.product_name,
        product_image: model.product_image,
        price: model.price,
        quantity: model.quantity,
        user_id: model.user_id,
    }
}
