use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    dto::cart::guest_user,
    models::{Order, OrderLine},
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<OrderLine>,
    pub total_amount: f64,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub delivery_address: String,
    pub delivery_method: String,
    pub payment_method: String,
    pub notes: Option<String>,
    #[serde(default = "guest_user")]
    pub user_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct OrderList {
    #[schema(value_type = Vec<Order>)]
    pub items: Vec<Order>,
}
