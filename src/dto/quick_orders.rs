use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::QuickOrder;

fn one() -> i32 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuickOrderRequest {
    pub product_id: Uuid,
    #[serde(default = "one")]
    pub quantity: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuickOrderQuery {
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct QuickOrderList {
    #[schema(value_type = Vec<QuickOrder>)]
    pub items: Vec<QuickOrder>,
}
