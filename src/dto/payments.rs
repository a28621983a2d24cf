use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
pub struct CreateCheckoutQuery {
    pub order_id: String,
    pub amount: f64,
    pub description: Option<String>,
    pub result_url: Option<String>,
    pub server_url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub data: String,
    pub signature: String,
    pub checkout_url: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CallbackRequest {
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub signature: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CallbackResponse {
    pub status: String,
    pub order_id: Option<String>,
    pub payment_status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentStatusResponse {
    pub order_id: String,
    pub payment_status: String,
    pub liqpay_status: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
}
