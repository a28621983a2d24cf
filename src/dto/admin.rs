use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{models::Order, routes::params::Pagination};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: u64,
    pub total_orders: u64,
    pub total_revenue: f64,
    pub pending_orders: u64,
    pub low_stock_products: u64,
    pub total_categories: u64,
    pub recent_orders: Vec<Order>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RevenuePoint {
    pub date: String,
    pub orders: u64,
    pub revenue: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopProduct {
    pub id: String,
    pub name: String,
    pub sales: i64,
    pub revenue: f64,
}

#[derive(Debug, Default, Serialize, ToSchema)]
pub struct OrderStats {
    pub pending: u64,
    pub confirmed: u64,
    pub processing: u64,
    pub shipped: u64,
    pub delivered: u64,
    pub cancelled: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrdersByStatus {
    pub status: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomer {
    pub name: String,
    pub phone: String,
    pub total_orders: u64,
    pub total_spent: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ImageUploadResponse {
    pub url: String,
    pub filename: String,
}

#[derive(Debug, Deserialize)]
pub struct DaysQuery {
    pub days: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct AdminOrderQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub status: Option<String>,
}

impl AdminOrderQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct RevenueChart {
    #[schema(value_type = Vec<RevenuePoint>)]
    pub items: Vec<RevenuePoint>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct TopProductList {
    #[schema(value_type = Vec<TopProduct>)]
    pub items: Vec<TopProduct>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct StatusBreakdown {
    #[schema(value_type = Vec<OrdersByStatus>)]
    pub items: Vec<OrdersByStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct TopCustomerList {
    #[schema(value_type = Vec<TopCustomer>)]
    pub items: Vec<TopCustomer>,
}
