use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: String,
    /// Snapshot of the ordered lines as sent by the client.
    #[sea_orm(column_type = "JsonBinary")]
    pub items: Json,
    pub total_amount: f64,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub delivery_address: String,
    pub delivery_method: String,
    pub payment_method: String,
    pub status: String,
    pub payment_status: String,
    pub liqpay_status: Option<String>,
    pub paid_at: Option<DateTimeWithTimeZone>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
