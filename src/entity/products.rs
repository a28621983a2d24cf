use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub article: String,
    pub price: f64,
    pub old_price: Option<f64>,
    pub discount: i32,
    pub image: String,
    pub category: String,
    /// JSON array of badge names.
    #[sea_orm(column_type = "JsonBinary")]
    pub badges: Json,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub stock: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
