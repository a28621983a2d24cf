use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::models::{Badge, Product};

fn default_stock() -> i32 {
    100
}

/// Tells an explicit `null` (`Some(None)`) apart from an absent field (`None`).
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub article: String,
    pub price: f64,
    pub old_price: Option<f64>,
    #[serde(default)]
    pub discount: i32,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub badges: Vec<Badge>,
    pub description: String,
    #[serde(default = "default_stock")]
    pub stock: i32,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub article: Option<String>,
    pub price: Option<f64>,
    /// `null` clears the previous price.
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<f64>, nullable)]
    pub old_price: Option<Option<f64>>,
    pub discount: Option<i32>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub badges: Option<Vec<Badge>>,
    pub description: Option<String>,
    pub stock: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::UpdateProductRequest;

    #[test]
    fn old_price_distinguishes_null_from_absent() {
        let absent: UpdateProductRequest = serde_json::from_str(r#"{"price": 10.0}"#).unwrap();
        assert_eq!(absent.old_price, None);

        let cleared: UpdateProductRequest = serde_json::from_str(r#"{"oldPrice": null}"#).unwrap();
        assert_eq!(cleared.old_price, Some(None));

        let set: UpdateProductRequest = serde_json::from_str(r#"{"oldPrice": 12.5}"#).unwrap();
        assert_eq!(set.old_price, Some(Some(12.5)));
    }
}
