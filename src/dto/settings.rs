use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSiteSettingsRequest {
    #[schema(value_type = Object)]
    pub settings_data: serde_json::Value,
}
