use axum::{Json, Router, extract::State, routing::get};

use crate::{error::AppResult, response::ApiResponse, services::admin_service, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(public_settings))
}

#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Storefront settings document, `{}` when never saved"),
    ),
    tag = "Settings"
)]
pub async fn public_settings(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = admin_service::public_settings(&state).await?;
    Ok(Json(resp))
}
