use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::auth::{LoginRequest, LoginResponse, VerifyResponse},
    error::AppResult,
    middleware::auth::AdminUser,
    response::ApiResponse,
    services::auth_service,
    state::AppState,
};

/// Mounted under `/api/admin`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/verify", get(verify))
}

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Bearer token issued", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid username or password"),
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let resp = auth_service::login_admin(&state.config, payload)?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/verify",
    responses(
        (status = 200, description = "Token is valid", body = ApiResponse<VerifyResponse>),
        (status = 401, description = "Missing, invalid or expired token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn verify(admin: AdminUser) -> Json<ApiResponse<VerifyResponse>> {
    Json(auth_service::verify_admin(&admin))
}
