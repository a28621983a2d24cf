use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use uuid::Uuid;

use crate::{
    dto::cms::{
        CreateFooterLinkRequest, CreatePageRequest, CreatedResponse, FooterLinkList,
        HeroSectionRequest, PageList, UpdateFooterLinkRequest, UpdatePageRequest,
    },
    error::AppResult,
    middleware::auth::AdminUser,
    models::{FooterLink, HeroSection, PageContent},
    response::ApiResponse,
    services::cms_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pages", get(list_pages).post(create_page))
        .route(
            "/pages/{page_key}",
            get(get_page).put(update_page).delete(delete_page),
        )
        .route("/hero", get(get_hero).put(save_hero))
        .route("/footer-links", get(list_footer_links).post(create_footer_link))
        .route(
            "/footer-links/{id}",
            put(update_footer_link).delete(delete_footer_link),
        )
}

#[utoipa::path(
    get,
    path = "/api/cms/pages",
    responses((status = 200, description = "All pages", body = ApiResponse<PageList>)),
    tag = "CMS"
)]
pub async fn list_pages(State(state): State<AppState>) -> AppResult<Json<ApiResponse<PageList>>> {
    let resp = cms_service::list_pages(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/cms/pages/{page_key}",
    params(("page_key" = String, Path, description = "Page key, e.g. about")),
    responses(
        (status = 200, description = "Page", body = ApiResponse<PageContent>),
        (status = 404, description = "Page not found"),
    ),
    tag = "CMS"
)]
pub async fn get_page(
    State(state): State<AppState>,
    Path(page_key): Path<String>,
) -> AppResult<Json<ApiResponse<PageContent>>> {
    let resp = cms_service::get_page(&state, &page_key).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cms/pages",
    request_body = CreatePageRequest,
    responses(
        (status = 200, description = "Page created", body = ApiResponse<CreatedResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Page key already used"),
    ),
    security(("bearer_auth" = [])),
    tag = "CMS"
)]
pub async fn create_page(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<CreatePageRequest>,
) -> AppResult<Json<ApiResponse<CreatedResponse>>> {
    let resp = cms_service::create_page(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/cms/pages/{page_key}",
    params(("page_key" = String, Path, description = "Page key")),
    request_body = UpdatePageRequest,
    responses(
        (status = 200, description = "Page updated", body = ApiResponse<PageContent>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Page not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "CMS"
)]
pub async fn update_page(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(page_key): Path<String>,
    Json(payload): Json<UpdatePageRequest>,
) -> AppResult<Json<ApiResponse<PageContent>>> {
    let resp = cms_service::update_page(&state, &page_key, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cms/pages/{page_key}",
    params(("page_key" = String, Path, description = "Page key")),
    responses(
        (status = 200, description = "Page deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Page not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "CMS"
)]
pub async fn delete_page(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(page_key): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = cms_service::delete_page(&state, &page_key).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/cms/hero",
    responses(
        (status = 200, description = "Hero banner", body = ApiResponse<HeroSection>),
        (status = 404, description = "Hero section not found"),
    ),
    tag = "CMS"
)]
pub async fn get_hero(State(state): State<AppState>) -> AppResult<Json<ApiResponse<HeroSection>>> {
    let resp = cms_service::get_hero(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/cms/hero",
    request_body = HeroSectionRequest,
    responses(
        (status = 200, description = "Hero banner saved", body = ApiResponse<HeroSection>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "CMS"
)]
pub async fn save_hero(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<HeroSectionRequest>,
) -> AppResult<Json<ApiResponse<HeroSection>>> {
    let resp = cms_service::save_hero(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/cms/footer-links",
    responses((status = 200, description = "Links by section and order", body = ApiResponse<FooterLinkList>)),
    tag = "CMS"
)]
pub async fn list_footer_links(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<FooterLinkList>>> {
    let resp = cms_service::list_footer_links(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cms/footer-links",
    request_body = CreateFooterLinkRequest,
    responses(
        (status = 200, description = "Link created", body = ApiResponse<CreatedResponse>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "CMS"
)]
pub async fn create_footer_link(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<CreateFooterLinkRequest>,
) -> AppResult<Json<ApiResponse<CreatedResponse>>> {
    let resp = cms_service::create_footer_link(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/cms/footer-links/{id}",
    params(("id" = Uuid, Path, description = "Footer link ID")),
    request_body = UpdateFooterLinkRequest,
    responses(
        (status = 200, description = "Link updated", body = ApiResponse<FooterLink>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Footer link not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "CMS"
)]
pub async fn update_footer_link(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFooterLinkRequest>,
) -> AppResult<Json<ApiResponse<FooterLink>>> {
    let resp = cms_service::update_footer_link(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cms/footer-links/{id}",
    params(("id" = Uuid, Path, description = "Footer link ID")),
    responses(
        (status = 200, description = "Link deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Footer link not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "CMS"
)]
pub async fn delete_footer_link(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = cms_service::delete_footer_link(&state, id).await?;
    Ok(Json(resp))
}
