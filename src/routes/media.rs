use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::media::{MediaFileList, MediaListQuery, MediaStats, UpdateMediaRequest},
    error::AppResult,
    middleware::auth::AdminUser,
    models::MediaFile,
    response::ApiResponse,
    routes::upload::read_upload_form,
    services::media_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/files", get(list_files))
        .route(
            "/files/{id}",
            get(get_file).put(update_file).delete(delete_file),
        )
        .route("/upload", post(upload_file))
        .route("/stats", get(media_stats))
}

#[utoipa::path(
    get,
    path = "/api/media/files",
    params(
        ("file_type" = Option<String>, Query, description = "image, video or document"),
        ("folder" = Option<String>, Query, description = "Library folder"),
        ("limit" = Option<u64>, Query, description = "Page size, default 100"),
        ("offset" = Option<u64>, Query, description = "Rows to skip, default 0"),
    ),
    responses((status = 200, description = "Files, newest first", body = ApiResponse<MediaFileList>)),
    tag = "Media"
)]
pub async fn list_files(
    State(state): State<AppState>,
    Query(query): Query<MediaListQuery>,
) -> AppResult<Json<ApiResponse<MediaFileList>>> {
    let resp = media_service::list_files(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/media/files/{id}",
    params(("id" = Uuid, Path, description = "Media file ID")),
    responses(
        (status = 200, description = "File metadata", body = ApiResponse<MediaFile>),
        (status = 404, description = "File not found"),
    ),
    tag = "Media"
)]
pub async fn get_file(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<MediaFile>>> {
    let resp = media_service::get_file(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/media/upload",
    request_body(
        content_type = "multipart/form-data",
        description = "`file` part plus optional `folder`, `alt_text` and `title` fields"
    ),
    responses(
        (status = 200, description = "File stored", body = ApiResponse<MediaFile>),
        (status = 400, description = "Type not allowed or file too large"),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Media"
)]
pub async fn upload_file(
    State(state): State<AppState>,
    admin: AdminUser,
    multipart: Multipart,
) -> AppResult<Json<ApiResponse<MediaFile>>> {
    let (file, meta) = read_upload_form(multipart).await?;
    let resp = media_service::upload_file(&state, file, meta, &admin.username).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/media/files/{id}",
    params(("id" = Uuid, Path, description = "Media file ID")),
    request_body = UpdateMediaRequest,
    responses(
        (status = 200, description = "Metadata updated", body = ApiResponse<MediaFile>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "File not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Media"
)]
pub async fn update_file(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMediaRequest>,
) -> AppResult<Json<ApiResponse<MediaFile>>> {
    let resp = media_service::update_file(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/media/files/{id}",
    params(("id" = Uuid, Path, description = "Media file ID")),
    responses(
        (status = 200, description = "Record and file removed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "File not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Media"
)]
pub async fn delete_file(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = media_service::delete_file(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/media/stats",
    responses(
        (status = 200, description = "Library totals", body = ApiResponse<MediaStats>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Media"
)]
pub async fn media_stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<ApiResponse<MediaStats>>> {
    let resp = media_service::stats(&state).await?;
    Ok(Json(resp))
}
