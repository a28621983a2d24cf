use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::blog::{
        BlogListQuery, BlogPostCreated, BlogPostList, CreateBlogPostRequest, UpdateBlogPostRequest,
    },
    error::AppResult,
    middleware::auth::AdminUser,
    models::BlogPost,
    response::ApiResponse,
    services::blog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    // Reads address a post by slug, writes by id; both share one path segment.
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route(
            "/posts/{key}",
            get(get_post).put(update_post).delete(delete_post),
        )
}

#[utoipa::path(
    get,
    path = "/api/blog/posts",
    params(
        ("published_only" = Option<bool>, Query, description = "Only published posts, default true"),
        ("limit" = Option<u64>, Query, description = "Page size, default 50"),
        ("offset" = Option<u64>, Query, description = "Rows to skip, default 0"),
    ),
    responses((status = 200, description = "Posts, newest first", body = ApiResponse<BlogPostList>)),
    tag = "Blog"
)]
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<BlogListQuery>,
) -> AppResult<Json<ApiResponse<BlogPostList>>> {
    let resp = blog_service::list_posts(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/blog/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post, view counted", body = ApiResponse<BlogPost>),
        (status = 404, description = "Post not found"),
    ),
    tag = "Blog"
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ApiResponse<BlogPost>>> {
    let resp = blog_service::get_post(&state, &slug).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/blog/posts",
    request_body = CreateBlogPostRequest,
    responses(
        (status = 200, description = "Post created", body = ApiResponse<BlogPostCreated>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Blog"
)]
pub async fn create_post(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<CreateBlogPostRequest>,
) -> AppResult<Json<ApiResponse<BlogPostCreated>>> {
    let resp = blog_service::create_post(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/blog/posts/{id}",
    params(("id" = Uuid, Path, description = "Post ID")),
    request_body = UpdateBlogPostRequest,
    responses(
        (status = 200, description = "Post updated", body = ApiResponse<BlogPost>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Blog"
)]
pub async fn update_post(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBlogPostRequest>,
) -> AppResult<Json<ApiResponse<BlogPost>>> {
    let resp = blog_service::update_post(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/blog/posts/{id}",
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Blog"
)]
pub async fn delete_post(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = blog_service::delete_post(&state, id).await?;
    Ok(Json(resp))
}
