use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    dto::blog::{
        BlogListQuery, BlogPostCreated, BlogPostList, CreateBlogPostRequest, UpdateBlogPostRequest,
    },
    entity::blog_posts::{ActiveModel, Column, Entity as BlogPosts, Model as BlogPostModel},
    error::{AppError, AppResult},
    models::BlogPost,
    response::{ApiResponse, Meta},
    routes::params::clamp_offset,
    state::AppState,
};

const DEFAULT_LIMIT: u64 = 50;
const MAX_LIMIT: u64 = 200;

pub async fn list_posts(
    state: &AppState,
    query: BlogListQuery,
) -> AppResult<ApiResponse<BlogPostList>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = clamp_offset(query.offset);

    let mut finder = BlogPosts::find();
    if query.published_only {
        finder = finder.filter(Column::IsPublished.eq(true));
    }

    let items = finder
        .order_by_desc(Column::PublishedAt)
        .limit(limit)
        .offset(offset)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(post_from_entity)
        .collect();

    Ok(ApiResponse::success(
        "Blog posts",
        BlogPostList { items },
        Some(Meta::window(offset, limit)),
    ))
}

/// Fetches a post by slug and counts the view in a single `UPDATE`.
pub async fn get_post(state: &AppState, slug: &str) -> AppResult<ApiResponse<BlogPost>> {
    let result = BlogPosts::update_many()
        .col_expr(Column::Views, Expr::col(Column::Views).add(1))
        .filter(Column::Slug.eq(slug))
        .exec(&state.orm)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Post"));
    }

    let post = BlogPosts::find()
        .filter(Column::Slug.eq(slug))
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Post"))?;

    Ok(ApiResponse::success("Blog post", post_from_entity(post), None))
}

pub async fn create_post(
    state: &AppState,
    payload: CreateBlogPostRequest,
) -> AppResult<ApiResponse<BlogPostCreated>> {
    if payload.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".into()));
    }
    let slug = unique_slug(state, &payload.title, None).await?;
    let now = Utc::now();

    let post = ActiveModel {
        id: Set(Uuid::new_v4()),
        slug: Set(slug),
        title: Set(payload.title),
        excerpt: Set(payload.excerpt),
        content: Set(payload.content),
        image_url: Set(payload.image_url),
        author: Set(payload.author),
        category: Set(payload.category),
        tags: Set(serde_json::json!(payload.tags)),
        is_published: Set(payload.is_published),
        views: Set(0),
        meta_description: Set(payload.meta_description),
        meta_keywords: Set(payload.meta_keywords),
        published_at: Set(now.into()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&state.orm)
    .await?;
    tracing::info!(post_id = %post.id, slug = %post.slug, "blog post created");

    Ok(ApiResponse::success(
        "Blog post created successfully",
        BlogPostCreated {
            id: post.id,
            slug: post.slug,
        },
        Some(Meta::empty()),
    ))
}

pub async fn update_post(
    state: &AppState,
    id: Uuid,
    payload: UpdateBlogPostRequest,
) -> AppResult<ApiResponse<BlogPost>> {
    let existing = BlogPosts::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Post"))?;

    let mut active: ActiveModel = existing.into();
    if let Some(title) = payload.title {
        if title.trim().is_empty() {
            return Err(AppError::BadRequest("Title is required".into()));
        }
        active.slug = Set(unique_slug(state, &title, Some(id)).await?);
        active.title = Set(title);
    }
    if let Some(excerpt) = payload.excerpt {
        active.excerpt = Set(Some(excerpt));
    }
    if let Some(content) = payload.content {
        active.content = Set(content);
    }
    if let Some(image_url) = payload.image_url {
        active.image_url = Set(Some(image_url));
    }
    if let Some(category) = payload.category {
        active.category = Set(Some(category));
    }
    if let Some(tags) = payload.tags {
        active.tags = Set(serde_json::json!(tags));
    }
    if let Some(is_published) = payload.is_published {
        active.is_published = Set(is_published);
    }
    if let Some(meta_description) = payload.meta_description {
        active.meta_description = Set(Some(meta_description));
    }
    if let Some(meta_keywords) = payload.meta_keywords {
        active.meta_keywords = Set(Some(meta_keywords));
    }
    active.updated_at = Set(Utc::now().into());

    let post = active.update(&state.orm).await?;
    Ok(ApiResponse::success(
        "Blog post updated successfully",
        post_from_entity(post),
        Some(Meta::empty()),
    ))
}

pub async fn delete_post(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = BlogPosts::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Post"));
    }
    tracing::info!(post_id = %id, "blog post deleted");

    Ok(ApiResponse::success(
        "Blog post deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Slug for `title`, suffixed with the current unix time when another post
/// already holds it.
async fn unique_slug(state: &AppState, title: &str, except: Option<Uuid>) -> AppResult<String> {
    let slug = slugify(title);
    let mut finder = BlogPosts::find().filter(Column::Slug.eq(slug.as_str()));
    if let Some(id) = except {
        finder = finder.filter(Column::Id.ne(id));
    }

    if finder.one(&state.orm).await?.is_some() {
        return Ok(format!("{}-{}", slug, Utc::now().timestamp()));
    }
    Ok(slug)
}

/// Lowercases, drops everything but word characters, whitespace and dashes,
/// then joins the words with single dashes. Cyrillic letters are kept.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.to_lowercase().chars() {
        if c.is_alphanumeric() || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c == '-' || c.is_whitespace() {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        return "post".to_string();
    }
    slug
}

fn post_from_entity(model: BlogPostModel) -> BlogPost {
    BlogPost {
        tags: serde_json::from_value(model.tags.clone()).unwrap_or_default(),
        id: model.id,
        slug: model.slug,
        title: model.title,
        excerpt: model.excerpt,
        content: model.content,
        image_url: model.image_url,
        author: model.author,
        category: model.category,
        is_published: model.is_published,
        views: model.views,
        meta_description: model.meta_description,
        meta_keywords: model.meta_keywords,
        published_at: model.published_at.with_timezone(&Utc),
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(slugify("How to Plant a Thuja!"), "how-to-plant-a-thuja");
        assert_eq!(slugify("  Spring -- sale  "), "spring-sale");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
    }

    #[test]
    fn slug_strips_punctuation_between_words() {
        assert_eq!(slugify("Roses, tulips & lilies"), "roses-tulips-lilies");
        assert_eq!(slugify("a.b"), "ab");
    }

    #[test]
    fn slug_keeps_cyrillic() {
        assert_eq!(slugify("Як доглядати туї"), "як-доглядати-туї");
    }

    #[test]
    fn empty_slug_falls_back() {
        assert_eq!(slugify("!!!"), "post");
    }
}
