use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::cms::{
        CreateFooterLinkRequest, CreatePageRequest, CreatedResponse, FooterLinkList,
        HeroSectionRequest, PageList, UpdateFooterLinkRequest, UpdatePageRequest,
    },
    entity::{
        footer_links::{ActiveModel as LinkActive, Column as LinkCol, Entity as FooterLinks, Model as LinkModel},
        hero_sections::{ActiveModel as HeroActive, Entity as HeroSections, Model as HeroModel},
        page_contents::{ActiveModel as PageActive, Column as PageCol, Entity as PageContents, Model as PageModel},
    },
    error::{AppError, AppResult},
    models::{FooterLink, HeroSection, PageContent},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub const HERO_ROW_ID: &str = "main";

pub async fn list_pages(state: &AppState) -> AppResult<ApiResponse<PageList>> {
    let items = PageContents::find()
        .order_by_asc(PageCol::PageKey)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(page_from_entity)
        .collect();
    Ok(ApiResponse::success("Pages", PageList { items }, None))
}

pub async fn get_page(state: &AppState, page_key: &str) -> AppResult<ApiResponse<PageContent>> {
    let page = find_page(state, page_key).await?;
    Ok(ApiResponse::success("Page", page_from_entity(page), None))
}

pub async fn create_page(
    state: &AppState,
    payload: CreatePageRequest,
) -> AppResult<ApiResponse<CreatedResponse>> {
    let page_key = payload.page_key.trim().to_string();
    if page_key.is_empty() {
        return Err(AppError::BadRequest("page_key is required".into()));
    }

    let existing = PageContents::find()
        .filter(PageCol::PageKey.eq(page_key.as_str()))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(format!("Page with key {page_key} already exists")));
    }

    let page = PageActive {
        id: Set(Uuid::new_v4()),
        page_key: Set(page_key),
        title: Set(payload.title),
        content: Set(payload.content),
        meta_description: Set(payload.meta_description),
        meta_keywords: Set(payload.meta_keywords),
        updated_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;
    tracing::info!(page_key = %page.page_key, "page created");

    Ok(ApiResponse::success(
        "Page created successfully",
        CreatedResponse { id: page.id },
        Some(Meta::empty()),
    ))
}

pub async fn update_page(
    state: &AppState,
    page_key: &str,
    payload: UpdatePageRequest,
) -> AppResult<ApiResponse<PageContent>> {
    let existing = find_page(state, page_key).await?;
    let mut active: PageActive = existing.into();

    if let Some(title) = payload.title {
        active.title = Set(title);
    }
    if let Some(content) = payload.content {
        active.content = Set(content);
    }
    if let Some(meta_description) = payload.meta_description {
        active.meta_description = Set(Some(meta_description));
    }
    if let Some(meta_keywords) = payload.meta_keywords {
        active.meta_keywords = Set(Some(meta_keywords));
    }
    active.updated_at = Set(Utc::now().into());

    let page = active.update(&state.orm).await?;
    Ok(ApiResponse::success(
        "Page updated successfully",
        page_from_entity(page),
        Some(Meta::empty()),
    ))
}

pub async fn delete_page(
    state: &AppState,
    page_key: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = PageContents::delete_many()
        .filter(PageCol::PageKey.eq(page_key))
        .exec(&state.orm)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Page"));
    }

    Ok(ApiResponse::success(
        "Page deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn get_hero(state: &AppState) -> AppResult<ApiResponse<HeroSection>> {
    let hero = HeroSections::find_by_id(HERO_ROW_ID.to_string())
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Hero section"))?;
    Ok(ApiResponse::success("Hero section", hero_from_entity(hero), None))
}

/// Replaces the single hero row, creating it on first use.
pub async fn save_hero(
    state: &AppState,
    payload: HeroSectionRequest,
) -> AppResult<ApiResponse<HeroSection>> {
    let existing = HeroSections::find_by_id(HERO_ROW_ID.to_string())
        .one(&state.orm)
        .await?;

    let is_new = existing.is_none();
    let mut active: HeroActive = match existing {
        Some(hero) => hero.into(),
        None => HeroActive {
            id: Set(HERO_ROW_ID.to_string()),
            ..Default::default()
        },
    };
    active.title = Set(payload.title);
    active.subtitle = Set(payload.subtitle);
    active.button_text = Set(payload.button_text);
    active.button_link = Set(payload.button_link);
    active.background_image = Set(payload.background_image);
    active.updated_at = Set(Utc::now().into());

    let hero = if is_new {
        active.insert(&state.orm).await?
    } else {
        active.update(&state.orm).await?
    };

    Ok(ApiResponse::success(
        "Hero section updated successfully",
        hero_from_entity(hero),
        Some(Meta::empty()),
    ))
}

pub async fn list_footer_links(state: &AppState) -> AppResult<ApiResponse<FooterLinkList>> {
    let items = FooterLinks::find()
        .order_by_asc(LinkCol::Section)
        .order_by_asc(LinkCol::SortOrder)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(footer_link_from_entity)
        .collect();
    Ok(ApiResponse::success("Footer links", FooterLinkList { items }, None))
}

pub async fn create_footer_link(
    state: &AppState,
    payload: CreateFooterLinkRequest,
) -> AppResult<ApiResponse<CreatedResponse>> {
    let link = LinkActive {
        id: Set(Uuid::new_v4()),
        section: Set(payload.section),
        title: Set(payload.title),
        url: Set(payload.url),
        sort_order: Set(payload.order),
        is_active: Set(payload.is_active),
        updated_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Footer link created successfully",
        CreatedResponse { id: link.id },
        Some(Meta::empty()),
    ))
}

pub async fn update_footer_link(
    state: &AppState,
    id: Uuid,
    payload: UpdateFooterLinkRequest,
) -> AppResult<ApiResponse<FooterLink>> {
    let existing = FooterLinks::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Footer link"))?;

    let mut active: LinkActive = existing.into();
    if let Some(title) = payload.title {
        active.title = Set(title);
    }
    if let Some(url) = payload.url {
        active.url = Set(url);
    }
    if let Some(order) = payload.order {
        active.sort_order = Set(order);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    active.updated_at = Set(Utc::now().into());

    let link = active.update(&state.orm).await?;
    Ok(ApiResponse::success(
        "Footer link updated successfully",
        footer_link_from_entity(link),
        Some(Meta::empty()),
    ))
}

pub async fn delete_footer_link(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = FooterLinks::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Footer link"));
    }
    Ok(ApiResponse::success(
        "Footer link deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn find_page(state: &AppState, page_key: &str) -> AppResult<PageModel> {
    PageContents::find()
        .filter(PageCol::PageKey.eq(page_key))
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("Page"))
}

fn page_from_entity(model: PageModel) -> PageContent {
    PageContent {
        id: model.id,
        page_key: model.page_key,
        title: model.title,
        content: model.content,
        meta_description: model.meta_description,
        meta_keywords: model.meta_keywords,
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn hero_from_entity(model: HeroModel) -> HeroSection {
    HeroSection {
        id: model.id,
        title: model.title,
        subtitle: model.subtitle,
        button_text: model.button_text,
        button_link: model.button_link,
        background_image: model.background_image,
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn footer_link_from_entity(model: LinkModel) -> FooterLink {
    FooterLink {
        id: model.id,
        section: model.section,
        title: model.title,
        url: model.url,
        order: model.sort_order,
        is_active: model.is_active,
    }
}
