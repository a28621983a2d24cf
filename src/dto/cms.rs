use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{FooterLink, PageContent};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePageRequest {
    pub page_key: String,
    pub title: String,
    pub content: String,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePageRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct HeroSectionRequest {
    pub title: String,
    pub subtitle: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub background_image: Option<String>,
}

fn active() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFooterLinkRequest {
    pub section: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "active")]
    pub is_active: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateFooterLinkRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct PageList {
    #[schema(value_type = Vec<PageContent>)]
    pub items: Vec<PageContent>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FooterLinkList {
    #[schema(value_type = Vec<FooterLink>)]
    pub items: Vec<FooterLink>,
}
