use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::MediaFile;

#[derive(Debug, Default, Deserialize)]
pub struct MediaListQuery {
    pub file_type: Option<String>,
    pub folder: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMediaRequest {
    pub alt_text: Option<String>,
    pub title: Option<String>,
    pub folder: Option<String>,
}

/// Form fields accompanying an uploaded file.
#[derive(Debug, Clone)]
pub struct MediaUploadMeta {
    pub folder: String,
    pub alt_text: Option<String>,
    pub title: Option<String>,
}

impl Default for MediaUploadMeta {
    fn default() -> Self {
        Self {
            folder: "general".to_string(),
            alt_text: None,
            title: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MediaTypeCounts {
    pub images: u64,
    pub videos: u64,
    pub documents: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MediaStats {
    pub total_files: u64,
    pub total_size: i64,
    pub total_size_formatted: String,
    pub by_type: MediaTypeCounts,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct MediaFileList {
    #[schema(value_type = Vec<MediaFile>)]
    pub items: Vec<MediaFile>,
}
