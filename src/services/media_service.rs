use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    dto::{
        admin::ImageUploadResponse,
        media::{
            MediaFileList, MediaListQuery, MediaStats, MediaTypeCounts, MediaUploadMeta,
            UpdateMediaRequest,
        },
    },
    entity::media_files::{ActiveModel, Column, Entity as MediaFiles, Model as MediaModel},
    error::{AppError, AppResult},
    models::MediaFile,
    response::{ApiResponse, Meta},
    routes::params::clamp_offset,
    state::AppState,
    storage::{IncomingFile, MediaKind, UploadStore, format_megabytes},
};

const DEFAULT_LIMIT: u64 = 100;
const MAX_LIMIT: u64 = 1000;

pub async fn list_files(
    state: &AppState,
    query: MediaListQuery,
) -> AppResult<ApiResponse<MediaFileList>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = clamp_offset(query.offset);

    let mut finder = MediaFiles::find();
    if let Some(file_type) = query.file_type.filter(|t| !t.is_empty()) {
        finder = finder.filter(Column::FileType.eq(file_type));
    }
    if let Some(folder) = query.folder.filter(|f| !f.is_empty()) {
        finder = finder.filter(Column::Folder.eq(folder));
    }

    let items = finder
        .order_by_desc(Column::CreatedAt)
        .limit(limit)
        .offset(offset)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(media_from_entity)
        .collect();

    Ok(ApiResponse::success(
        "Media files",
        MediaFileList { items },
        Some(Meta::window(offset, limit)),
    ))
}

pub async fn get_file(state: &AppState, id: Uuid) -> AppResult<ApiResponse<MediaFile>> {
    let file = find_file(state, id).await?;
    Ok(ApiResponse::success("Media file", media_from_entity(file), None))
}

/// Stores the upload on disk and records it in the library. The file is
/// removed again when the row cannot be written.
pub async fn upload_file(
    state: &AppState,
    file: IncomingFile,
    meta: MediaUploadMeta,
    uploaded_by: &str,
) -> AppResult<ApiResponse<MediaFile>> {
    let store = UploadStore::from_config(&state.config);
    let stored = store.save(&file).await?;

    let title = meta
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| file.original_name.clone());
    let folder = if meta.folder.trim().is_empty() {
        MediaUploadMeta::default().folder
    } else {
        meta.folder
    };

    let record = ActiveModel {
        id: Set(Uuid::new_v4()),
        filename: Set(stored.filename.clone()),
        original_name: Set(file.original_name.clone()),
        url: Set(stored.url.clone()),
        file_type: Set(stored.kind.as_str().to_string()),
        mime_type: Set(Some(file.content_type.clone())),
        file_size: Set(Some(stored.size as i64)),
        alt_text: Set(meta.alt_text.filter(|a| !a.trim().is_empty())),
        title: Set(Some(title)),
        folder: Set(folder),
        uploaded_by: Set(uploaded_by.to_string()),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.orm)
    .await;

    let record = match record {
        Ok(record) => record,
        Err(err) => {
            if let Err(cleanup) = store.remove(&stored.filename).await {
                tracing::warn!(error = %cleanup, filename = %stored.filename, "orphaned upload left on disk");
            }
            return Err(err.into());
        }
    };
    tracing::info!(media_id = %record.id, filename = %record.filename, file_type = %record.file_type, "media uploaded");

    Ok(ApiResponse::success(
        "File uploaded successfully",
        media_from_entity(record),
        Some(Meta::empty()),
    ))
}

/// Image-only upload used by the admin product editor. Not recorded in the
/// media library.
pub async fn upload_image(
    state: &AppState,
    file: IncomingFile,
) -> AppResult<ApiResponse<ImageUploadResponse>> {
    if MediaKind::from_mime(&file.content_type) != Some(MediaKind::Image) {
        return Err(AppError::BadRequest("Only image files are allowed".into()));
    }

    let stored = UploadStore::from_config(&state.config).save(&file).await?;
    tracing::info!(filename = %stored.filename, "image uploaded");

    Ok(ApiResponse::success(
        "Image uploaded",
        ImageUploadResponse {
            url: stored.url,
            filename: stored.filename,
        },
        Some(Meta::empty()),
    ))
}

pub async fn update_file(
    state: &AppState,
    id: Uuid,
    payload: UpdateMediaRequest,
) -> AppResult<ApiResponse<MediaFile>> {
    let existing = find_file(state, id).await?;
    let mut active: ActiveModel = existing.into();

    if let Some(alt_text) = payload.alt_text {
        active.alt_text = Set(Some(alt_text));
    }
    if let Some(title) = payload.title {
        active.title = Set(Some(title));
    }
    if let Some(folder) = payload.folder.filter(|f| !f.trim().is_empty()) {
        active.folder = Set(folder);
    }

    let file = active.update(&state.orm).await?;
    Ok(ApiResponse::success(
        "File updated successfully",
        media_from_entity(file),
        Some(Meta::empty()),
    ))
}

/// Deletes the record and its file. A file already missing from disk does
/// not fail the request.
pub async fn delete_file(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let file = find_file(state, id).await?;

    let store = UploadStore::from_config(&state.config);
    if let Err(err) = store.remove(&file.filename).await {
        tracing::warn!(error = %err, filename = %file.filename, "could not delete media file");
    }

    MediaFiles::delete_by_id(file.id).exec(&state.orm).await?;
    tracing::info!(media_id = %id, "media deleted");

    Ok(ApiResponse::success(
        "File deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn stats(state: &AppState) -> AppResult<ApiResponse<MediaStats>> {
    let rows: Vec<(String, Option<i64>)> = MediaFiles::find()
        .select_only()
        .column(Column::FileType)
        .column(Column::FileSize)
        .into_tuple()
        .all(&state.orm)
        .await?;

    Ok(ApiResponse::success("Media stats", summarize(&rows), None))
}

fn summarize(rows: &[(String, Option<i64>)]) -> MediaStats {
    let mut by_type = MediaTypeCounts {
        images: 0,
        videos: 0,
        documents: 0,
    };
    let mut total_size = 0i64;

    for (file_type, size) in rows {
        total_size += size.unwrap_or(0);
        match file_type.as_str() {
            "image" => by_type.images += 1,
            "video" => by_type.videos += 1,
            "document" => by_type.documents += 1,
            _ => {}
        }
    }

    MediaStats {
        total_files: rows.len() as u64,
        total_size,
        total_size_formatted: format_megabytes(total_size),
        by_type,
    }
}

async fn find_file(state: &AppState, id: Uuid) -> AppResult<MediaModel> {
    MediaFiles::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound("File"))
}

fn media_from_entity(model: MediaModel) -> MediaFile {
    MediaFile {
        id: model.id,
        filename: model.filename,
        original_name: model.original_name,
        url: model.url,
        file_type: model.file_type,
        mime_type: model.mime_type,
        file_size: model.file_size,
        alt_text: model.alt_text,
        title: model.title,
        folder: model.folder,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::summarize;

    #[test]
    fn stats_count_by_type_and_size() {
        let rows = vec![
            ("image".to_string(), Some(1024 * 1024)),
            ("image".to_string(), Some(1024 * 1024)),
            ("document".to_string(), None),
            ("video".to_string(), Some(512 * 1024)),
        ];
        let stats = summarize(&rows);
        assert_eq!(stats.total_files, 4);
        assert_eq!(stats.by_type.images, 2);
        assert_eq!(stats.by_type.videos, 1);
        assert_eq!(stats.by_type.documents, 1);
        assert_eq!(stats.total_size, 2 * 1024 * 1024 + 512 * 1024);
        assert_eq!(stats.total_size_formatted, "2.50 MB");
    }
}
