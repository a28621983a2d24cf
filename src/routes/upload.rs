use axum::extract::Multipart;

use crate::{
    dto::media::MediaUploadMeta,
    error::{AppError, AppResult},
    storage::IncomingFile,
};

/// Reads the `file` part and the optional `folder`, `alt_text` and `title`
/// text fields of an upload form.
pub async fn read_upload_form(
    mut multipart: Multipart,
) -> AppResult<(IncomingFile, MediaUploadMeta)> {
    let mut file = None;
    let mut meta = MediaUploadMeta::default();

    while let Some(field) = multipart.next_field().await.map_err(bad_form)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let original_name = field.file_name().unwrap_or("unknown").to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(bad_form)?;
                file = Some(IncomingFile {
                    original_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            "folder" => meta.folder = field.text().await.map_err(bad_form)?,
            "alt_text" => meta.alt_text = Some(field.text().await.map_err(bad_form)?),
            "title" => meta.title = Some(field.text().await.map_err(bad_form)?),
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::BadRequest("Missing file field".into()))?;
    Ok((file, meta))
}

fn bad_form(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::BadRequest(format!("Invalid upload: {}", err.body_text()))
}
