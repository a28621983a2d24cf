use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
};

pub const PUBLIC_PREFIX: &str = "/uploads";

const IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
];
const VIDEO_TYPES: &[&str] = &["video/mp4", "video/webm", "video/ogg"];
const DOCUMENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Document,
}

impl MediaKind {
    /// Classifies a MIME type against the upload allow-list.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_ascii_lowercase();
        if IMAGE_TYPES.contains(&mime.as_str()) {
            Some(MediaKind::Image)
        } else if VIDEO_TYPES.contains(&mime.as_str()) {
            Some(MediaKind::Video)
        } else if DOCUMENT_TYPES.contains(&mime.as_str()) {
            Some(MediaKind::Document)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Document => "document",
        }
    }
}

/// A file received from a multipart form, not yet validated.
#[derive(Debug)]
pub struct IncomingFile {
    pub original_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct StoredFile {
    pub filename: String,
    pub url: String,
    pub kind: MediaKind,
    pub size: usize,
}

/// Local directory holding uploaded files, served under `/uploads`.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
    max_bytes: usize,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            root: root.into(),
            max_bytes,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.upload_dir.clone(), config.max_upload_bytes)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Checks type and size, then writes the file under a fresh unique name.
    pub async fn save(&self, file: &IncomingFile) -> AppResult<StoredFile> {
        let kind = MediaKind::from_mime(&file.content_type).ok_or_else(|| {
            AppError::BadRequest("File type not allowed. Allowed: images, videos, PDFs".into())
        })?;
        self.check_size(file.bytes.len())?;

        tokio::fs::create_dir_all(&self.root).await?;
        let filename = unique_name(&file.original_name);
        tokio::fs::write(self.root.join(&filename), &file.bytes).await?;
        tracing::debug!(filename = %filename, size = file.bytes.len(), "upload stored");

        Ok(StoredFile {
            url: public_url(&filename),
            filename,
            kind,
            size: file.bytes.len(),
        })
    }

    pub fn check_size(&self, len: usize) -> AppResult<()> {
        if len > self.max_bytes {
            return Err(AppError::BadRequest(format!(
                "File too large. Maximum size is {}MB",
                self.max_bytes / (1024 * 1024)
            )));
        }
        Ok(())
    }

    /// Removes a stored file. A file that is already gone is logged and
    /// reported as `false`.
    pub async fn remove(&self, filename: &str) -> AppResult<bool> {
        let Some(name) = Path::new(filename).file_name() else {
            tracing::warn!(filename = %filename, "refusing to delete upload with no file name");
            return Ok(false);
        };

        match tokio::fs::remove_file(self.root.join(name)).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(filename = %filename, "upload already missing on disk");
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }
}

pub fn public_url(filename: &str) -> String {
    format!("{PUBLIC_PREFIX}/{filename}")
}

/// `<uuid><ext>`, keeping a short alphanumeric extension of the original name.
fn unique_name(original_name: &str) -> String {
    let ext = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default();
    format!("{}{}", Uuid::new_v4(), ext)
}

/// Human readable size in megabytes, two decimals.
pub fn format_megabytes(bytes: i64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}
