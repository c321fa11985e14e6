//! Media storage on the local filesystem
//!
//! Uploaded files live under `{root}/uploads` and are served by the API at
//! `/media/*`. The database only ever stores the relative path
//! (`/media/uploads/<name>`); absolute URLs are built on the way out.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use chrono::Utc;
use folio_common::{ServerConfig, StorageConfig};
use folio_core::traits::ImageRepository;
use folio_core::{DomainError, Image};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::error::ServiceResult;

/// URL prefix under which the storage root is served
pub const MEDIA_PREFIX: &str = "/media/";

/// Subdirectory of the storage root holding uploads
const UPLOAD_DIR: &str = "uploads";

/// Accepted image extensions, compared case-insensitively
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// A file written to storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Generated name on disk
    pub file_name: String,
    /// Relative path as stored in the database
    pub file_path: String,
    pub size: u64,
}

/// Filesystem root, public base URL and upload limit
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
    base_url: String,
    max_upload_bytes: u64,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>, base_url: &str, max_upload_bytes: u64) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            max_upload_bytes,
        }
    }

    pub fn from_config(storage: &StorageConfig, server: &ServerConfig) -> Self {
        Self::new(&storage.root, &server.base_url, storage.max_upload_bytes)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    /// Absolute URL for a stored path; values that are already URLs pass through
    pub fn public_url(&self, path: &str) -> String {
        if path.is_empty() || path.starts_with("http") {
            return path.to_string();
        }
        format!("{}{}", self.base_url, path)
    }

    /// Strip the base URL so only the relative path is persisted
    pub fn stored_path(&self, value: &str) -> String {
        value
            .strip_prefix(self.base_url.as_str())
            .unwrap_or(value)
            .to_string()
    }

    /// Lowercased extension with a leading dot, if it is an accepted image type
    pub fn validate_extension(file_name: &str) -> Result<String, DomainError> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            Ok(format!(".{ext}"))
        } else {
            Err(DomainError::UnsupportedFileType(file_name.to_string()))
        }
    }

    pub fn check_size(&self, size: u64) -> Result<(), DomainError> {
        if size > self.max_upload_bytes {
            return Err(DomainError::FileTooLarge {
                max: self.max_upload_bytes,
            });
        }
        Ok(())
    }

    /// Write an upload as `{root}/uploads/{unix_nanos}{ext}`
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn save_upload(&self, ext: &str, bytes: &[u8]) -> ServiceResult<StoredFile> {
        self.check_size(bytes.len() as u64)?;

        let dir = self.root.join(UPLOAD_DIR);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        let nanos = Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_else(|| Utc::now().timestamp_micros() * 1000);
        let file_name = format!("{nanos}{ext}");

        tokio::fs::write(dir.join(&file_name), bytes)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        info!(file_name = %file_name, "Upload stored");

        Ok(StoredFile {
            file_path: format!("{MEDIA_PREFIX}{UPLOAD_DIR}/{file_name}"),
            file_name,
            size: bytes.len() as u64,
        })
    }

    /// Map a stored `/media/...` path onto the storage root
    ///
    /// Returns `None` for paths that would escape the root.
    pub fn resolve(&self, stored: &str) -> Option<PathBuf> {
        let relative = self.stored_path(stored);
        let relative = relative
            .strip_prefix(MEDIA_PREFIX)
            .unwrap_or(relative.trim_start_matches('/'));
        let relative = Path::new(relative);

        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return None;
        }
        Some(self.root.join(relative))
    }

    /// Remove a stored file, tolerating a file that is already gone
    pub async fn remove(&self, stored: &str) {
        let Some(path) = self.resolve(stored) else {
            warn!(path = %stored, "Refusing to delete file outside storage root");
            return;
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(path = %path.display(), error = %e, "Failed to delete media file"),
        }
    }
}

/// Remove the file behind `file_path` once no image row references it
///
/// Must run after the caller's own rows are gone. Lookup failures keep the file.
async fn remove_if_unreferenced(repo: &dyn ImageRepository, media: &MediaStore, file_path: &str) {
    match repo.count_by_path(file_path).await {
        Ok(0) => media.remove(file_path).await,
        Ok(_) => {}
        Err(e) => warn!(path = %file_path, error = %e, "Skipping media cleanup"),
    }
}

/// Remove files of `old` images that no remaining row still uses
///
/// Called after an owner's image set was replaced or deleted.
pub(crate) async fn remove_dropped_files(
    repo: &dyn ImageRepository,
    media: &MediaStore,
    old: &[Image],
) {
    let mut seen: Vec<&str> = Vec::with_capacity(old.len());
    for image in old {
        if seen.contains(&image.file_path.as_str()) {
            continue;
        }
        seen.push(&image.file_path);
        remove_if_unreferenced(repo, media, &image.file_path).await;
    }
}

/// Delete an image row and, best effort, its file
///
/// A missing or undeletable file never blocks removal of the row. Files
/// still attached elsewhere are left in place.
pub async fn delete_image_with(
    repo: &dyn ImageRepository,
    media: &MediaStore,
    id: Uuid,
) -> ServiceResult<()> {
    let image = repo
        .find_by_id(id)
        .await?
        .ok_or(DomainError::ImageNotFound(id))?;

    repo.delete(id).await?;
    remove_if_unreferenced(repo, media, &image.file_path).await;

    info!(image_id = %id, "Image deleted");
    Ok(())
}
