//! Image upload and deletion handlers

use axum::extract::{Multipart, State};
use folio_service::dto::UploadResponse;
use folio_service::{ImageService, MediaStore};

use crate::extractors::{AuthUser, IdPath};
use crate::response::{ApiError, ApiResponse, ApiResult, Created};
use crate::state::AppState;

/// Name of the multipart field carrying the file
pub const UPLOAD_FIELD: &str = "file";

/// Store one image from a multipart form
///
/// The extension is checked before any bytes are read and the size limit is
/// enforced while streaming, so rejected files are never fully buffered.
///
/// POST /api/admin/images/upload
pub async fn upload_image(
    State(state): State<AppState>,
    _auth: AuthUser,
    mut multipart: Multipart,
) -> ApiResult<Created<ApiResponse<UploadResponse>>> {
    let media = state.service_context().media();

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_body(format!("Invalid multipart data: {}", e.body_text())))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        MediaStore::validate_extension(&file_name)?;
        let content_type = field.content_type().map(str::to_string);

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| ApiError::invalid_body(format!("Failed to read file: {}", e.body_text())))?
        {
            media.check_size((bytes.len() + chunk.len()) as u64)?;
            bytes.extend_from_slice(&chunk);
        }

        let uploaded = ImageService::new(state.service_context())
            .upload(&file_name, content_type.as_deref(), &bytes)
            .await?;
        return Ok(Created(ApiResponse::new("File uploaded successfully", uploaded)));
    }

    Err(ApiError::invalid_body(format!(
        "multipart field '{UPLOAD_FIELD}' is required"
    )))
}

/// Drop an image record; a missing file on disk is not an error
///
/// DELETE /api/admin/images/:id
pub async fn delete_image(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiResponse<()>> {
    ImageService::new(state.service_context()).delete(id).await?;
    Ok(ApiResponse::message("Image deleted successfully"))
}
