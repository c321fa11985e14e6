//! Image service: uploads and deletion of attached images

use tracing::instrument;
use uuid::Uuid;

use crate::dto::UploadResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::media::{delete_image_with, MediaStore};

pub struct ImageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ImageService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store an uploaded image file
    ///
    /// The content type sent with the part wins; otherwise it is guessed
    /// from the extension.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload(
        &self,
        original_name: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> ServiceResult<UploadResponse> {
        let media = self.ctx.media();
        let ext = MediaStore::validate_extension(original_name)?;
        let stored = media.save_upload(&ext, bytes).await?;

        let mime_type = content_type
            .filter(|ct| !ct.is_empty())
            .map_or_else(
                || mime_guess::from_path(&stored.file_name).first_or_octet_stream().to_string(),
                str::to_string,
            );

        Ok(UploadResponse {
            url: media.public_url(&stored.file_path),
            file_name: stored.file_name,
            file_path: stored.file_path,
            mime_type,
            size: stored.size,
        })
    }

    /// Delete an image row; the file goes too when it can
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        delete_image_with(self.ctx.image_repo(), self.ctx.media(), id).await
    }
}
