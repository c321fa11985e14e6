//! Image entity <-> model mapper
//!
//! The owner columns are validated on the way out since the table has no
//! foreign key for them.

use folio_core::entities::Image;
use folio_core::error::DomainError;
use folio_core::value_objects::ImageOwner;

use crate::models::ImageModel;

impl TryFrom<ImageModel> for Image {
    type Error = DomainError;

    fn try_from(model: ImageModel) -> Result<Self, Self::Error> {
        Ok(Image {
            id: model.id,
            owner: ImageOwner::from_parts(&model.entity_type, model.entity_id)?,
            file_name: model.file_name,
            file_path: model.file_path,
            mime_type: model.mime_type,
            size: model.size,
            alt_text: model.alt_text,
            is_primary: model.is_primary,
            order_index: model.order_index,
            created_at: model.created_at,
        })
    }
}

/// Convert a batch of rows, failing on the first malformed owner
pub fn images_from_models(models: Vec<ImageModel>) -> Result<Vec<Image>, DomainError> {
    models.into_iter().map(Image::try_from).collect()
}
