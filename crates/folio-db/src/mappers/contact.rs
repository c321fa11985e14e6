//! Contact message entity <-> model mapper

use folio_core::entities::{ContactMessage, MessageStatus};
use folio_core::error::DomainError;

use crate::models::ContactMessageModel;

impl TryFrom<ContactMessageModel> for ContactMessage {
    type Error = DomainError;

    fn try_from(model: ContactMessageModel) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<MessageStatus>()
            .map_err(|_| DomainError::DatabaseError(format!("bad message status: {}", model.status)))?;

        Ok(ContactMessage {
            id: model.id,
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            status,
            created_at: model.created_at,
        })
    }
}
