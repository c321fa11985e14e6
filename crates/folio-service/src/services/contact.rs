//! Contact message service
//!
//! Visitors submit messages through the public form; the admin triages them.

use folio_core::{ContactMessage, DomainError, MessageStatus, PageRequest};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{ContactMessageResponse, CreateContactRequest, PaginatedResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct ContactService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContactService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn submit(&self, request: CreateContactRequest) -> ServiceResult<ContactMessageResponse> {
        let message = ContactMessage::new(
            request.name,
            request.email,
            request.subject,
            request.message,
        );
        self.ctx.contact_repo().create(&message).await?;

        info!(message_id = %message.id, "Contact message received");
        Ok(message.into())
    }

    /// Messages newest first, optionally only those with `status`
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        page: PageRequest,
        status: Option<MessageStatus>,
    ) -> ServiceResult<PaginatedResponse<ContactMessageResponse>> {
        let page = self.ctx.contact_repo().list(page, status).await?;
        Ok(page.map(ContactMessageResponse::from).into())
    }

    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: Uuid,
        status: MessageStatus,
    ) -> ServiceResult<ContactMessageResponse> {
        self.ctx.contact_repo().update_status(id, status).await?;
        let message = self
            .ctx
            .contact_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MessageNotFound(id))?;

        info!(message_id = %id, status = %status, "Message status changed");
        Ok(message.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.contact_repo().delete(id).await?;
        info!(message_id = %id, "Message deleted");
        Ok(())
    }
}
