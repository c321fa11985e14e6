//! PostgreSQL implementation of ContactRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use folio_core::entities::{ContactMessage, MessageStatus};
use folio_core::error::DomainError;
use folio_core::traits::{ContactRepository, RepoResult};
use folio_core::value_objects::{Page, PageRequest};

use crate::models::ContactMessageModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ContactRepository
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    /// Create a new PgContactRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn create(&self, message: &ContactMessage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO contact_messages (id, name, email, subject, message, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(message.id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.subject)
        .bind(&message.message)
        .bind(message.status.as_str())
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ContactMessage>> {
        let result = sqlx::query_as::<_, ContactMessageModel>(
            r"
            SELECT id, name, email, subject, message, status, created_at
            FROM contact_messages
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ContactMessage::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        page: PageRequest,
        status: Option<MessageStatus>,
    ) -> RepoResult<Page<ContactMessage>> {
        let status = status.map(|s| s.as_str());

        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM contact_messages WHERE ($1::text IS NULL OR status = $1)
            ",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let models = sqlx::query_as::<_, ContactMessageModel>(
            r"
            SELECT id, name, email, subject, message, status, created_at
            FROM contact_messages
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(status)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let messages = models
            .into_iter()
            .map(ContactMessage::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(messages, total, page))
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: Uuid, status: MessageStatus) -> RepoResult<()> {
        let result = sqlx::query("UPDATE contact_messages SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MessageNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MessageNotFound(id));
        }

        Ok(())
    }
}
