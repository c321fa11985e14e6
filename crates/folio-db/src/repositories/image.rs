//! PostgreSQL implementation of ImageRepository
//!
//! Also holds the owner-scoped helpers used inside post and project
//! transactions.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;
use uuid::Uuid;

use folio_core::entities::Image;
use folio_core::error::DomainError;
use folio_core::traits::{ImageRepository, RepoResult};
use folio_core::value_objects::ImageOwner;

use crate::mappers::images_from_models;
use crate::models::ImageModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ImageRepository
#[derive(Clone)]
pub struct PgImageRepository {
    pool: PgPool,
}

impl PgImageRepository {
    /// Create a new PgImageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageRepository for PgImageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Image>> {
        let result = sqlx::query_as::<_, ImageModel>(
            r"
            SELECT id, entity_type, entity_id, file_name, file_path, mime_type, size,
                   alt_text, is_primary, order_index, created_at
            FROM images
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Image::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_by_owner(&self, owner: ImageOwner) -> RepoResult<Vec<Image>> {
        let models = sqlx::query_as::<_, ImageModel>(
            r"
            SELECT id, entity_type, entity_id, file_name, file_path, mime_type, size,
                   alt_text, is_primary, order_index, created_at
            FROM images
            WHERE entity_type = $1 AND entity_id = $2
            ORDER BY order_index ASC, created_at ASC
            ",
        )
        .bind(owner.kind())
        .bind(owner.id())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        images_from_models(models)
    }

    #[instrument(skip(self))]
    async fn count_by_path(&self, file_path: &str) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM images WHERE file_path = $1")
            .bind(file_path)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ImageNotFound(id));
        }

        Ok(())
    }
}

/// Insert image rows for `owner`
///
/// Every image must already carry `owner`; mismatches are rejected so a
/// caller cannot attach rows to a record outside the current transaction.
pub(crate) async fn insert_images(
    conn: &mut PgConnection,
    owner: ImageOwner,
    images: &[Image],
) -> RepoResult<()> {
    for image in images {
        if image.owner != owner {
            return Err(DomainError::InternalError(format!(
                "image {} belongs to {}, not {owner}",
                image.id, image.owner
            )));
        }

        sqlx::query(
            r"
            INSERT INTO images (id, entity_type, entity_id, file_name, file_path, mime_type,
                                size, alt_text, is_primary, order_index, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(image.id)
        .bind(owner.kind())
        .bind(owner.id())
        .bind(&image.file_name)
        .bind(&image.file_path)
        .bind(&image.mime_type)
        .bind(image.size)
        .bind(&image.alt_text)
        .bind(image.is_primary)
        .bind(image.order_index)
        .bind(image.created_at)
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;
    }

    Ok(())
}

/// Remove every image row of `owner`
pub(crate) async fn delete_images(conn: &mut PgConnection, owner: ImageOwner) -> RepoResult<()> {
    sqlx::query("DELETE FROM images WHERE entity_type = $1 AND entity_id = $2")
        .bind(owner.kind())
        .bind(owner.id())
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;

    Ok(())
}

/// Replace the image rows of `owner` with `images`
pub(crate) async fn replace_images(
    conn: &mut PgConnection,
    owner: ImageOwner,
    images: &[Image],
) -> RepoResult<()> {
    delete_images(conn, owner).await?;
    insert_images(conn, owner, images).await
}
