//! PostgreSQL implementation of TagRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use folio_core::entities::Tag;
use folio_core::error::DomainError;
use folio_core::traits::{RepoResult, TagRepository};

use crate::models::TagModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of TagRepository
#[derive(Clone)]
pub struct PgTagRepository {
    pool: PgPool,
}

impl PgTagRepository {
    /// Create a new PgTagRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Tag>> {
        let models = sqlx::query_as::<_, TagModel>("SELECT id, name, slug FROM tags ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(models.into_iter().map(Tag::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_or_create(&self, tag: &Tag) -> RepoResult<Tag> {
        // The no-op update makes RETURNING yield the existing row on conflict
        let model = sqlx::query_as::<_, TagModel>(
            r"
            INSERT INTO tags (id, name, slug)
            VALUES ($1, $2, $3)
            ON CONFLICT (slug) DO UPDATE SET slug = EXCLUDED.slug
            RETURNING id, name, slug
            ",
        )
        .bind(tag.id)
        .bind(&tag.name)
        .bind(&tag.slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TagAlreadyExists))?;

        Ok(Tag::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::TagNotFound(id));
        }

        Ok(())
    }
}
