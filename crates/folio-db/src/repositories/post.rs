//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;
use uuid::Uuid;

use folio_core::entities::{Image, Post, Tag};
use folio_core::error::DomainError;
use folio_core::traits::{PostRepository, RepoResult};
use folio_core::value_objects::{ImageOwner, Page, PageRequest};

use crate::models::{PostModel, TagModel};

use super::error::{map_db_error, map_foreign_key_violation, map_unique_violation};
use super::image::{delete_images, insert_images, replace_images};

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn replace_tags(conn: &mut PgConnection, post_id: Uuid, tag_ids: &[Uuid]) -> RepoResult<()> {
    sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
        .bind(post_id)
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;

    if tag_ids.is_empty() {
        return Ok(());
    }

    sqlx::query(
        r"
        INSERT INTO post_tags (post_id, tag_id)
        SELECT $1, UNNEST($2::uuid[])
        ON CONFLICT DO NOTHING
        ",
    )
    .bind(post_id)
    .bind(tag_ids)
    .execute(&mut *conn)
    .await
    .map_err(map_foreign_key_violation)?;

    Ok(())
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest, published_only: bool) -> RepoResult<Page<Post>> {
        // `$1 = FALSE` disables the filter
        let total = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM posts WHERE ($1 = FALSE OR is_published = TRUE)
            ",
        )
        .bind(published_only)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let models = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, title, slug, content_markdown, summary, is_published, published_at,
                   created_at, updated_at
            FROM posts
            WHERE ($1 = FALSE OR is_published = TRUE)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(published_only)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            models.into_iter().map(Post::from).collect(),
            total,
            page,
        ))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, title, slug, content_markdown, summary, is_published, published_at,
                   created_at, updated_at
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, title, slug, content_markdown, summary, is_published, published_at,
                   created_at, updated_at
            FROM posts
            WHERE slug = $1
            ",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn tags(&self, post_id: Uuid) -> RepoResult<Vec<Tag>> {
        let models = sqlx::query_as::<_, TagModel>(
            r"
            SELECT t.id, t.name, t.slug
            FROM tags t
            INNER JOIN post_tags pt ON pt.tag_id = t.id
            WHERE pt.post_id = $1
            ORDER BY t.name ASC
            ",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Tag::from).collect())
    }

    #[instrument(skip(self, images), fields(post_id = %post.id))]
    async fn create(&self, post: &Post, tag_ids: &[Uuid], images: &[Image]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO posts (id, title, slug, content_markdown, summary, is_published,
                               published_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content_markdown)
        .bind(&post.summary)
        .bind(post.is_published)
        .bind(post.published_at)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::SlugAlreadyExists(post.slug.clone()))
        })?;

        replace_tags(&mut *tx, post.id, tag_ids).await?;
        insert_images(&mut *tx, ImageOwner::Post(post.id), images).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, images), fields(post_id = %post.id))]
    async fn update(
        &self,
        post: &Post,
        tag_ids: Option<&[Uuid]>,
        images: Option<&[Image]>,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE posts
            SET title = $2, slug = $3, content_markdown = $4, summary = $5,
                is_published = $6, published_at = $7, updated_at = $8
            WHERE id = $1
            ",
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content_markdown)
        .bind(&post.summary)
        .bind(post.is_published)
        .bind(post.published_at)
        .bind(post.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::SlugAlreadyExists(post.slug.clone()))
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PostNotFound(post.id.to_string()));
        }

        if let Some(tag_ids) = tag_ids {
            replace_tags(&mut *tx, post.id, tag_ids).await?;
        }
        if let Some(images) = images {
            replace_images(&mut *tx, ImageOwner::Post(post.id), images).await?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        delete_images(&mut *tx, ImageOwner::Post(id)).await?;

        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PostNotFound(id.to_string()));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
