//! PostgreSQL implementation of ProjectRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;
use uuid::Uuid;

use folio_core::entities::{Image, Project, Skill};
use folio_core::error::DomainError;
use folio_core::traits::{ProjectRepository, RepoResult};
use folio_core::value_objects::{ImageOwner, Page, PageRequest};

use crate::models::{ProjectModel, SkillModel};

use super::error::{map_db_error, map_foreign_key_violation, map_unique_violation};
use super::image::{delete_images, insert_images, replace_images};

/// PostgreSQL implementation of ProjectRepository
#[derive(Clone)]
pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    /// Create a new PgProjectRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn replace_skills(
    conn: &mut PgConnection,
    project_id: Uuid,
    skill_ids: &[Uuid],
) -> RepoResult<()> {
    sqlx::query("DELETE FROM project_skills WHERE project_id = $1")
        .bind(project_id)
        .execute(&mut *conn)
        .await
        .map_err(map_db_error)?;

    if skill_ids.is_empty() {
        return Ok(());
    }

    sqlx::query(
        r"
        INSERT INTO project_skills (project_id, skill_id)
        SELECT $1, UNNEST($2::uuid[])
        ON CONFLICT DO NOTHING
        ",
    )
    .bind(project_id)
    .bind(skill_ids)
    .execute(&mut *conn)
    .await
    .map_err(map_foreign_key_violation)?;

    Ok(())
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest) -> RepoResult<Page<Project>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let models = sqlx::query_as::<_, ProjectModel>(
            r"
            SELECT id, title, slug, description, content_markdown, demo_url, repo_url,
                   start_date, end_date, is_featured, experience_id, created_at, updated_at
            FROM projects
            ORDER BY start_date DESC NULLS LAST, created_at DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            models.into_iter().map(Project::from).collect(),
            total,
            page,
        ))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Project>> {
        let result = sqlx::query_as::<_, ProjectModel>(
            r"
            SELECT id, title, slug, description, content_markdown, demo_url, repo_url,
                   start_date, end_date, is_featured, experience_id, created_at, updated_at
            FROM projects
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Project::from))
    }

    #[instrument(skip(self))]
    async fn list_by_experience(&self, experience_id: Uuid) -> RepoResult<Vec<Project>> {
        let models = sqlx::query_as::<_, ProjectModel>(
            r"
            SELECT id, title, slug, description, content_markdown, demo_url, repo_url,
                   start_date, end_date, is_featured, experience_id, created_at, updated_at
            FROM projects
            WHERE experience_id = $1
            ORDER BY start_date DESC NULLS LAST, created_at DESC
            ",
        )
        .bind(experience_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Project::from).collect())
    }

    #[instrument(skip(self))]
    async fn skills(&self, project_id: Uuid) -> RepoResult<Vec<Skill>> {
        let models = sqlx::query_as::<_, SkillModel>(
            r"
            SELECT s.id, s.name, s.category, s.icon_url
            FROM skills s
            INNER JOIN project_skills ps ON ps.skill_id = s.id
            WHERE ps.project_id = $1
            ORDER BY s.name ASC
            ",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Skill::from).collect())
    }

    #[instrument(skip(self, images), fields(project_id = %project.id))]
    async fn create(
        &self,
        project: &Project,
        skill_ids: &[Uuid],
        images: &[Image],
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO projects (id, title, slug, description, content_markdown, demo_url, repo_url,
                                  start_date, end_date, is_featured, experience_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ",
        )
        .bind(project.id)
        .bind(&project.title)
        .bind(&project.slug)
        .bind(&project.description)
        .bind(&project.content_markdown)
        .bind(&project.demo_url)
        .bind(&project.repo_url)
        .bind(project.start_date)
        .bind(project.end_date)
        .bind(project.is_featured)
        .bind(project.experience_id)
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::SlugAlreadyExists(project.slug.clone()))
        })?;

        replace_skills(&mut *tx, project.id, skill_ids).await?;
        insert_images(&mut *tx, ImageOwner::Project(project.id), images).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, images), fields(project_id = %project.id))]
    async fn update(
        &self,
        project: &Project,
        skill_ids: Option<&[Uuid]>,
        images: Option<&[Image]>,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE projects
            SET title = $2, slug = $3, description = $4, content_markdown = $5, demo_url = $6,
                repo_url = $7, start_date = $8, end_date = $9, is_featured = $10,
                experience_id = $11, updated_at = $12
            WHERE id = $1
            ",
        )
        .bind(project.id)
        .bind(&project.title)
        .bind(&project.slug)
        .bind(&project.description)
        .bind(&project.content_markdown)
        .bind(&project.demo_url)
        .bind(&project.repo_url)
        .bind(project.start_date)
        .bind(project.end_date)
        .bind(project.is_featured)
        .bind(project.experience_id)
        .bind(project.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::SlugAlreadyExists(project.slug.clone()))
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProjectNotFound(project.id.to_string()));
        }

        if let Some(skill_ids) = skill_ids {
            replace_skills(&mut *tx, project.id, skill_ids).await?;
        }
        if let Some(images) = images {
            replace_images(&mut *tx, ImageOwner::Project(project.id), images).await?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        delete_images(&mut *tx, ImageOwner::Project(id)).await?;

        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProjectNotFound(id.to_string()));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
