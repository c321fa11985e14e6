//! PostgreSQL implementation of SkillRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use folio_core::entities::Skill;
use folio_core::error::DomainError;
use folio_core::traits::{RepoResult, SkillRepository};
use folio_core::value_objects::{Page, PageRequest};

use crate::models::SkillModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of SkillRepository
#[derive(Clone)]
pub struct PgSkillRepository {
    pool: PgPool,
}

impl PgSkillRepository {
    /// Create a new PgSkillRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillRepository for PgSkillRepository {
    #[instrument(skip(self))]
    async fn list(&self, page: PageRequest) -> RepoResult<Page<Skill>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM skills")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let models = sqlx::query_as::<_, SkillModel>(
            r"
            SELECT id, name, category, icon_url
            FROM skills
            ORDER BY category ASC, name ASC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            models.into_iter().map(Skill::from).collect(),
            total,
            page,
        ))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Skill>> {
        let result = sqlx::query_as::<_, SkillModel>(
            r"
            SELECT id, name, category, icon_url FROM skills WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Skill::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, skill: &Skill) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO skills (id, name, category, icon_url)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(skill.id)
        .bind(&skill.name)
        .bind(&skill.category)
        .bind(&skill.icon_url)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SkillNameExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, skill: &Skill) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE skills
            SET name = $2, category = $3, icon_url = $4
            WHERE id = $1
            ",
        )
        .bind(skill.id)
        .bind(&skill.name)
        .bind(&skill.category)
        .bind(&skill.icon_url)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SkillNameExists))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SkillNotFound(skill.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SkillNotFound(id));
        }

        Ok(())
    }
}
