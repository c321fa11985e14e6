//! PostgreSQL implementation of ExperienceRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use folio_core::entities::Experience;
use folio_core::error::DomainError;
use folio_core::traits::{ExperienceRepository, RepoResult};

use crate::models::ExperienceModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of ExperienceRepository
#[derive(Clone)]
pub struct PgExperienceRepository {
    pool: PgPool,
}

impl PgExperienceRepository {
    /// Create a new PgExperienceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExperienceRepository for PgExperienceRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Experience>> {
        let models = sqlx::query_as::<_, ExperienceModel>(
            r"
            SELECT id, profile_id, company, position, description, start_date, end_date,
                   is_current, created_at, updated_at
            FROM experiences
            ORDER BY start_date DESC, created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Experience::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_profile(&self, profile_id: Uuid) -> RepoResult<Vec<Experience>> {
        let models = sqlx::query_as::<_, ExperienceModel>(
            r"
            SELECT id, profile_id, company, position, description, start_date, end_date,
                   is_current, created_at, updated_at
            FROM experiences
            WHERE profile_id = $1
            ORDER BY start_date DESC, created_at DESC
            ",
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Experience::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Experience>> {
        let result = sqlx::query_as::<_, ExperienceModel>(
            r"
            SELECT id, profile_id, company, position, description, start_date, end_date,
                   is_current, created_at, updated_at
            FROM experiences
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Experience::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, experience: &Experience) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO experiences (id, profile_id, company, position, description, start_date,
                                     end_date, is_current, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(experience.id)
        .bind(experience.profile_id)
        .bind(&experience.company)
        .bind(&experience.position)
        .bind(&experience.description)
        .bind(experience.start_date)
        .bind(experience.end_date)
        .bind(experience.is_current)
        .bind(experience.created_at)
        .bind(experience.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_foreign_key_violation)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, experience: &Experience) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE experiences
            SET company = $2, position = $3, description = $4, start_date = $5,
                end_date = $6, is_current = $7, updated_at = $8
            WHERE id = $1
            ",
        )
        .bind(experience.id)
        .bind(&experience.company)
        .bind(&experience.position)
        .bind(&experience.description)
        .bind(experience.start_date)
        .bind(experience.end_date)
        .bind(experience.is_current)
        .bind(experience.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ExperienceNotFound(experience.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ExperienceNotFound(id));
        }

        Ok(())
    }
}
