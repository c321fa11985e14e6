//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use folio_core::entities::{Profile, Skill, SocialLink};
use folio_core::traits::{ProfileRepository, RepoResult};

use crate::models::{ProfileModel, SkillModel, SocialLinkModel};

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_first(&self) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT id, user_id, full_name, bio, avatar_url, resume_url, created_at, updated_at
            FROM profiles
            ORDER BY created_at ASC
            LIMIT 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT id, user_id, full_name, bio, avatar_url, resume_url, created_at, updated_at
            FROM profiles
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn social_links(&self, profile_id: Uuid) -> RepoResult<Vec<SocialLink>> {
        let models = sqlx::query_as::<_, SocialLinkModel>(
            r"
            SELECT id, profile_id, platform, url, order_index
            FROM social_links
            WHERE profile_id = $1
            ORDER BY order_index ASC
            ",
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(SocialLink::from).collect())
    }

    #[instrument(skip(self))]
    async fn skills(&self, profile_id: Uuid) -> RepoResult<Vec<Skill>> {
        let models = sqlx::query_as::<_, SkillModel>(
            r"
            SELECT s.id, s.name, s.category, s.icon_url
            FROM skills s
            INNER JOIN profile_skills ps ON ps.skill_id = s.id
            WHERE ps.profile_id = $1
            ORDER BY s.name ASC
            ",
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Skill::from).collect())
    }

    #[instrument(skip(self, social_links, skill_ids), fields(profile_id = %profile.id))]
    async fn save(
        &self,
        profile: &Profile,
        social_links: Option<&[SocialLink]>,
        skill_ids: Option<&[Uuid]>,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO profiles (id, user_id, full_name, bio, avatar_url, resume_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE
            SET full_name = EXCLUDED.full_name,
                bio = EXCLUDED.bio,
                avatar_url = EXCLUDED.avatar_url,
                resume_url = EXCLUDED.resume_url,
                updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(profile.id)
        .bind(profile.user_id)
        .bind(&profile.full_name)
        .bind(&profile.bio)
        .bind(&profile.avatar_url)
        .bind(&profile.resume_url)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_foreign_key_violation)?;

        if let Some(links) = social_links {
            sqlx::query("DELETE FROM social_links WHERE profile_id = $1")
                .bind(profile.id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

            for link in links {
                sqlx::query(
                    r"
                    INSERT INTO social_links (id, profile_id, platform, url, order_index)
                    VALUES ($1, $2, $3, $4, $5)
                    ",
                )
                .bind(link.id)
                .bind(profile.id)
                .bind(&link.platform)
                .bind(&link.url)
                .bind(link.order_index)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
        }

        if let Some(skill_ids) = skill_ids {
            sqlx::query("DELETE FROM profile_skills WHERE profile_id = $1")
                .bind(profile.id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

            sqlx::query(
                r"
                INSERT INTO profile_skills (profile_id, skill_id)
                SELECT $1, UNNEST($2::uuid[])
                ON CONFLICT DO NOTHING
                ",
            )
            .bind(profile.id)
            .bind(skill_ids)
            .execute(&mut *tx)
            .await
            .map_err(map_foreign_key_violation)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
