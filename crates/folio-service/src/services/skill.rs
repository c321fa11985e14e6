//! Skill service

use folio_core::{DomainError, PageRequest, Skill};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateSkillRequest, PaginatedResponse, SkillResponse, UpdateSkillRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct SkillService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SkillService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, page: PageRequest) -> ServiceResult<PaginatedResponse<SkillResponse>> {
        let page = self.ctx.skill_repo().list(page).await?;
        Ok(page.map(SkillResponse::from).into())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<SkillResponse> {
        Ok(self.find(id).await?.into())
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateSkillRequest) -> ServiceResult<SkillResponse> {
        let skill = Skill::new(request.name, request.category, request.icon_url);
        self.ctx.skill_repo().create(&skill).await?;

        info!(skill_id = %skill.id, "Skill created");
        Ok(skill.into())
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, id: Uuid, request: UpdateSkillRequest) -> ServiceResult<SkillResponse> {
        let mut skill = self.find(id).await?;

        if let Some(name) = request.name {
            skill.name = name;
        }
        if let Some(category) = request.category {
            skill.category = category;
        }
        if let Some(icon_url) = request.icon_url {
            skill.icon_url = icon_url;
        }

        self.ctx.skill_repo().update(&skill).await?;

        info!(skill_id = %id, "Skill updated");
        Ok(skill.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.skill_repo().delete(id).await?;
        info!(skill_id = %id, "Skill deleted");
        Ok(())
    }

    async fn find(&self, id: Uuid) -> ServiceResult<Skill> {
        Ok(self
            .ctx
            .skill_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::SkillNotFound(id))?)
    }
}
