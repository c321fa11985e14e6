//! Experience service
//!
//! Work history entries belong to the admin's profile and list the projects
//! linked to them.

use chrono::NaiveDate;
use folio_core::{parse_date, DomainError, Experience};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateExperienceRequest, ExperienceResponse, UpdateExperienceRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Parse an optional `YYYY-MM-DD` value; empty strings mean "no date"
pub(crate) fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, DomainError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s).map(Some),
    }
}

pub struct ExperienceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ExperienceService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All experiences, newest first, each with its projects
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ExperienceResponse>> {
        let experiences = self.ctx.experience_repo().list().await?;
        self.with_projects(experiences).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<ExperienceResponse> {
        let experience = self.find(id).await?;
        self.to_response(experience).await
    }

    /// Create an experience on the profile of `user_id`
    #[instrument(skip(self, request), fields(company = %request.company))]
    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateExperienceRequest,
    ) -> ServiceResult<ExperienceResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or(DomainError::MissingProfile)?;

        let start_date = parse_date(&request.start_date)?;
        let end_date = parse_optional_date(request.end_date.as_deref())?;

        let mut experience =
            Experience::new(profile.id, request.company, request.position, start_date);
        experience.description = request.description;
        experience.end_date = end_date;
        experience.is_current = request.is_current;
        experience.normalize_current();

        self.ctx.experience_repo().create(&experience).await?;

        info!(experience_id = %experience.id, "Experience created");
        self.to_response(experience).await
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateExperienceRequest,
    ) -> ServiceResult<ExperienceResponse> {
        let mut experience = self.find(id).await?;

        if let Some(company) = request.company {
            experience.company = company;
        }
        if let Some(position) = request.position {
            experience.position = position;
        }
        if let Some(description) = request.description {
            experience.description = description;
        }
        if let Some(start_date) = request.start_date {
            experience.start_date = parse_date(&start_date)?;
        }
        if let Some(end_date) = request.end_date {
            experience.end_date = parse_optional_date(end_date.as_deref())?;
        }
        if let Some(is_current) = request.is_current {
            experience.is_current = is_current;
        }
        experience.normalize_current();
        experience.touch();

        self.ctx.experience_repo().update(&experience).await?;

        info!(experience_id = %id, "Experience updated");
        self.to_response(experience).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.experience_repo().delete(id).await?;
        info!(experience_id = %id, "Experience deleted");
        Ok(())
    }

    async fn find(&self, id: Uuid) -> ServiceResult<Experience> {
        Ok(self
            .ctx
            .experience_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ExperienceNotFound(id))?)
    }

    async fn to_response(&self, experience: Experience) -> ServiceResult<ExperienceResponse> {
        let projects = self
            .ctx
            .project_repo()
            .list_by_experience(experience.id)
            .await?;
        Ok(ExperienceResponse::from_parts(experience, &projects))
    }

    pub(crate) async fn with_projects(
        &self,
        experiences: Vec<Experience>,
    ) -> ServiceResult<Vec<ExperienceResponse>> {
        let mut responses = Vec::with_capacity(experiences.len());
        for experience in experiences {
            responses.push(self.to_response(experience).await?);
        }
        Ok(responses)
    }
}
