//! Project service

use folio_core::{DomainError, ImageOwner, Page, PageRequest, Project};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{
    images_from_inputs, CreateProjectRequest, PaginatedResponse, ProjectResponse,
    UpdateProjectRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::experience::parse_optional_date;
use super::media::remove_dropped_files;

pub struct ProjectService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProjectService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, page: PageRequest) -> ServiceResult<PaginatedResponse<ProjectResponse>> {
        let page = self.ctx.project_repo().list(page).await?;
        let request = page.request;
        let total = page.total;

        let mut items = Vec::with_capacity(page.items.len());
        for project in page.items {
            items.push(self.to_response(project).await?);
        }
        Ok(Page::new(items, total, request).into())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<ProjectResponse> {
        let project = self.find(id).await?;
        self.to_response(project).await
    }

    /// Create a project; unknown skill or experience ids are rejected by the store
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(&self, request: CreateProjectRequest) -> ServiceResult<ProjectResponse> {
        let mut project = Project::new(request.title)?;
        project.description = request.description;
        project.content_markdown = request.content_markdown;
        project.demo_url = request.demo_url;
        project.repo_url = request.repo_url;
        project.start_date = parse_optional_date(request.start_date.as_deref())?;
        project.end_date = parse_optional_date(request.end_date.as_deref())?;
        project.is_featured = request.is_featured;
        project.experience_id = request.experience_id;

        let images = images_from_inputs(
            ImageOwner::Project(project.id),
            &request.images,
            self.ctx.media(),
        );

        self.ctx
            .project_repo()
            .create(&project, &request.skill_ids, &images)
            .await?;

        info!(project_id = %project.id, slug = %project.slug, "Project created");
        self.to_response(project).await
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateProjectRequest,
    ) -> ServiceResult<ProjectResponse> {
        let mut project = self.find(id).await?;

        if let Some(title) = request.title {
            project.set_title(title)?;
        }
        if let Some(description) = request.description {
            project.description = description;
        }
        if let Some(content) = request.content_markdown {
            project.content_markdown = content;
        }
        if let Some(demo_url) = request.demo_url {
            project.demo_url = demo_url;
        }
        if let Some(repo_url) = request.repo_url {
            project.repo_url = repo_url;
        }
        if let Some(start_date) = request.start_date {
            project.start_date = parse_optional_date(start_date.as_deref())?;
        }
        if let Some(end_date) = request.end_date {
            project.end_date = parse_optional_date(end_date.as_deref())?;
        }
        if let Some(is_featured) = request.is_featured {
            project.is_featured = is_featured;
        }
        if let Some(experience_id) = request.experience_id {
            project.experience_id = experience_id;
        }
        project.touch();

        let owner = ImageOwner::Project(project.id);
        let images = request
            .images
            .map(|inputs| images_from_inputs(owner, &inputs, self.ctx.media()));
        let previous = match images {
            Some(_) => self.ctx.image_repo().list_by_owner(owner).await?,
            None => Vec::new(),
        };

        self.ctx
            .project_repo()
            .update(&project, request.skill_ids.as_deref(), images.as_deref())
            .await?;

        if images.is_some() {
            remove_dropped_files(self.ctx.image_repo(), self.ctx.media(), &previous).await;
        }

        info!(project_id = %id, "Project updated");
        self.to_response(project).await
    }

    /// Delete a project, its image rows and, best effort, their files
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        let images = self
            .ctx
            .image_repo()
            .list_by_owner(ImageOwner::Project(id))
            .await?;

        self.ctx.project_repo().delete(id).await?;
        remove_dropped_files(self.ctx.image_repo(), self.ctx.media(), &images).await;

        info!(project_id = %id, "Project deleted");
        Ok(())
    }

    async fn find(&self, id: Uuid) -> ServiceResult<Project> {
        Ok(self
            .ctx
            .project_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::ProjectNotFound(id.to_string()))?)
    }

    async fn to_response(&self, project: Project) -> ServiceResult<ProjectResponse> {
        let skills = self.ctx.project_repo().skills(project.id).await?;
        let images = self
            .ctx
            .image_repo()
            .list_by_owner(ImageOwner::Project(project.id))
            .await?;
        Ok(ProjectResponse::from_parts(
            project,
            &skills,
            &images,
            self.ctx.media(),
        ))
    }
}
