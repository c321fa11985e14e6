//! Project entity <-> model mapper

use folio_core::entities::Project;

use crate::models::ProjectModel;

impl From<ProjectModel> for Project {
    fn from(model: ProjectModel) -> Self {
        Project {
            id: model.id,
            title: model.title,
            slug: model.slug,
            description: model.description,
            content_markdown: model.content_markdown,
            demo_url: model.demo_url,
            repo_url: model.repo_url,
            start_date: model.start_date,
            end_date: model.end_date,
            is_featured: model.is_featured,
            experience_id: model.experience_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
