//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.
//! Anything carrying a file path goes through the `MediaStore` instead, so
//! stored relative paths become absolute URLs only here.

use folio_core::{ContactMessage, Experience, Image, ImageOwner, Post, Project, Skill, SocialLink, Tag};

use super::requests::ImageInput;
use super::responses::{
    ContactMessageResponse, ExperienceResponse, ImageResponse, PostResponse,
    ProjectResponse, ProjectSummaryResponse, SkillResponse, SocialLinkResponse, TagResponse,
};
use crate::services::MediaStore;

impl From<&Skill> for SkillResponse {
    fn from(skill: &Skill) -> Self {
        Self {
            id: skill.id,
            name: skill.name.clone(),
            category: skill.category.clone(),
            icon_url: skill.icon_url.clone(),
        }
    }
}

impl From<Skill> for SkillResponse {
    fn from(skill: Skill) -> Self {
        Self::from(&skill)
    }
}

impl From<&SocialLink> for SocialLinkResponse {
    fn from(link: &SocialLink) -> Self {
        Self {
            id: link.id,
            platform: link.platform.clone(),
            url: link.url.clone(),
            order_index: link.order_index,
        }
    }
}

impl From<&Tag> for TagResponse {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name.clone(),
            slug: tag.slug.clone(),
        }
    }
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self::from(&tag)
    }
}

impl From<&Project> for ProjectSummaryResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            title: project.title.clone(),
            slug: project.slug.clone(),
            is_featured: project.is_featured,
        }
    }
}

impl From<ContactMessage> for ContactMessageResponse {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id,
            name: message.name,
            email: message.email,
            subject: message.subject,
            message: message.message,
            status: message.status,
            created_at: message.created_at,
        }
    }
}

// ============================================================================
// Mappers that need related rows or the media store
// ============================================================================

impl ImageResponse {
    pub fn from_image(image: &Image, media: &MediaStore) -> Self {
        Self {
            id: image.id,
            entity_type: image.owner.kind(),
            entity_id: image.owner.id(),
            file_name: image.file_name.clone(),
            file_path: media.public_url(&image.file_path),
            mime_type: image.mime_type.clone(),
            size: image.size,
            alt_text: image.alt_text.clone(),
            is_primary: image.is_primary,
            order_index: image.order_index,
            created_at: image.created_at,
        }
    }
}

impl ExperienceResponse {
    pub fn from_parts(experience: Experience, projects: &[Project]) -> Self {
        Self {
            id: experience.id,
            profile_id: experience.profile_id,
            company: experience.company,
            position: experience.position,
            description: experience.description,
            start_date: experience.start_date,
            end_date: experience.end_date,
            is_current: experience.is_current,
            projects: projects.iter().map(ProjectSummaryResponse::from).collect(),
            created_at: experience.created_at,
            updated_at: experience.updated_at,
        }
    }
}

impl ProjectResponse {
    pub fn from_parts(project: Project, skills: &[Skill], images: &[Image], media: &MediaStore) -> Self {
        Self {
            id: project.id,
            title: project.title,
            slug: project.slug,
            description: project.description,
            content_markdown: project.content_markdown,
            demo_url: project.demo_url,
            repo_url: project.repo_url,
            start_date: project.start_date,
            end_date: project.end_date,
            is_featured: project.is_featured,
            experience_id: project.experience_id,
            skills: skills.iter().map(SkillResponse::from).collect(),
            images: images.iter().map(|i| ImageResponse::from_image(i, media)).collect(),
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

impl PostResponse {
    pub fn from_parts(post: Post, tags: &[Tag], images: &[Image], media: &MediaStore) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            content_markdown: post.content_markdown,
            summary: post.summary,
            is_published: post.is_published,
            published_at: post.published_at,
            tags: tags.iter().map(TagResponse::from).collect(),
            images: images.iter().map(|i| ImageResponse::from_image(i, media)).collect(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Build image rows for `owner` from request attachments
///
/// Order follows the submitted list; paths are stored relative.
pub fn images_from_inputs(owner: ImageOwner, inputs: &[ImageInput], media: &MediaStore) -> Vec<Image> {
    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            let mut image = Image::new(owner, input.file_name.clone(), media.stored_path(&input.file_path));
            image.mime_type.clone_from(&input.mime_type);
            image.size = input.size;
            image.alt_text.clone_from(&input.alt_text);
            image.is_primary = input.is_primary;
            image.order_index = index as i32;
            image
        })
        .collect()
}
