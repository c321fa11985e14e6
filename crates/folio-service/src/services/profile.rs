//! Profile service
//!
//! The public site shows a single profile: the oldest one. Admin writes go
//! to the profile of the authenticated user, created on first save.

use folio_core::{DomainError, Profile, SocialLink};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{ProfileResponse, SocialLinkInput, SocialLinkResponse, SkillResponse, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::experience::ExperienceService;

pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The site owner's profile with links, skills and experiences
    #[instrument(skip(self))]
    pub async fn get_public(&self) -> ServiceResult<ProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_first()
            .await?
            .ok_or(DomainError::ProfileNotFound)?;
        self.to_response(profile).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_user(&self, user_id: Uuid) -> ServiceResult<ProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or(DomainError::ProfileNotFound)?;
        self.to_response(profile).await
    }

    /// Create the user's profile or overlay the supplied fields
    #[instrument(skip(self, request))]
    pub async fn create_or_update(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        let existing = self.ctx.profile_repo().find_by_user(user_id).await?;
        let created = existing.is_none();
        let mut profile = existing.unwrap_or_else(|| Profile::new(user_id));

        if let Some(full_name) = request.full_name {
            profile.full_name = full_name;
        }
        if let Some(bio) = request.bio {
            profile.bio = bio;
        }
        if let Some(avatar_url) = request.avatar_url {
            profile.avatar_url = avatar_url;
        }
        if let Some(resume_url) = request.resume_url {
            profile.resume_url = resume_url;
        }
        profile.touch();

        let links = request
            .social_links
            .map(|inputs| social_links_from_inputs(profile.id, inputs))
            .transpose()?;

        self.ctx
            .profile_repo()
            .save(&profile, links.as_deref(), request.skill_ids.as_deref())
            .await?;

        if created {
            info!(profile_id = %profile.id, "Profile created");
        } else {
            info!(profile_id = %profile.id, "Profile updated");
        }
        self.to_response(profile).await
    }

    async fn to_response(&self, profile: Profile) -> ServiceResult<ProfileResponse> {
        let repo = self.ctx.profile_repo();
        let links = repo.social_links(profile.id).await?;
        let skills = repo.skills(profile.id).await?;
        let experiences = self.ctx.experience_repo().list_by_profile(profile.id).await?;
        let experiences = ExperienceService::new(self.ctx)
            .with_projects(experiences)
            .await?;

        Ok(ProfileResponse {
            id: profile.id,
            user_id: profile.user_id,
            full_name: profile.full_name,
            bio: profile.bio,
            avatar_url: profile.avatar_url,
            resume_url: profile.resume_url,
            social_links: links.iter().map(SocialLinkResponse::from).collect(),
            skills: skills.iter().map(SkillResponse::from).collect(),
            experiences,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        })
    }
}

fn social_links_from_inputs(
    profile_id: Uuid,
    inputs: Vec<SocialLinkInput>,
) -> ServiceResult<Vec<SocialLink>> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| {
            if input.platform.trim().is_empty() || input.url.trim().is_empty() {
                return Err(ServiceError::validation(
                    "social links need a platform and a url",
                ));
            }
            let order = input.order_index.unwrap_or(index as i32);
            Ok(SocialLink::new(profile_id, input.platform, input.url, order))
        })
        .collect()
}
