//! Service context - dependency container for services
//!
//! Holds the repositories, the JWT service and the media store.

use std::sync::Arc;

use folio_common::auth::JwtService;
use folio_core::traits::{
    ContactRepository, ExperienceRepository, ImageRepository, PostRepository, ProfileRepository,
    ProjectRepository, SkillRepository, TagRepository, UserRepository,
};
use folio_db::{
    PgContactRepository, PgExperienceRepository, PgImageRepository, PgPool, PgPostRepository,
    PgProfileRepository, PgProjectRepository, PgSkillRepository, PgTagRepository,
    PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};
use super::media::MediaStore;

/// Service context containing all dependencies
///
/// Cloning is cheap: every repository sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    skill_repo: Arc<dyn SkillRepository>,
    experience_repo: Arc<dyn ExperienceRepository>,
    project_repo: Arc<dyn ProjectRepository>,
    post_repo: Arc<dyn PostRepository>,
    tag_repo: Arc<dyn TagRepository>,
    image_repo: Arc<dyn ImageRepository>,
    contact_repo: Arc<dyn ContactRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    media: Arc<MediaStore>,
}

impl ServiceContext {
    /// Wire every Postgres repository onto one pool
    pub fn from_pool(pool: PgPool, jwt_service: JwtService, media: MediaStore) -> Self {
        Self {
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            profile_repo: Arc::new(PgProfileRepository::new(pool.clone())),
            skill_repo: Arc::new(PgSkillRepository::new(pool.clone())),
            experience_repo: Arc::new(PgExperienceRepository::new(pool.clone())),
            project_repo: Arc::new(PgProjectRepository::new(pool.clone())),
            post_repo: Arc::new(PgPostRepository::new(pool.clone())),
            tag_repo: Arc::new(PgTagRepository::new(pool.clone())),
            image_repo: Arc::new(PgImageRepository::new(pool.clone())),
            contact_repo: Arc::new(PgContactRepository::new(pool)),
            jwt_service: Arc::new(jwt_service),
            media: Arc::new(media),
        }
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    pub fn skill_repo(&self) -> &dyn SkillRepository {
        self.skill_repo.as_ref()
    }

    pub fn experience_repo(&self) -> &dyn ExperienceRepository {
        self.experience_repo.as_ref()
    }

    pub fn project_repo(&self) -> &dyn ProjectRepository {
        self.project_repo.as_ref()
    }

    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    pub fn tag_repo(&self) -> &dyn TagRepository {
        self.tag_repo.as_ref()
    }

    pub fn image_repo(&self) -> &dyn ImageRepository {
        self.image_repo.as_ref()
    }

    pub fn contact_repo(&self) -> &dyn ContactRepository {
        self.contact_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the media store (storage root and public base URL)
    pub fn media(&self) -> &MediaStore {
        self.media.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("media", &self.media)
            .finish()
    }
}

/// Builder for assembling a `ServiceContext` from individual parts
///
/// Used by tests to swap in in-memory repositories.
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    skill_repo: Option<Arc<dyn SkillRepository>>,
    experience_repo: Option<Arc<dyn ExperienceRepository>>,
    project_repo: Option<Arc<dyn ProjectRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    tag_repo: Option<Arc<dyn TagRepository>>,
    image_repo: Option<Arc<dyn ImageRepository>>,
    contact_repo: Option<Arc<dyn ContactRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    media: Option<Arc<MediaStore>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn skill_repo(mut self, repo: Arc<dyn SkillRepository>) -> Self {
        self.skill_repo = Some(repo);
        self
    }

    pub fn experience_repo(mut self, repo: Arc<dyn ExperienceRepository>) -> Self {
        self.experience_repo = Some(repo);
        self
    }

    pub fn project_repo(mut self, repo: Arc<dyn ProjectRepository>) -> Self {
        self.project_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn tag_repo(mut self, repo: Arc<dyn TagRepository>) -> Self {
        self.tag_repo = Some(repo);
        self
    }

    pub fn image_repo(mut self, repo: Arc<dyn ImageRepository>) -> Self {
        self.image_repo = Some(repo);
        self
    }

    pub fn contact_repo(mut self, repo: Arc<dyn ContactRepository>) -> Self {
        self.contact_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: JwtService) -> Self {
        self.jwt_service = Some(Arc::new(service));
        self
    }

    pub fn media(mut self, media: MediaStore) -> Self {
        self.media = Some(Arc::new(media));
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::internal(format!("{name} is required")))
        }

        Ok(ServiceContext {
            user_repo: required(self.user_repo, "user_repo")?,
            profile_repo: required(self.profile_repo, "profile_repo")?,
            skill_repo: required(self.skill_repo, "skill_repo")?,
            experience_repo: required(self.experience_repo, "experience_repo")?,
            project_repo: required(self.project_repo, "project_repo")?,
            post_repo: required(self.post_repo, "post_repo")?,
            tag_repo: required(self.tag_repo, "tag_repo")?,
            image_repo: required(self.image_repo, "image_repo")?,
            contact_repo: required(self.contact_repo, "contact_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            media: required(self.media, "media")?,
        })
    }
}
