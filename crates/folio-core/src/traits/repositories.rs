//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer states what it needs; `folio-db` provides the Postgres
//! implementations. Lookups return `Ok(None)` when no row matches. Writes
//! that replace association sets take `Option<&[..]>` where `None` leaves
//! the current set untouched.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    ContactMessage, Experience, Image, MessageStatus, Post, Profile, Project, Skill, SocialLink,
    Tag, User,
};
use crate::error::DomainError;
use crate::value_objects::{ImageOwner, Page, PageRequest};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Create a new user with an already hashed password
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Change the login email (`EmailAlreadyExists` when taken)
    async fn update_email(&self, id: Uuid, email: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: Uuid, password_hash: &str) -> RepoResult<()>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// The public profile: the oldest one in the table
    async fn find_first(&self) -> RepoResult<Option<Profile>>;

    /// Find the profile owned by a user
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Option<Profile>>;

    /// Social links ordered by `order_index`
    async fn social_links(&self, profile_id: Uuid) -> RepoResult<Vec<SocialLink>>;

    /// Skills attached to the profile, ordered by name
    async fn skills(&self, profile_id: Uuid) -> RepoResult<Vec<Skill>>;

    /// Insert or update the profile and optionally replace its links and skills
    ///
    /// Runs in a single transaction.
    async fn save(
        &self,
        profile: &Profile,
        social_links: Option<&[SocialLink]>,
        skill_ids: Option<&[Uuid]>,
    ) -> RepoResult<()>;
}

// ============================================================================
// Skill Repository
// ============================================================================

#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// List skills ordered by category then name
    async fn list(&self, page: PageRequest) -> RepoResult<Page<Skill>>;

    /// Find skill by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Skill>>;

    /// Create a new skill (`SkillNameExists` on duplicate name)
    async fn create(&self, skill: &Skill) -> RepoResult<()>;

    /// Update an existing skill
    async fn update(&self, skill: &Skill) -> RepoResult<()>;

    /// Delete a skill (`SkillNotFound` if nothing was deleted)
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Experience Repository
// ============================================================================

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// All experiences, newest `start_date` first
    async fn list(&self) -> RepoResult<Vec<Experience>>;

    /// Experiences of one profile, newest `start_date` first
    async fn list_by_profile(&self, profile_id: Uuid) -> RepoResult<Vec<Experience>>;

    /// Find experience by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Experience>>;

    /// Create a new experience
    async fn create(&self, experience: &Experience) -> RepoResult<()>;

    /// Update an existing experience
    async fn update(&self, experience: &Experience) -> RepoResult<()>;

    /// Delete an experience; linked projects keep existing without it
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Project Repository
// ============================================================================

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// List projects, newest `start_date` first (undated last)
    async fn list(&self, page: PageRequest) -> RepoResult<Page<Project>>;

    /// Find project by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Project>>;

    /// Projects linked to an experience
    async fn list_by_experience(&self, experience_id: Uuid) -> RepoResult<Vec<Project>>;

    /// Skills used by a project, ordered by name
    async fn skills(&self, project_id: Uuid) -> RepoResult<Vec<Skill>>;

    /// Insert a project with its skills and images in one transaction
    async fn create(&self, project: &Project, skill_ids: &[Uuid], images: &[Image])
        -> RepoResult<()>;

    /// Update a project, replacing the given association sets in one transaction
    async fn update(
        &self,
        project: &Project,
        skill_ids: Option<&[Uuid]>,
        images: Option<&[Image]>,
    ) -> RepoResult<()>;

    /// Delete a project together with its image rows
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List posts newest first, optionally only published ones
    async fn list(&self, page: PageRequest, published_only: bool) -> RepoResult<Page<Post>>;

    /// Find post by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>>;

    /// Find post by slug regardless of publish state
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Post>>;

    /// Tags of a post, ordered by name
    async fn tags(&self, post_id: Uuid) -> RepoResult<Vec<Tag>>;

    /// Insert a post with its tags and images in one transaction
    async fn create(&self, post: &Post, tag_ids: &[Uuid], images: &[Image]) -> RepoResult<()>;

    /// Update a post, replacing the given association sets in one transaction
    async fn update(
        &self,
        post: &Post,
        tag_ids: Option<&[Uuid]>,
        images: Option<&[Image]>,
    ) -> RepoResult<()>;

    /// Delete a post together with its image rows
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Tag Repository
// ============================================================================

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// All tags ordered by name
    async fn list(&self) -> RepoResult<Vec<Tag>>;

    /// Return the tag with the same slug, inserting `tag` if there is none
    async fn find_or_create(&self, tag: &Tag) -> RepoResult<Tag>;

    /// Delete a tag and detach it from all posts
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Image Repository
// ============================================================================

#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Find image by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Image>>;

    /// Images of one owner ordered by `order_index`
    async fn list_by_owner(&self, owner: ImageOwner) -> RepoResult<Vec<Image>>;

    /// Number of image rows, across all owners, pointing at `file_path`
    async fn count_by_path(&self, file_path: &str) -> RepoResult<i64>;

    /// Delete an image row (`ImageNotFound` if nothing was deleted)
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Contact Repository
// ============================================================================

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Store a new message
    async fn create(&self, message: &ContactMessage) -> RepoResult<()>;

    /// Find message by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ContactMessage>>;

    /// List messages newest first, optionally filtered by status
    async fn list(
        &self,
        page: PageRequest,
        status: Option<MessageStatus>,
    ) -> RepoResult<Page<ContactMessage>>;

    /// Change the triage status
    async fn update_status(&self, id: Uuid, status: MessageStatus) -> RepoResult<()>;

    /// Delete a message
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}
