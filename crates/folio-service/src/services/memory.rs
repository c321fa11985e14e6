//! In-memory repositories for service tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use folio_common::JwtService;
use folio_core::traits::{
    ContactRepository, ExperienceRepository, ImageRepository, PostRepository, ProfileRepository,
    ProjectRepository, RepoResult, SkillRepository, TagRepository, UserRepository,
};
use folio_core::{
    ContactMessage, DomainError, Experience, Image, ImageOwner, MessageStatus, Page, PageRequest,
    Post, Profile, Project, Skill, SocialLink, Tag, User,
};
use uuid::Uuid;

use super::context::{ServiceContext, ServiceContextBuilder};
use super::media::MediaStore;

fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len() as i64;
    let items = items
        .into_iter()
        .skip(request.offset() as usize)
        .take(request.limit() as usize)
        .collect();
    Page::new(items, total, request)
}

/// One of each repository, sharing state where rows reference each other
#[derive(Clone)]
pub(crate) struct MemoryStore {
    pub users: Arc<MemoryUsers>,
    pub profiles: Arc<MemoryProfiles>,
    pub skills: Arc<MemorySkills>,
    pub experiences: Arc<MemoryExperiences>,
    pub projects: Arc<MemoryProjects>,
    pub posts: Arc<MemoryPosts>,
    pub tags: Arc<MemoryTags>,
    pub images: Arc<MemoryImages>,
    pub contacts: Arc<MemoryContacts>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let skills = Arc::new(MemorySkills::default());
        let images = Arc::new(MemoryImages::default());
        let tags = Arc::new(MemoryTags::default());
        Self {
            users: Arc::default(),
            profiles: Arc::new(MemoryProfiles {
                skills: Arc::clone(&skills),
                ..MemoryProfiles::default()
            }),
            experiences: Arc::default(),
            projects: Arc::new(MemoryProjects {
                skills: Arc::clone(&skills),
                images: Arc::clone(&images),
                ..MemoryProjects::default()
            }),
            posts: Arc::new(MemoryPosts {
                tags: Arc::clone(&tags),
                images: Arc::clone(&images),
                ..MemoryPosts::default()
            }),
            contacts: Arc::default(),
            skills,
            tags,
            images,
        }
    }

    pub fn context(&self) -> ServiceContext {
        self.context_with_media(MediaStore::new(
            std::env::temp_dir(),
            "http://localhost:8080",
            1024 * 1024,
        ))
    }

    pub fn context_with_media(&self, media: MediaStore) -> ServiceContext {
        ServiceContextBuilder::new()
            .user_repo(self.users.clone())
            .profile_repo(self.profiles.clone())
            .skill_repo(self.skills.clone())
            .experience_repo(self.experiences.clone())
            .project_repo(self.projects.clone())
            .post_repo(self.posts.clone())
            .tag_repo(self.tags.clone())
            .image_repo(self.images.clone())
            .contact_repo(self.contacts.clone())
            .jwt_service(JwtService::new("test-secret", 1))
            .media(media)
            .build()
            .unwrap()
    }
}

// ============================================================================
// Users
// ============================================================================

#[derive(Default)]
pub(crate) struct MemoryUsers {
    rows: Mutex<Vec<(User, String)>>,
}

impl MemoryUsers {
    pub fn insert(&self, user: User, password_hash: String) {
        self.rows.lock().unwrap().push((user, password_hash));
    }
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|(u, _)| u.email == email).map(|(u, _)| u.clone()))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        self.insert(user.clone(), password_hash.to_string());
        Ok(())
    }

    async fn update_email(&self, id: Uuid, email: &str) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|(u, _)| u.email == email && u.id != id) {
            return Err(DomainError::EmailAlreadyExists);
        }
        let (user, _) = rows
            .iter_mut()
            .find(|(u, _)| u.id == id)
            .ok_or(DomainError::UserNotFound(id))?;
        user.set_email(email.to_string());
        Ok(())
    }

    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|(u, _)| u.id == id).map(|(_, h)| h.clone()))
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let (_, hash) = rows
            .iter_mut()
            .find(|(u, _)| u.id == id)
            .ok_or(DomainError::UserNotFound(id))?;
        *hash = password_hash.to_string();
        Ok(())
    }
}

// ============================================================================
// Profiles
// ============================================================================

#[derive(Default)]
pub(crate) struct MemoryProfiles {
    rows: Mutex<Vec<Profile>>,
    links: Mutex<HashMap<Uuid, Vec<SocialLink>>>,
    skill_ids: Mutex<HashMap<Uuid, Vec<Uuid>>>,
    skills: Arc<MemorySkills>,
}

impl MemoryProfiles {
    pub fn insert(&self, profile: Profile) {
        self.rows.lock().unwrap().push(profile);
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfiles {
    async fn find_first(&self) -> RepoResult<Option<Profile>> {
        Ok(self.rows.lock().unwrap().first().cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Option<Profile>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn social_links(&self, profile_id: Uuid) -> RepoResult<Vec<SocialLink>> {
        let mut links = self
            .links
            .lock()
            .unwrap()
            .get(&profile_id)
            .cloned()
            .unwrap_or_default();
        links.sort_by_key(|l| l.order_index);
        Ok(links)
    }

    async fn skills(&self, profile_id: Uuid) -> RepoResult<Vec<Skill>> {
        let ids = self
            .skill_ids
            .lock()
            .unwrap()
            .get(&profile_id)
            .cloned()
            .unwrap_or_default();
        Ok(self.skills.by_ids(&ids))
    }

    async fn save(
        &self,
        profile: &Profile,
        social_links: Option<&[SocialLink]>,
        skill_ids: Option<&[Uuid]>,
    ) -> RepoResult<()> {
        if let Some(ids) = skill_ids {
            self.skills.check_exists(ids)?;
            self.skill_ids
                .lock()
                .unwrap()
                .insert(profile.id, ids.to_vec());
        }
        if let Some(links) = social_links {
            self.links.lock().unwrap().insert(profile.id, links.to_vec());
        }

        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile.clone(),
            None => rows.push(profile.clone()),
        }
        Ok(())
    }
}

// ============================================================================
// Skills
// ============================================================================

#[derive(Default)]
pub(crate) struct MemorySkills {
    rows: Mutex<Vec<Skill>>,
}

impl MemorySkills {
    fn by_ids(&self, ids: &[Uuid]) -> Vec<Skill> {
        let mut skills: Vec<Skill> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect();
        skills.sort_by(|a, b| a.name.cmp(&b.name));
        skills
    }

    fn check_exists(&self, ids: &[Uuid]) -> RepoResult<()> {
        let rows = self.rows.lock().unwrap();
        if ids.iter().all(|id| rows.iter().any(|s| s.id == *id)) {
            Ok(())
        } else {
            Err(DomainError::UnknownReference("skill".to_string()))
        }
    }
}

#[async_trait]
impl SkillRepository for MemorySkills {
    async fn list(&self, page: PageRequest) -> RepoResult<Page<Skill>> {
        let mut skills = self.rows.lock().unwrap().clone();
        skills.sort_by(|a, b| (&a.category, &a.name).cmp(&(&b.category, &b.name)));
        Ok(paginate(skills, page))
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Skill>> {
        Ok(self.rows.lock().unwrap().iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, skill: &Skill) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|s| s.name == skill.name) {
            return Err(DomainError::SkillNameExists);
        }
        rows.push(skill.clone());
        Ok(())
    }

    async fn update(&self, skill: &Skill) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|s| s.name == skill.name && s.id != skill.id) {
            return Err(DomainError::SkillNameExists);
        }
        let existing = rows
            .iter_mut()
            .find(|s| s.id == skill.id)
            .ok_or(DomainError::SkillNotFound(skill.id))?;
        *existing = skill.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.id != id);
        if rows.len() == before {
            return Err(DomainError::SkillNotFound(id));
        }
        Ok(())
    }
}

// ============================================================================
// Experiences
// ============================================================================

#[derive(Default)]
pub(crate) struct MemoryExperiences {
    rows: Mutex<Vec<Experience>>,
}

#[async_trait]
impl ExperienceRepository for MemoryExperiences {
    async fn list(&self) -> RepoResult<Vec<Experience>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(rows)
    }

    async fn list_by_profile(&self, profile_id: Uuid) -> RepoResult<Vec<Experience>> {
        let mut rows = self.list().await?;
        rows.retain(|e| e.profile_id == profile_id);
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Experience>> {
        Ok(self.rows.lock().unwrap().iter().find(|e| e.id == id).cloned())
    }

    async fn create(&self, experience: &Experience) -> RepoResult<()> {
        self.rows.lock().unwrap().push(experience.clone());
        Ok(())
    }

    async fn update(&self, experience: &Experience) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let existing = rows
            .iter_mut()
            .find(|e| e.id == experience.id)
            .ok_or(DomainError::ExperienceNotFound(experience.id))?;
        *existing = experience.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != id);
        if rows.len() == before {
            return Err(DomainError::ExperienceNotFound(id));
        }
        Ok(())
    }
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Default)]
pub(crate) struct MemoryProjects {
    rows: Mutex<Vec<Project>>,
    skill_ids: Mutex<HashMap<Uuid, Vec<Uuid>>>,
    skills: Arc<MemorySkills>,
    images: Arc<MemoryImages>,
}

#[async_trait]
impl ProjectRepository for MemoryProjects {
    async fn list(&self, page: PageRequest) -> RepoResult<Page<Project>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(paginate(rows, page))
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Project>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn list_by_experience(&self, experience_id: Uuid) -> RepoResult<Vec<Project>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|p| p.experience_id == Some(experience_id))
            .cloned()
            .collect())
    }

    async fn skills(&self, project_id: Uuid) -> RepoResult<Vec<Skill>> {
        let ids = self
            .skill_ids
            .lock()
            .unwrap()
            .get(&project_id)
            .cloned()
            .unwrap_or_default();
        Ok(self.skills.by_ids(&ids))
    }

    async fn create(
        &self,
        project: &Project,
        skill_ids: &[Uuid],
        images: &[Image],
    ) -> RepoResult<()> {
        self.skills.check_exists(skill_ids)?;
        {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|p| p.slug == project.slug) {
                return Err(DomainError::SlugAlreadyExists(project.slug.clone()));
            }
            rows.push(project.clone());
        }
        self.skill_ids
            .lock()
            .unwrap()
            .insert(project.id, skill_ids.to_vec());
        self.images.replace(ImageOwner::Project(project.id), images);
        Ok(())
    }

    async fn update(
        &self,
        project: &Project,
        skill_ids: Option<&[Uuid]>,
        images: Option<&[Image]>,
    ) -> RepoResult<()> {
        if let Some(ids) = skill_ids {
            self.skills.check_exists(ids)?;
        }
        {
            let mut rows = self.rows.lock().unwrap();
            if rows
                .iter()
                .any(|p| p.slug == project.slug && p.id != project.id)
            {
                return Err(DomainError::SlugAlreadyExists(project.slug.clone()));
            }
            let existing = rows
                .iter_mut()
                .find(|p| p.id == project.id)
                .ok_or_else(|| DomainError::ProjectNotFound(project.id.to_string()))?;
            *existing = project.clone();
        }
        if let Some(ids) = skill_ids {
            self.skill_ids.lock().unwrap().insert(project.id, ids.to_vec());
        }
        if let Some(images) = images {
            self.images.replace(ImageOwner::Project(project.id), images);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|p| p.id != id);
            if rows.len() == before {
                return Err(DomainError::ProjectNotFound(id.to_string()));
            }
        }
        self.images.replace(ImageOwner::Project(id), &[]);
        Ok(())
    }
}

// ============================================================================
// Posts
// ============================================================================

#[derive(Default)]
pub(crate) struct MemoryPosts {
    rows: Mutex<Vec<Post>>,
    tag_ids: Mutex<HashMap<Uuid, Vec<Uuid>>>,
    tags: Arc<MemoryTags>,
    images: Arc<MemoryImages>,
}

#[async_trait]
impl PostRepository for MemoryPosts {
    async fn list(&self, page: PageRequest, published_only: bool) -> RepoResult<Page<Post>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.retain(|p| !published_only || p.is_published);
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(rows, page))
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Post>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.slug == slug).cloned())
    }

    async fn tags(&self, post_id: Uuid) -> RepoResult<Vec<Tag>> {
        let ids = self
            .tag_ids
            .lock()
            .unwrap()
            .get(&post_id)
            .cloned()
            .unwrap_or_default();
        Ok(self.tags.by_ids(&ids))
    }

    async fn create(&self, post: &Post, tag_ids: &[Uuid], images: &[Image]) -> RepoResult<()> {
        {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|p| p.slug == post.slug) {
                return Err(DomainError::SlugAlreadyExists(post.slug.clone()));
            }
            rows.push(post.clone());
        }
        self.tag_ids.lock().unwrap().insert(post.id, tag_ids.to_vec());
        self.images.replace(ImageOwner::Post(post.id), images);
        Ok(())
    }

    async fn update(
        &self,
        post: &Post,
        tag_ids: Option<&[Uuid]>,
        images: Option<&[Image]>,
    ) -> RepoResult<()> {
        {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|p| p.slug == post.slug && p.id != post.id) {
                return Err(DomainError::SlugAlreadyExists(post.slug.clone()));
            }
            let existing = rows
                .iter_mut()
                .find(|p| p.id == post.id)
                .ok_or_else(|| DomainError::PostNotFound(post.id.to_string()))?;
            *existing = post.clone();
        }
        if let Some(ids) = tag_ids {
            self.tag_ids.lock().unwrap().insert(post.id, ids.to_vec());
        }
        if let Some(images) = images {
            self.images.replace(ImageOwner::Post(post.id), images);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|p| p.id != id);
            if rows.len() == before {
                return Err(DomainError::PostNotFound(id.to_string()));
            }
        }
        self.images.replace(ImageOwner::Post(id), &[]);
        Ok(())
    }
}

// ============================================================================
// Tags
// ============================================================================

#[derive(Default)]
pub(crate) struct MemoryTags {
    rows: Mutex<Vec<Tag>>,
}

impl MemoryTags {
    fn by_ids(&self, ids: &[Uuid]) -> Vec<Tag> {
        let mut tags: Vec<Tag> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|t| ids.contains(&t.id))
            .cloned()
            .collect();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        tags
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl TagRepository for MemoryTags {
    async fn list(&self) -> RepoResult<Vec<Tag>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn find_or_create(&self, tag: &Tag) -> RepoResult<Tag> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows.iter().find(|t| t.slug == tag.slug) {
            return Ok(existing.clone());
        }
        rows.push(tag.clone());
        Ok(tag.clone())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| t.id != id);
        if rows.len() == before {
            return Err(DomainError::TagNotFound(id));
        }
        Ok(())
    }
}

// ============================================================================
// Images
// ============================================================================

#[derive(Default)]
pub(crate) struct MemoryImages {
    rows: Mutex<Vec<Image>>,
}

impl MemoryImages {
    pub fn insert(&self, image: Image) {
        self.rows.lock().unwrap().push(image);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn replace(&self, owner: ImageOwner, images: &[Image]) {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|i| i.owner != owner);
        rows.extend_from_slice(images);
    }
}

#[async_trait]
impl ImageRepository for MemoryImages {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Image>> {
        Ok(self.rows.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }

    async fn list_by_owner(&self, owner: ImageOwner) -> RepoResult<Vec<Image>> {
        let mut images: Vec<Image> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.owner == owner)
            .cloned()
            .collect();
        images.sort_by_key(|i| i.order_index);
        Ok(images)
    }

    async fn count_by_path(&self, file_path: &str) -> RepoResult<i64> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|i| i.file_path == file_path).count() as i64)
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|i| i.id != id);
        if rows.len() == before {
            return Err(DomainError::ImageNotFound(id));
        }
        Ok(())
    }
}

// ============================================================================
// Contact messages
// ============================================================================

#[derive(Default)]
pub(crate) struct MemoryContacts {
    rows: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl ContactRepository for MemoryContacts {
    async fn create(&self, message: &ContactMessage) -> RepoResult<()> {
        self.rows.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ContactMessage>> {
        Ok(self.rows.lock().unwrap().iter().find(|m| m.id == id).cloned())
    }

    async fn list(
        &self,
        page: PageRequest,
        status: Option<MessageStatus>,
    ) -> RepoResult<Page<ContactMessage>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.retain(|m| status.map_or(true, |s| m.status == s));
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(rows, page))
    }

    async fn update_status(&self, id: Uuid, status: MessageStatus) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let message = rows
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(DomainError::MessageNotFound(id))?;
        message.status = status;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| m.id != id);
        if rows.len() == before {
            return Err(DomainError::MessageNotFound(id));
        }
        Ok(())
    }
}
