//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ContactRepository, ExperienceRepository, ImageRepository, PostRepository, ProfileRepository,
    ProjectRepository, RepoResult, SkillRepository, TagRepository, UserRepository,
};
