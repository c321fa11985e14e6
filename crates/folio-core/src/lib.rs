//! # folio-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    parse_date, ContactMessage, Experience, Image, MessageStatus, Post, Profile, Project,
    PublishState, Skill, SocialLink, Tag, User,
};
pub use error::DomainError;
pub use traits::{
    ContactRepository, ExperienceRepository, ImageRepository, PostRepository, ProfileRepository,
    ProjectRepository, RepoResult, SkillRepository, TagRepository, UserRepository,
};
pub use value_objects::{ImageOwner, Page, PageRequest, Slug};
