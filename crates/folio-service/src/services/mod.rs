//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod contact;
pub mod context;
pub mod error;
pub mod experience;
pub mod image;
pub mod media;
pub mod post;
pub mod profile;
pub mod project;
pub mod skill;
pub mod tag;

#[cfg(test)]
pub(crate) mod memory;

// Re-export all services for convenience
pub use auth::AuthService;
pub use contact::ContactService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use experience::ExperienceService;
pub use image::ImageService;
pub use media::{delete_image_with, MediaStore, StoredFile, ALLOWED_EXTENSIONS, MEDIA_PREFIX};
pub use post::PostService;
pub use profile::ProfileService;
pub use project::ProjectService;
pub use skill::SkillService;
pub use tag::TagService;
