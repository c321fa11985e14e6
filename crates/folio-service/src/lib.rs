//! # folio-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, ContactService, ExperienceService, ImageService, MediaStore, PostService,
    ProfileService, ProjectService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SkillService, TagService,
};
