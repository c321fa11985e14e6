//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    double_option, CreateContactRequest, CreateExperienceRequest, CreatePostRequest,
    CreateProjectRequest, CreateSkillRequest, ImageInput, LoginRequest, SocialLinkInput,
    UpdateEmailRequest, UpdateExperienceRequest, UpdateMessageStatusRequest,
    UpdatePasswordRequest, UpdatePostRequest, UpdateProfileRequest, UpdateProjectRequest,
    UpdateSkillRequest,
};

pub use responses::{
    ContactMessageResponse, ExperienceResponse, HealthChecks, HealthResponse, ImageResponse,
    LoginResponse, LoginUserResponse, PageMeta, PaginatedResponse, PostResponse,
    ProfileResponse, ProjectResponse, ProjectSummaryResponse, ReadinessResponse, SkillResponse,
    SocialLinkResponse, TagResponse, UploadResponse,
};

pub use mappers::images_from_inputs;
