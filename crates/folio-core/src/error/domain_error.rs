//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Skill not found: {0}")]
    SkillNotFound(Uuid),

    #[error("Experience not found: {0}")]
    ExperienceNotFound(Uuid),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Tag not found: {0}")]
    TagNotFound(Uuid),

    #[error("Image not found: {0}")]
    ImageNotFound(Uuid),

    #[error("Message not found: {0}")]
    MessageNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unsupported file type '{0}' (allowed: jpg, jpeg, png, webp)")]
    UnsupportedFileType(String),

    #[error("File too large: max {max} bytes")]
    FileTooLarge { max: u64 },

    #[error("Create a profile before adding experiences")]
    MissingProfile,

    #[error("Referenced record does not exist: {0}")]
    UnknownReference(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Skill name already exists")]
    SkillNameExists,

    #[error("Slug already exists: {0}")]
    SlugAlreadyExists(String),

    #[error("Tag already exists")]
    TagAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ProfileNotFound => "UNKNOWN_PROFILE",
            Self::SkillNotFound(_) => "UNKNOWN_SKILL",
            Self::ExperienceNotFound(_) => "UNKNOWN_EXPERIENCE",
            Self::ProjectNotFound(_) => "UNKNOWN_PROJECT",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::TagNotFound(_) => "UNKNOWN_TAG",
            Self::ImageNotFound(_) => "UNKNOWN_IMAGE",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::UnsupportedFileType(_) => "UNSUPPORTED_FILE_TYPE",
            Self::FileTooLarge { .. } => "FILE_TOO_LARGE",
            Self::MissingProfile => "MISSING_PROFILE",
            Self::UnknownReference(_) => "UNKNOWN_REFERENCE",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::SkillNameExists => "SKILL_NAME_EXISTS",
            Self::SlugAlreadyExists(_) => "SLUG_ALREADY_EXISTS",
            Self::TagAlreadyExists => "TAG_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ProfileNotFound
                | Self::SkillNotFound(_)
                | Self::ExperienceNotFound(_)
                | Self::ProjectNotFound(_)
                | Self::PostNotFound(_)
                | Self::TagNotFound(_)
                | Self::ImageNotFound(_)
                | Self::MessageNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidDate(_)
                | Self::UnsupportedFileType(_)
                | Self::FileTooLarge { .. }
                | Self::MissingProfile
                | Self::UnknownReference(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::SkillNameExists
                | Self::SlugAlreadyExists(_)
                | Self::TagAlreadyExists
        )
    }
}
