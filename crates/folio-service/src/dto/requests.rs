//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Update requests are partial: an absent field leaves the stored value alone.
//! Nullable columns use `Option<Option<T>>` so an explicit `null` clears them.

use folio_core::MessageStatus;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;
use validator::Validate;

/// Distinguish a missing field (`None`) from an explicit `null` (`Some(None)`)
///
/// Use together with `#[serde(default)]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Admin login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEmailRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 6, max = 128, message = "Password must be 6-128 characters"))]
    pub password: String,
}

// ============================================================================
// Profile Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLinkInput {
    pub platform: String,
    pub url: String,
    /// Defaults to the position in the submitted list
    pub order_index: Option<i32>,
}

/// Create-or-update profile request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 255, message = "Full name must be at most 255 characters"))]
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub resume_url: Option<String>,

    /// Replaces all social links when present
    pub social_links: Option<Vec<SocialLinkInput>>,

    /// Replaces the profile's skill set when present
    pub skill_ids: Option<Vec<Uuid>>,
}

// ============================================================================
// Skill Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSkillRequest {
    #[validate(length(min = 1, max = 100, message = "Skill name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: String,

    #[serde(default)]
    pub icon_url: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSkillRequest {
    #[validate(length(min = 1, max = 100, message = "Skill name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: Option<String>,

    pub icon_url: Option<String>,
}

// ============================================================================
// Experience Requests
// ============================================================================

/// Dates are `YYYY-MM-DD` strings
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExperienceRequest {
    #[validate(length(min = 1, max = 255, message = "Company must be 1-255 characters"))]
    pub company: String,

    #[validate(length(min = 1, max = 255, message = "Position must be 1-255 characters"))]
    pub position: String,

    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, message = "Start date is required"))]
    pub start_date: String,

    /// Empty string is treated as no end date
    pub end_date: Option<String>,

    #[serde(default)]
    pub is_current: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateExperienceRequest {
    #[validate(length(min = 1, max = 255, message = "Company must be 1-255 characters"))]
    pub company: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Position must be 1-255 characters"))]
    pub position: Option<String>,

    pub description: Option<String>,

    pub start_date: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub end_date: Option<Option<String>>,

    pub is_current: Option<bool>,
}

// ============================================================================
// Image attachments
// ============================================================================

/// An uploaded file attached to a post or project
///
/// `file_path` may be the relative path or the absolute URL returned by the
/// upload endpoint; the base URL is stripped before storing.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageInput {
    pub file_name: String,
    pub file_path: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub is_primary: bool,
}

// ============================================================================
// Project Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content_markdown: String,
    #[serde(default)]
    pub demo_url: String,
    #[serde(default)]
    pub repo_url: String,

    pub start_date: Option<String>,
    pub end_date: Option<String>,

    #[serde(default)]
    pub is_featured: bool,

    pub experience_id: Option<Uuid>,

    #[serde(default)]
    pub skill_ids: Vec<Uuid>,

    #[serde(default)]
    pub images: Vec<ImageInput>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    pub description: Option<String>,
    pub content_markdown: Option<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub start_date: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub end_date: Option<Option<String>>,

    pub is_featured: Option<bool>,

    #[serde(default, deserialize_with = "double_option")]
    pub experience_id: Option<Option<Uuid>>,

    pub skill_ids: Option<Vec<Uuid>>,

    pub images: Option<Vec<ImageInput>>,
}

// ============================================================================
// Post Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[serde(default)]
    pub content_markdown: String,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub is_published: bool,

    /// Tag names; unknown tags are created
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub images: Vec<ImageInput>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    pub content_markdown: Option<String>,
    pub summary: Option<String>,
    pub is_published: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub images: Option<Vec<ImageInput>>,
}

// ============================================================================
// Contact Requests
// ============================================================================

/// Public contact form submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Subject must be at most 255 characters"))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMessageStatusRequest {
    pub status: MessageStatus,
}
