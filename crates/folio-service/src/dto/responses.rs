//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Image paths are absolute URLs by the time they reach a response.

use chrono::{DateTime, NaiveDate, Utc};
use folio_core::{MessageStatus, Page};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Common Response Types
// ============================================================================

/// One page of results with offset pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, meta: PageMeta) -> Self {
        Self { data, meta }
    }
}

impl<T> From<Page<T>> for PaginatedResponse<T> {
    fn from(page: Page<T>) -> Self {
        let meta = PageMeta {
            current_page: page.request.page(),
            total_page: page.total_pages(),
            total_data: page.total,
            limit: page.request.limit(),
        };
        Self::new(page.items, meta)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub current_page: i64,
    pub total_page: i64,
    pub total_data: i64,
    pub limit: i64,
}

// ============================================================================
// Auth Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Seconds until the token expires
    pub expires_in: i64,
    pub user: LoginUserResponse,
}

#[derive(Debug, Serialize)]
pub struct LoginUserResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
}

// ============================================================================
// Profile Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub bio: String,
    pub avatar_url: String,
    pub resume_url: String,
    pub social_links: Vec<SocialLinkResponse>,
    pub skills: Vec<SkillResponse>,
    pub experiences: Vec<ExperienceResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SocialLinkResponse {
    pub id: Uuid,
    pub platform: String,
    pub url: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub icon_url: String,
}

// ============================================================================
// Experience Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ExperienceResponse {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub projects: Vec<ProjectSummaryResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Project reference listed under an experience
#[derive(Debug, Serialize)]
pub struct ProjectSummaryResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub is_featured: bool,
}

// ============================================================================
// Project Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content_markdown: String,
    pub demo_url: String,
    pub repo_url: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_featured: bool,
    pub experience_id: Option<Uuid>,
    pub skills: Vec<SkillResponse>,
    pub images: Vec<ImageResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Post Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content_markdown: String,
    pub summary: String,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub tags: Vec<TagResponse>,
    pub images: Vec<ImageResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

// ============================================================================
// Image Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub id: Uuid,
    pub entity_type: &'static str,
    pub entity_id: Uuid,
    pub file_name: String,
    /// Absolute URL of the file
    pub file_path: String,
    pub mime_type: String,
    pub size: i64,
    pub alt_text: String,
    pub is_primary: bool,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

/// Result of a file upload, ready to be sent back in a post/project `images` list
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub file_name: String,
    /// Relative path as stored (`/media/uploads/...`)
    pub file_path: String,
    /// Absolute URL under the configured base URL
    pub url: String,
    pub mime_type: String,
    pub size: u64,
}

// ============================================================================
// Contact Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ContactMessageResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
