//! Profile and social link database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub bio: String,
    pub avatar_url: String,
    pub resume_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for social_links table
#[derive(Debug, Clone, FromRow)]
pub struct SocialLinkModel {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub platform: String,
    pub url: String,
    pub order_index: i32,
}
