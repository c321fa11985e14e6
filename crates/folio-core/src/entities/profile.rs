//! Profile entity - the public identity shown on the site

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub bio: String,
    pub avatar_url: String,
    pub resume_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create an empty profile owned by `user_id`
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            full_name: String::new(),
            bio: String::new(),
            avatar_url: String::new(),
            resume_url: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Link to an external profile (GitHub, LinkedIn, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub platform: String,
    pub url: String,
    pub order_index: i32,
}

impl SocialLink {
    pub fn new(profile_id: Uuid, platform: String, url: String, order_index: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            profile_id,
            platform,
            url,
            order_index,
        }
    }
}
