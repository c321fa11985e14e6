//! Test fixtures and data generators
//!
//! Request bodies, the response shapes tests read back, and an admin seeder.

use anyhow::Result;
use folio_common::{hash_password, JwtService};
use folio_core::traits::UserRepository;
use folio_core::User;
use folio_db::{PgPool, PgUserRepository};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::helpers::TEST_JWT_SECRET;

/// Unique suffix so concurrent tests never collide on unique columns
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// Admin credentials seeded directly through the repository
#[derive(Debug, Clone)]
pub struct SeededAdmin {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

impl SeededAdmin {
    pub fn login(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Insert an admin user with a fresh email
pub async fn seed_admin(pool: &PgPool) -> Result<SeededAdmin> {
    let password = "correct-horse".to_string();
    let user = User::new(format!("admin_{}@example.com", unique_suffix()));
    let hash = hash_password(&password)?;

    PgUserRepository::new(pool.clone()).create(&user, &hash).await?;

    Ok(SeededAdmin {
        id: user.id,
        email: user.email,
        password,
    })
}

/// A token for `user_id` signed with the test secret
pub fn token_for(user_id: Uuid) -> Result<String> {
    Ok(JwtService::new(TEST_JWT_SECRET, 1).generate_token(user_id)?)
}

/// Success envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: Option<T>,
}

/// Paginated payload inside `data`
#[derive(Debug, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Debug, Deserialize)]
pub struct PageMeta {
    pub current_page: i64,
    pub total_page: i64,
    pub total_data: i64,
    pub limit: i64,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: i64,
    pub user: LoginUser,
}

#[derive(Debug, Deserialize)]
pub struct LoginUser {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Serialize)]
pub struct CreateSkillRequest {
    pub name: String,
    pub category: String,
}

impl CreateSkillRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("Skill {}", unique_suffix()),
            category: "Language".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SkillResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct ImageInput {
    pub file_name: String,
    pub file_path: String,
    pub mime_type: String,
    pub size: i64,
    pub is_primary: bool,
}

#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content_markdown: String,
    pub is_published: bool,
    pub tags: Vec<String>,
    pub images: Vec<ImageInput>,
}

impl CreatePostRequest {
    pub fn draft() -> Self {
        Self {
            title: format!("Draft {}", unique_suffix()),
            content_markdown: "# Hello".to_string(),
            is_published: false,
            tags: vec!["Rust".to_string()],
            images: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub is_published: bool,
    pub published_at: Option<String>,
    pub tags: Vec<TagResponse>,
    pub images: Vec<ImageResponse>,
}

#[derive(Debug, Deserialize)]
pub struct TagResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageResponse {
    pub id: Uuid,
    pub entity_type: String,
    pub file_path: String,
}

#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub file_name: String,
    pub file_path: String,
    pub url: String,
    pub mime_type: String,
    pub size: u64,
}

#[derive(Debug, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("Visitor {}", unique_suffix()),
            email: "visitor@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site!".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactMessageResponse {
    pub id: Uuid,
    pub name: String,
    pub status: String,
}
