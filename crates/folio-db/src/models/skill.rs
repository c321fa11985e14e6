//! Skill database model

use sqlx::FromRow;
use uuid::Uuid;

/// Database model for skills table
#[derive(Debug, Clone, FromRow)]
pub struct SkillModel {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub icon_url: String,
}
