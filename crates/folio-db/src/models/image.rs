//! Image database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for images table
#[derive(Debug, Clone, FromRow)]
pub struct ImageModel {
    pub id: Uuid,
    pub entity_type: String,
    pub entity_id: Uuid,
    pub file_name: String,
    pub file_path: String,
    pub mime_type: String,
    pub size: i64,
    pub alt_text: String,
    pub is_primary: bool,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}
