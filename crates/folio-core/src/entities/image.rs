//! Image entity - uploaded file attached to a post or project

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::ImageOwner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: Uuid,
    pub owner: ImageOwner,
    pub file_name: String,
    /// Path relative to the site root, e.g. `/media/uploads/1700000000.jpg`
    pub file_path: String,
    pub mime_type: String,
    pub size: i64,
    pub alt_text: String,
    pub is_primary: bool,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

impl Image {
    pub fn new(owner: ImageOwner, file_name: String, file_path: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            file_name,
            file_path,
            mime_type: String::new(),
            size: 0,
            alt_text: String::new(),
            is_primary: false,
            order_index: 0,
            created_at: Utc::now(),
        }
    }
}
