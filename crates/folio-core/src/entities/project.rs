//! Project entity - portfolio item with optional link to an experience

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::Slug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a project, deriving its slug from the title
    pub fn new(title: String) -> Result<Self, DomainError> {
        let slug = slug_for(&title)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            slug,
            description: String::new(),
            content_markdown: String::new(),
            demo_url: String::new(),
            repo_url: String::new(),
            start_date: None,
            end_date: None,
            is_featured: false,
            experience_id: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the title and re-derive the slug
    pub fn set_title(&mut self, title: String) -> Result<(), DomainError> {
        self.slug = slug_for(&title)?;
        self.title = title;
        Ok(())
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

pub(crate) fn slug_for(title: &str) -> Result<String, DomainError> {
    Slug::from_title(title)
        .map(Slug::into_inner)
        .ok_or_else(|| {
            DomainError::ValidationError("title must contain a letter or digit".to_string())
        })
}
