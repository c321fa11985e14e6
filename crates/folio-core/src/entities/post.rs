//! Post entity - blog article with publish state and tags

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::project::slug_for;
use crate::error::DomainError;

/// Publication state of a post
///
/// `published_at` records when the current publication started. It is
/// cleared when a post is unpublished and stamped again on republish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishState {
    Draft,
    Published(DateTime<Utc>),
}

impl PublishState {
    /// Rebuild from stored columns
    pub fn from_parts(is_published: bool, published_at: Option<DateTime<Utc>>) -> Self {
        match (is_published, published_at) {
            (true, Some(at)) => Self::Published(at),
            // A published row without a timestamp is repaired on next write
            (true, None) => Self::Published(Utc::now()),
            (false, _) => Self::Draft,
        }
    }

    /// Apply the requested visibility at time `now`
    pub fn transition(self, publish: bool, now: DateTime<Utc>) -> Self {
        match (self, publish) {
            (Self::Published(at), true) => Self::Published(at),
            (Self::Draft, true) => Self::Published(now),
            (_, false) => Self::Draft,
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published(_))
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Published(at) => Some(*at),
            Self::Draft => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content_markdown: String,
    pub summary: String,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a draft post, deriving its slug from the title
    pub fn new(title: String) -> Result<Self, DomainError> {
        let slug = slug_for(&title)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            slug,
            content_markdown: String::new(),
            summary: String::new(),
            is_published: false,
            published_at: None,
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

    pub fn publish_state(&self) -> PublishState {
        PublishState::from_parts(self.is_published, self.published_at)
    }

    /// Publish or unpublish the post
    pub fn set_published(&mut self, publish: bool) {
        let state = self.publish_state().transition(publish, Utc::now());
        self.is_published = state.is_published();
        self.published_at = state.published_at();
    }

    /// Whether the post may be shown on public endpoints
    #[inline]
    pub fn is_public(&self) -> bool {
        self.is_published
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Post tag, unique by name and slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl Tag {
    pub fn new(name: String) -> Result<Self, DomainError> {
        let slug = slug_for(&name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            slug,
        })
    }
}
