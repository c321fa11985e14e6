//! Post and tag mappers

use folio_core::entities::{Post, Tag};

use crate::models::{PostModel, TagModel};

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            title: model.title,
            slug: model.slug,
            content_markdown: model.content_markdown,
            summary: model.summary,
            is_published: model.is_published,
            published_at: model.published_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<TagModel> for Tag {
    fn from(model: TagModel) -> Self {
        Tag {
            id: model.id,
            name: model.name,
            slug: model.slug,
        }
    }
}
