//! Tag service

use folio_core::Tag;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::TagResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct TagService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TagService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<TagResponse>> {
        let tags = self.ctx.tag_repo().list().await?;
        Ok(tags.into_iter().map(TagResponse::from).collect())
    }

    /// Resolve tag names to ids, creating tags that do not exist yet
    ///
    /// Names are matched by slug, so "Rust" and "rust" are the same tag.
    /// Blank names are skipped and duplicates collapse.
    pub async fn resolve(&self, names: &[String]) -> ServiceResult<Vec<Uuid>> {
        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let tag = self
                .ctx
                .tag_repo()
                .find_or_create(&Tag::new(name.to_string())?)
                .await?;
            if !ids.contains(&tag.id) {
                ids.push(tag.id);
            }
        }
        Ok(ids)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.tag_repo().delete(id).await?;
        info!(tag_id = %id, "Tag deleted");
        Ok(())
    }
}
