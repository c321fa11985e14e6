//! Post service
//!
//! Public reads only see published posts; an unpublished post looks exactly
//! like a missing one from the outside.

use folio_core::{DomainError, ImageOwner, PageRequest, Post};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{
    images_from_inputs, CreatePostRequest, PaginatedResponse, PostResponse, UpdatePostRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::media::remove_dropped_files;
use super::tag::TagService;

pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Published posts, newest first
    #[instrument(skip(self))]
    pub async fn list_published(
        &self,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<PostResponse>> {
        self.list(page, true).await
    }

    /// Every post including drafts
    #[instrument(skip(self))]
    pub async fn list_all(&self, page: PageRequest) -> ServiceResult<PaginatedResponse<PostResponse>> {
        self.list(page, false).await
    }

    /// A published post by slug
    #[instrument(skip(self))]
    pub async fn get_published(&self, slug: &str) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_slug(slug)
            .await?
            .filter(Post::is_public)
            .ok_or_else(|| DomainError::PostNotFound(slug.to_string()))?;
        self.to_response(post).await
    }

    /// Any post by id
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<PostResponse> {
        let post = self.find(id).await?;
        self.to_response(post).await
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(&self, request: CreatePostRequest) -> ServiceResult<PostResponse> {
        let mut post = Post::new(request.title)?;
        post.content_markdown = request.content_markdown;
        post.summary = request.summary;
        post.set_published(request.is_published);

        let tag_ids = TagService::new(self.ctx).resolve(&request.tags).await?;
        let images = images_from_inputs(ImageOwner::Post(post.id), &request.images, self.ctx.media());

        self.ctx.post_repo().create(&post, &tag_ids, &images).await?;

        info!(post_id = %post.id, slug = %post.slug, "Post created");
        self.to_response(post).await
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, id: Uuid, request: UpdatePostRequest) -> ServiceResult<PostResponse> {
        let mut post = self.find(id).await?;

        if let Some(title) = request.title {
            post.set_title(title)?;
        }
        if let Some(content) = request.content_markdown {
            post.content_markdown = content;
        }
        if let Some(summary) = request.summary {
            post.summary = summary;
        }
        if let Some(publish) = request.is_published {
            post.set_published(publish);
        }
        post.touch();

        let tag_ids = match request.tags {
            Some(names) => Some(TagService::new(self.ctx).resolve(&names).await?),
            None => None,
        };

        let owner = ImageOwner::Post(post.id);
        let images = request
            .images
            .map(|inputs| images_from_inputs(owner, &inputs, self.ctx.media()));
        let previous = match images {
            Some(_) => self.ctx.image_repo().list_by_owner(owner).await?,
            None => Vec::new(),
        };

        self.ctx
            .post_repo()
            .update(&post, tag_ids.as_deref(), images.as_deref())
            .await?;

        if images.is_some() {
            remove_dropped_files(self.ctx.image_repo(), self.ctx.media(), &previous).await;
        }

        info!(post_id = %id, "Post updated");
        self.to_response(post).await
    }

    /// Delete a post, its image rows and, best effort, their files
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        let images = self
            .ctx
            .image_repo()
            .list_by_owner(ImageOwner::Post(id))
            .await?;

        self.ctx.post_repo().delete(id).await?;
        remove_dropped_files(self.ctx.image_repo(), self.ctx.media(), &images).await;

        info!(post_id = %id, "Post deleted");
        Ok(())
    }

    async fn list(
        &self,
        page: PageRequest,
        published_only: bool,
    ) -> ServiceResult<PaginatedResponse<PostResponse>> {
        let page = self.ctx.post_repo().list(page, published_only).await?;
        let request = page.request;
        let total = page.total;

        let mut items = Vec::with_capacity(page.items.len());
        for post in page.items {
            items.push(self.to_response(post).await?);
        }
        Ok(folio_core::Page::new(items, total, request).into())
    }

    async fn find(&self, id: Uuid) -> ServiceResult<Post> {
        Ok(self
            .ctx
            .post_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(id.to_string()))?)
    }

    async fn to_response(&self, post: Post) -> ServiceResult<PostResponse> {
        let tags = self.ctx.post_repo().tags(post.id).await?;
        let images = self
            .ctx
            .image_repo()
            .list_by_owner(ImageOwner::Post(post.id))
            .await?;
        Ok(PostResponse::from_parts(post, &tags, &images, self.ctx.media()))
    }
}
