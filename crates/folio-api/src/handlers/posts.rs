//! Post handlers
//!
//! The public router only ever sees published posts.

use axum::extract::State;
use folio_service::dto::{CreatePostRequest, PaginatedResponse, PostResponse, UpdatePostRequest};
use folio_service::PostService;

use crate::extractors::{AuthUser, IdPath, Pagination, SlugPath, ValidatedJson};
use crate::response::{ApiResponse, ApiResult, Created};
use crate::state::AppState;

/// GET /api/public/posts
pub async fn list_published_posts(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<ApiResponse<PaginatedResponse<PostResponse>>> {
    let posts = PostService::new(state.service_context())
        .list_published(page)
        .await?;
    Ok(ApiResponse::new("Posts retrieved successfully", posts))
}

/// Unpublished posts answer 404 here
///
/// GET /api/public/posts/:slug
pub async fn get_published_post(
    State(state): State<AppState>,
    SlugPath(slug): SlugPath,
) -> ApiResult<ApiResponse<PostResponse>> {
    let post = PostService::new(state.service_context())
        .get_published(&slug)
        .await?;
    Ok(ApiResponse::new("Post retrieved successfully", post))
}

/// GET /api/admin/posts
pub async fn list_posts(
    State(state): State<AppState>,
    _auth: AuthUser,
    Pagination(page): Pagination,
) -> ApiResult<ApiResponse<PaginatedResponse<PostResponse>>> {
    let posts = PostService::new(state.service_context()).list_all(page).await?;
    Ok(ApiResponse::new("Posts retrieved successfully", posts))
}

/// GET /api/admin/posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiResponse<PostResponse>> {
    let post = PostService::new(state.service_context()).get(id).await?;
    Ok(ApiResponse::new("Post retrieved successfully", post))
}

/// POST /api/admin/posts
pub async fn create_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<ApiResponse<PostResponse>>> {
    let post = PostService::new(state.service_context()).create(request).await?;
    Ok(Created(ApiResponse::new("Post created successfully", post)))
}

/// PUT /api/admin/posts/:id
pub async fn update_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<ApiResponse<PostResponse>> {
    let post = PostService::new(state.service_context())
        .update(id, request)
        .await?;
    Ok(ApiResponse::new("Post updated successfully", post))
}

/// DELETE /api/admin/posts/:id
pub async fn delete_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiResponse<()>> {
    PostService::new(state.service_context()).delete(id).await?;
    Ok(ApiResponse::message("Post deleted successfully"))
}
