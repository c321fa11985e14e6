//! Tag handlers

use axum::extract::State;
use folio_service::dto::TagResponse;
use folio_service::TagService;

use crate::extractors::{AuthUser, IdPath};
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/public/tags
pub async fn list_tags(State(state): State<AppState>) -> ApiResult<ApiResponse<Vec<TagResponse>>> {
    let tags = TagService::new(state.service_context()).list().await?;
    Ok(ApiResponse::new("Tags retrieved successfully", tags))
}

/// Posts keep existing; only their link to the tag goes
///
/// DELETE /api/admin/tags/:id
pub async fn delete_tag(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiResponse<()>> {
    TagService::new(state.service_context()).delete(id).await?;
    Ok(ApiResponse::message("Tag deleted successfully"))
}
