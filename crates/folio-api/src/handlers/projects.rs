//! Project handlers
//!
//! Public and admin reads return the same rows; projects have no draft state.

use axum::extract::State;
use folio_service::dto::{
    CreateProjectRequest, PaginatedResponse, ProjectResponse, UpdateProjectRequest,
};
use folio_service::ProjectService;

use crate::extractors::{AuthUser, IdPath, Pagination, ValidatedJson};
use crate::response::{ApiResponse, ApiResult, Created};
use crate::state::AppState;

/// GET /api/public/projects
pub async fn list_projects(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<ApiResponse<PaginatedResponse<ProjectResponse>>> {
    let projects = ProjectService::new(state.service_context()).list(page).await?;
    Ok(ApiResponse::new("Projects retrieved successfully", projects))
}

/// GET /api/public/projects/:id
pub async fn get_project(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<ApiResponse<ProjectResponse>> {
    let project = ProjectService::new(state.service_context()).get(id).await?;
    Ok(ApiResponse::new("Project retrieved successfully", project))
}

/// GET /api/admin/projects
pub async fn admin_list_projects(
    state: State<AppState>,
    _auth: AuthUser,
    page: Pagination,
) -> ApiResult<ApiResponse<PaginatedResponse<ProjectResponse>>> {
    list_projects(state, page).await
}

/// GET /api/admin/projects/:id
pub async fn admin_get_project(
    state: State<AppState>,
    _auth: AuthUser,
    id: IdPath,
) -> ApiResult<ApiResponse<ProjectResponse>> {
    get_project(state, id).await
}

/// POST /api/admin/projects
pub async fn create_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateProjectRequest>,
) -> ApiResult<Created<ApiResponse<ProjectResponse>>> {
    let project = ProjectService::new(state.service_context())
        .create(request)
        .await?;
    Ok(Created(ApiResponse::new("Project created successfully", project)))
}

/// Partial update; `skill_ids` and `images` replace the whole set when present
///
/// PUT /api/admin/projects/:id
pub async fn update_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateProjectRequest>,
) -> ApiResult<ApiResponse<ProjectResponse>> {
    let project = ProjectService::new(state.service_context())
        .update(id, request)
        .await?;
    Ok(ApiResponse::new("Project updated successfully", project))
}

/// DELETE /api/admin/projects/:id
pub async fn delete_project(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiResponse<()>> {
    ProjectService::new(state.service_context()).delete(id).await?;
    Ok(ApiResponse::message("Project deleted successfully"))
}
