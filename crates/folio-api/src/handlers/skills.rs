//! Skill handlers

use axum::extract::State;
use folio_service::dto::{CreateSkillRequest, PaginatedResponse, SkillResponse, UpdateSkillRequest};
use folio_service::SkillService;

use crate::extractors::{AuthUser, IdPath, Pagination, ValidatedJson};
use crate::response::{ApiResponse, ApiResult, Created};
use crate::state::AppState;

/// GET /api/public/skills
pub async fn list_skills(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<ApiResponse<PaginatedResponse<SkillResponse>>> {
    let skills = SkillService::new(state.service_context()).list(page).await?;
    Ok(ApiResponse::new("Skills retrieved successfully", skills))
}

/// GET /api/admin/skills
pub async fn admin_list_skills(
    state: State<AppState>,
    _auth: AuthUser,
    page: Pagination,
) -> ApiResult<ApiResponse<PaginatedResponse<SkillResponse>>> {
    list_skills(state, page).await
}

/// GET /api/admin/skills/:id
pub async fn get_skill(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiResponse<SkillResponse>> {
    let skill = SkillService::new(state.service_context()).get(id).await?;
    Ok(ApiResponse::new("Skill retrieved successfully", skill))
}

/// POST /api/admin/skills
pub async fn create_skill(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateSkillRequest>,
) -> ApiResult<Created<ApiResponse<SkillResponse>>> {
    let skill = SkillService::new(state.service_context()).create(request).await?;
    Ok(Created(ApiResponse::new("Skill created successfully", skill)))
}

/// PUT /api/admin/skills/:id
pub async fn update_skill(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateSkillRequest>,
) -> ApiResult<ApiResponse<SkillResponse>> {
    let skill = SkillService::new(state.service_context())
        .update(id, request)
        .await?;
    Ok(ApiResponse::new("Skill updated successfully", skill))
}

/// DELETE /api/admin/skills/:id
pub async fn delete_skill(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiResponse<()>> {
    SkillService::new(state.service_context()).delete(id).await?;
    Ok(ApiResponse::message("Skill deleted successfully"))
}
