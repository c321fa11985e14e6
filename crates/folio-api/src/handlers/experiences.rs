//! Experience handlers

use axum::extract::State;
use folio_service::dto::{CreateExperienceRequest, ExperienceResponse, UpdateExperienceRequest};
use folio_service::ExperienceService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResponse, ApiResult, Created};
use crate::state::AppState;

/// Work history, current job first, each with its linked projects
///
/// GET /api/public/experiences
pub async fn list_experiences(
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<Vec<ExperienceResponse>>> {
    let experiences = ExperienceService::new(state.service_context()).list().await?;
    Ok(ApiResponse::new("Experiences retrieved successfully", experiences))
}

/// GET /api/admin/experiences
pub async fn admin_list_experiences(
    state: State<AppState>,
    _auth: AuthUser,
) -> ApiResult<ApiResponse<Vec<ExperienceResponse>>> {
    list_experiences(state).await
}

/// GET /api/admin/experiences/:id
pub async fn get_experience(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiResponse<ExperienceResponse>> {
    let experience = ExperienceService::new(state.service_context()).get(id).await?;
    Ok(ApiResponse::new("Experience retrieved successfully", experience))
}

/// POST /api/admin/experiences
pub async fn create_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateExperienceRequest>,
) -> ApiResult<Created<ApiResponse<ExperienceResponse>>> {
    let experience = ExperienceService::new(state.service_context())
        .create(auth.user_id, request)
        .await?;
    Ok(Created(ApiResponse::new(
        "Experience created successfully",
        experience,
    )))
}

/// PUT /api/admin/experiences/:id
pub async fn update_experience(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateExperienceRequest>,
) -> ApiResult<ApiResponse<ExperienceResponse>> {
    let experience = ExperienceService::new(state.service_context())
        .update(id, request)
        .await?;
    Ok(ApiResponse::new("Experience updated successfully", experience))
}

/// DELETE /api/admin/experiences/:id
pub async fn delete_experience(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiResponse<()>> {
    ExperienceService::new(state.service_context()).delete(id).await?;
    Ok(ApiResponse::message("Experience deleted successfully"))
}
