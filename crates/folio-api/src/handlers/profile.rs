//! Profile handlers

use axum::extract::State;
use folio_service::dto::{ProfileResponse, UpdateProfileRequest};
use folio_service::ProfileService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// The site owner's profile
///
/// GET /api/public/profile
pub async fn get_public_profile(
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<ProfileResponse>> {
    let profile = ProfileService::new(state.service_context()).get_public().await?;
    Ok(ApiResponse::new("Profile retrieved successfully", profile))
}

/// GET /api/admin/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<ProfileResponse>> {
    let profile = ProfileService::new(state.service_context())
        .get_by_user(auth.user_id)
        .await?;
    Ok(ApiResponse::new("Profile retrieved successfully", profile))
}

/// Create the profile on first save, update it afterwards
///
/// PUT /api/admin/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<ApiResponse<ProfileResponse>> {
    let profile = ProfileService::new(state.service_context())
        .create_or_update(auth.user_id, request)
        .await?;
    Ok(ApiResponse::new("Profile saved successfully", profile))
}
