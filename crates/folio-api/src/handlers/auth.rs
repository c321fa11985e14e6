//! Authentication handlers
//!
//! Login for the single admin account plus credential changes.

use axum::extract::State;
use folio_service::dto::{LoginRequest, LoginResponse, UpdateEmailRequest, UpdatePasswordRequest};
use folio_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// Login with email and password
///
/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<ApiResponse<LoginResponse>> {
    let response = AuthService::new(state.service_context()).login(request).await?;
    Ok(ApiResponse::new("Login successful", response))
}

/// PUT /api/admin/update-email
pub async fn update_email(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateEmailRequest>,
) -> ApiResult<ApiResponse<()>> {
    AuthService::new(state.service_context())
        .update_email(auth.user_id, &request.email)
        .await?;
    Ok(ApiResponse::message("Email updated successfully"))
}

/// PUT /api/admin/update-password
pub async fn update_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdatePasswordRequest>,
) -> ApiResult<ApiResponse<()>> {
    AuthService::new(state.service_context())
        .update_password(auth.user_id, &request.password)
        .await?;
    Ok(ApiResponse::message("Password updated successfully"))
}
