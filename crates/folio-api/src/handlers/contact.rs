//! Contact form and message inbox handlers

use axum::extract::State;
use folio_service::dto::{
    ContactMessageResponse, CreateContactRequest, PaginatedResponse, UpdateMessageStatusRequest,
};
use folio_service::ContactService;

use crate::extractors::{AuthUser, IdPath, MessageFilter, Pagination, ValidatedJson};
use crate::response::{ApiResponse, ApiResult, Created};
use crate::state::AppState;

/// POST /api/public/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateContactRequest>,
) -> ApiResult<Created<ApiResponse<ContactMessageResponse>>> {
    let message = ContactService::new(state.service_context())
        .submit(request)
        .await?;
    Ok(Created(ApiResponse::new("Message sent successfully", message)))
}

/// Newest first; `?status=unread|read|archived` narrows the list
///
/// GET /api/admin/messages
pub async fn list_messages(
    State(state): State<AppState>,
    _auth: AuthUser,
    Pagination(page): Pagination,
    filter: MessageFilter,
) -> ApiResult<ApiResponse<PaginatedResponse<ContactMessageResponse>>> {
    let messages = ContactService::new(state.service_context())
        .list(page, filter.status)
        .await?;
    Ok(ApiResponse::new("Messages retrieved successfully", messages))
}

/// PUT /api/admin/messages/:id/status
pub async fn update_message_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateMessageStatusRequest>,
) -> ApiResult<ApiResponse<ContactMessageResponse>> {
    let message = ContactService::new(state.service_context())
        .update_status(id, request.status)
        .await?;
    Ok(ApiResponse::new("Message status updated successfully", message))
}

/// DELETE /api/admin/messages/:id
pub async fn delete_message(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<ApiResponse<()>> {
    ContactService::new(state.service_context()).delete(id).await?;
    Ok(ApiResponse::message("Message deleted successfully"))
}
