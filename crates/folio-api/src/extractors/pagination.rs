//! Pagination extractor
//!
//! Reads `page` and `limit` from the query string. Parsing is lenient: a
//! missing, non-numeric or out-of-range value falls back to its default
//! rather than rejecting the request.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use folio_core::{MessageStatus, PageRequest};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

/// Normalized page request
#[derive(Debug, Clone, Copy, Default)]
pub struct Pagination(pub PageRequest);

fn lenient(value: Option<&str>) -> i64 {
    // Zero is out of range for both parameters, so it selects the default
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Pagination(PageRequest::new(
            lenient(params.page.as_deref()),
            lenient(params.limit.as_deref()),
        ))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(params.into())
    }
}

/// Optional `status` filter for the contact message inbox
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageFilter {
    pub status: Option<MessageStatus>,
}

#[derive(Debug, Deserialize)]
struct MessageFilterParams {
    #[serde(default)]
    status: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for MessageFilter
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<MessageFilterParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        let status = match params.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<MessageStatus>()?),
        };

        Ok(MessageFilter { status })
    }
}
