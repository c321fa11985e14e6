//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, paths and pagination.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::AuthUser;
pub use pagination::{MessageFilter, Pagination, PaginationParams};
pub use path::{IdPath, SlugPath};
pub use validated::ValidatedJson;
