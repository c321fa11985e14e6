//! # folio-api
//!
//! REST API server for the personal site, built with Axum.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_app_state_with_pool, run};
pub use state::AppState;
