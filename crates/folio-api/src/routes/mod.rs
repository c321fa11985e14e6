//! Route definitions
//!
//! Read-only site content under `/api/public`, the authenticated CMS under
//! `/api/admin`, and uploaded files under `/media`.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers::{
    auth, contact, experiences, health, images, posts, profile, projects, skills, tags,
};
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the file itself
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Create the API router
///
/// `max_upload_bytes` sizes the body limit of the upload route.
pub fn create_router(max_upload_bytes: u64) -> Router<AppState> {
    Router::new()
        .nest("/api/public", public_routes())
        .nest("/api/admin", admin_routes(max_upload_bytes))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Static files from the storage root, served at `/media`
pub fn media_routes(root: &std::path::Path) -> Router<AppState> {
    Router::new().nest_service("/media", ServeDir::new(root))
}

/// Visitor-facing routes; no authentication
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile::get_public_profile))
        .route("/skills", get(skills::list_skills))
        .route("/posts", get(posts::list_published_posts))
        .route("/posts/:slug", get(posts::get_published_post))
        .route("/projects", get(projects::list_projects))
        .route("/projects/:id", get(projects::get_project))
        .route("/experiences", get(experiences::list_experiences))
        .route("/tags", get(tags::list_tags))
        .route("/contact", post(contact::submit_contact))
}

/// Admin routes; everything except login requires a bearer token
fn admin_routes(max_upload_bytes: u64) -> Router<AppState> {
    let upload_limit = usize::try_from(max_upload_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .route("/login", post(auth::login))
        .route("/update-email", put(auth::update_email))
        .route("/update-password", put(auth::update_password))
        // Profile
        .route("/profile", get(profile::get_profile).put(profile::update_profile))
        // Posts
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/posts/:id",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        // Projects
        .route(
            "/projects",
            get(projects::admin_list_projects).post(projects::create_project),
        )
        .route(
            "/projects/:id",
            get(projects::admin_get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        // Skills
        .route(
            "/skills",
            get(skills::admin_list_skills).post(skills::create_skill),
        )
        .route(
            "/skills/:id",
            get(skills::get_skill)
                .put(skills::update_skill)
                .delete(skills::delete_skill),
        )
        // Experiences
        .route(
            "/experiences",
            get(experiences::admin_list_experiences).post(experiences::create_experience),
        )
        .route(
            "/experiences/:id",
            get(experiences::get_experience)
                .put(experiences::update_experience)
                .delete(experiences::delete_experience),
        )
        // Tags
        .route("/tags/:id", delete(tags::delete_tag))
        // Images
        .route(
            "/images/upload",
            post(images::upload_image).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/images/:id", delete(images::delete_image))
        // Contact messages
        .route("/messages", get(contact::list_messages))
        .route("/messages/:id/status", put(contact::update_message_status))
        .route("/messages/:id", delete(contact::delete_message))
}
