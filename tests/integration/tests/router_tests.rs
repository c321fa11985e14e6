//! In-process router tests
//!
//! These build the full application on a pool that never connects, so they
//! run everywhere. Every request here is answered before a query would run.
//!
//! Run with: cargo test -p integration-tests --test router_tests

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use integration_tests::{offline_app, token_for};
use tower::ServiceExt;
use uuid::Uuid;

fn app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let app = offline_app(dir.path()).unwrap();
    (app, dir)
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn authed(method: Method, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

fn json(method: Method, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_liveness_probe() {
    let (app, _dir) = app();
    let response = send(app, get("/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let (app, _dir) = app();
    let response = send(app, get("/health")).await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    let (app, _dir) = app();

    for (method, uri) in [
        (Method::GET, "/api/admin/profile"),
        (Method::GET, "/api/admin/posts"),
        (Method::POST, "/api/admin/skills"),
        (Method::DELETE, "/api/admin/tags/00000000-0000-0000-0000-000000000000"),
        (Method::POST, "/api/admin/images/upload"),
        (Method::GET, "/api/admin/messages"),
    ] {
        let request = Request::builder()
            .method(method.clone())
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = send(app.clone(), request).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{method} {uri}");
        let body = body_json(response).await;
        assert_eq!(body["error"], "MISSING_AUTH");
        assert!(body["detail"].is_string());
    }
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let (app, _dir) = app();
    let response = send(app, authed(Method::GET, "/api/admin/posts", "not-a-jwt")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_token_from_other_secret_is_rejected() {
    let (app, _dir) = app();
    let foreign = folio_common::JwtService::new("someone-else", 1)
        .generate_token(Uuid::new_v4())
        .unwrap();

    let response = send(app, authed(Method::GET, "/api/admin/posts", &foreign)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let (app, _dir) = app();
    let token = token_for(Uuid::new_v4()).unwrap();

    let response = send(app, authed(Method::DELETE, "/api/admin/posts/not-a-uuid", &token)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_unknown_message_status_filter() {
    let (app, _dir) = app();
    let token = token_for(Uuid::new_v4()).unwrap();

    let response = send(
        app,
        authed(Method::GET, "/api/admin/messages?status=spam", &token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_body_is_validated() {
    let (app, _dir) = app();

    let response = send(
        app.clone(),
        json(
            Method::POST,
            "/api/admin/login",
            &serde_json::json!({"email": "not-an-email", "password": "x"}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "VALIDATION_ERROR");

    let response = send(
        app,
        json(Method::POST, "/api/admin/login", &serde_json::json!({"email": 1})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "INVALID_REQUEST_BODY");
}

#[tokio::test]
async fn test_contact_form_is_validated() {
    let (app, _dir) = app();

    let response = send(
        app,
        json(
            Method::POST,
            "/api/public/contact",
            &serde_json::json!({"name": "", "email": "a@b.co", "message": "hi"}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_media_is_served_from_storage_root() {
    let (app, dir) = app();
    std::fs::create_dir_all(dir.path().join("uploads")).unwrap();
    std::fs::write(dir.path().join("uploads/hello.png"), b"png").unwrap();

    let response = send(app.clone(), get("/media/uploads/hello.png")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"png");

    let response = send(app, get("/media/uploads/missing.png")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_rejects_extension_before_reading_file() {
    let (app, _dir) = app();
    let token = token_for(Uuid::new_v4()).unwrap();

    // Larger than the default upload limit; the name alone decides the outcome
    let boundary = "folio-boundary";
    let mut body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"setup.exe\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n"
    )
    .into_bytes();
    body.extend(std::iter::repeat(0u8).take(5 * 1024 * 1024 + 1024));
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/admin/images/upload")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "UNSUPPORTED_FILE_TYPE");
}
