//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_data, assert_error, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn admin_token(server: &TestServer) -> (SeededAdmin, String) {
    let admin = seed_admin(&server.pool).await.unwrap();
    let response = server
        .post("/api/admin/login", &admin.login())
        .await
        .unwrap();
    let login: LoginResponse = assert_data(response, StatusCode::OK).await.unwrap();
    (admin, login.token)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = seed_admin(&server.pool).await.unwrap();

    let response = server.post("/api/admin/login", &admin.login()).await.unwrap();
    let login: LoginResponse = assert_data(response, StatusCode::OK).await.unwrap();

    assert!(!login.token.is_empty());
    assert_eq!(login.expires_in, 24 * 3600);
    assert_eq!(login.user.id, admin.id);
    assert_eq!(login.user.email, admin.email);
    assert_eq!(login.user.full_name, "");

    let response = server
        .get_auth("/api/admin/posts", &login.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = seed_admin(&server.pool).await.unwrap();

    let wrong_password = LoginRequest {
        email: admin.email.clone(),
        password: "wrong-password".to_string(),
    };
    let response = server.post("/api/admin/login", &wrong_password).await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
        .await
        .unwrap();

    let unknown = LoginRequest {
        email: format!("nobody_{}@example.com", unique_suffix()),
        password: "whatever".to_string(),
    };
    let response = server.post("/api/admin/login", &unknown).await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_email_conflict() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_admin, token) = admin_token(&server).await;
    let other = seed_admin(&server.pool).await.unwrap();

    let response = server
        .put_auth("/api/admin/update-email", &token, &json!({"email": other.email}))
        .await
        .unwrap();
    assert_error(response, StatusCode::CONFLICT, "EMAIL_ALREADY_EXISTS")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_password_then_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (admin, token) = admin_token(&server).await;

    let response = server
        .put_auth(
            "/api/admin/update-password",
            &token,
            &json!({"password": "new-secret-pw"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post("/api/admin/login", &admin.login()).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post(
            "/api/admin/login",
            &LoginRequest {
                email: admin.email.clone(),
                password: "new-secret-pw".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_unpublished_post_is_hidden() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_admin, token) = admin_token(&server).await;

    let response = server
        .post_auth("/api/admin/posts", &token, &CreatePostRequest::draft())
        .await
        .unwrap();
    let post: PostResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert!(!post.is_published);
    assert!(post.published_at.is_none());
    assert_eq!(post.tags[0].slug, "rust");

    let public_path = format!("/api/public/posts/{}", post.slug);
    let response = server.get(&public_path).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_POST")
        .await
        .unwrap();

    let response = server
        .put_auth(
            &format!("/api/admin/posts/{}", post.id),
            &token,
            &json!({"is_published": true}),
        )
        .await
        .unwrap();
    let published: PostResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(published.published_at.is_some());
    assert_eq!(published.title, post.title);

    let response = server.get(&public_path).await.unwrap();
    let public: PostResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(public.id, post.id);

    let response = server
        .delete_auth(&format!("/api/admin/posts/{}", post.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&public_path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_post_title_conflicts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_admin, token) = admin_token(&server).await;

    let request = CreatePostRequest::draft();
    let response = server
        .post_auth("/api/admin/posts", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/admin/posts", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

// ============================================================================
// Skill Tests
// ============================================================================

#[tokio::test]
async fn test_skill_pagination_meta() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_admin, token) = admin_token(&server).await;

    for _ in 0..3 {
        let response = server
            .post_auth("/api/admin/skills", &token, &CreateSkillRequest::unique())
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/api/public/skills?page=1&limit=2").await.unwrap();
    let page: Paginated<SkillResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.meta.current_page, 1);
    assert_eq!(page.meta.limit, 2);
    assert_eq!(page.data.len(), 2);
    assert!(page.meta.total_data >= 3);
    assert_eq!(page.meta.total_page, (page.meta.total_data + 1) / 2);

    let response = server
        .get("/api/public/skills?page=abc&limit=500")
        .await
        .unwrap();
    let page: Paginated<SkillResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.meta.current_page, 1);
    assert_eq!(page.meta.limit, 100);
}

#[tokio::test]
async fn test_duplicate_skill_name_conflicts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_admin, token) = admin_token(&server).await;

    let request = CreateSkillRequest::unique();
    let response = server
        .post_auth("/api/admin/skills", &token, &request)
        .await
        .unwrap();
    let skill: SkillResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(skill.name, request.name);

    let response = server
        .post_auth("/api/admin/skills", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

// ============================================================================
// Image Tests
// ============================================================================

#[tokio::test]
async fn test_upload_attach_and_delete_image() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_admin, token) = admin_token(&server).await;

    let response = server
        .upload(&token, "cover.png", "image/png", b"not really a png".to_vec())
        .await
        .unwrap();
    let uploaded: UploadResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(uploaded.mime_type, "image/png");
    assert!(uploaded.file_path.starts_with("/media/uploads/"));
    assert_eq!(uploaded.url, format!("{}{}", server.base_url(), uploaded.file_path));

    let on_disk = server
        .storage
        .path()
        .join(uploaded.file_path.trim_start_matches("/media/"));
    assert!(on_disk.exists());

    // The file is served back at its public URL
    let response = server.get(&uploaded.file_path).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let mut request = CreatePostRequest::draft();
    request.images = vec![ImageInput {
        file_name: uploaded.file_name.clone(),
        file_path: uploaded.url.clone(),
        mime_type: uploaded.mime_type.clone(),
        size: uploaded.size as i64,
        is_primary: true,
    }];
    let response = server
        .post_auth("/api/admin/posts", &token, &request)
        .await
        .unwrap();
    let post: PostResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(post.images.len(), 1);
    assert_eq!(post.images[0].entity_type, "post");
    assert_eq!(post.images[0].file_path, uploaded.url);

    // A file already gone from disk does not block deleting the record
    std::fs::remove_file(&on_disk).unwrap();
    let response = server
        .delete_auth(&format!("/api/admin/images/{}", post.images[0].id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&format!("/api/admin/posts/{}", post.id), &token)
        .await
        .unwrap();
    let post: PostResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(post.images.is_empty());

    let response = server
        .delete_auth(&format!("/api/admin/images/{}", uuid::Uuid::new_v4()), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_upload_rejects_unsupported_and_oversized_files() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_admin, token) = admin_token(&server).await;

    let response = server
        .upload(&token, "notes.txt", "text/plain", b"hello".to_vec())
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "UNSUPPORTED_FILE_TYPE")
        .await
        .unwrap();

    let response = server
        .upload(&token, "huge.png", "image/png", vec![0; 70_000])
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "FILE_TOO_LARGE")
        .await
        .unwrap();
}

// ============================================================================
// Contact Tests
// ============================================================================

#[tokio::test]
async fn test_contact_message_triage() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_admin, token) = admin_token(&server).await;

    let response = server
        .post("/api/public/contact", &ContactRequest::unique())
        .await
        .unwrap();
    let message: ContactMessageResponse =
        assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(message.status, "unread");

    let response = server
        .put_auth(
            &format!("/api/admin/messages/{}/status", message.id),
            &token,
            &json!({"status": "archived"}),
        )
        .await
        .unwrap();
    let updated: ContactMessageResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "archived");

    let response = server
        .get_auth("/api/admin/messages?status=archived&limit=100", &token)
        .await
        .unwrap();
    let page: Paginated<ContactMessageResponse> =
        assert_data(response, StatusCode::OK).await.unwrap();
    assert!(page.data.iter().all(|m| m.status == "archived"));

    let response = server
        .delete_auth(&format!("/api/admin/messages/{}", message.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/admin/messages/{}", message.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
