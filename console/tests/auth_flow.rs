//! # Auth Flow Tests
//!
//! Login and registration against a mock backend.

mod common;

use std::sync::Arc;

use common::TestBackend;
use console::core::ApiError;
use console::services::api::ApiClient;
use console::services::auth::AuthService;
use console::services::token_store::{MemoryTokenStore, TokenStore, ACCESS_TOKEN_KEY};
use serde_json::json;
use shared::{AdminRole, LoginPayload, RegisterPayload};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn register_payload() -> RegisterPayload {
    RegisterPayload {
        username: "staff01".to_string(),
        email: "staff01@example.com".to_string(),
        password: "Str0ngPass!".to_string(),
        role: AdminRole::Staff,
    }
}

fn login_payload(password: &str) -> LoginPayload {
    LoginPayload {
        email: "staff01@example.com".to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_register_then_login_end_to_end() {
    let backend = TestBackend::start().await;

    Mock::given(method("POST"))
        .and(path("/admins/register"))
        .and(body_json(json!({
            "username": "staff01",
            "email": "staff01@example.com",
            "password": "Str0ngPass!",
            "role": "Staff"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&backend.server)
        .await;

    Mock::given(method("POST"))
        .and(path("/admins/login"))
        .and(body_json(json!({
            "usernameOrEmail": "staff01@example.com",
            "password": "Str0ngPass!"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accessToken": "jwt-123" })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let auth = AuthService::new(backend.api.clone(), backend.tokens.clone());

    auth.register(&register_payload()).await.unwrap();
    let response = auth.login(&login_payload("Str0ngPass!")).await.unwrap();

    assert_eq!(response.access_token, "jwt-123");
    assert_eq!(
        backend.tokens.get(ACCESS_TOKEN_KEY).unwrap().as_deref(),
        Some("jwt-123")
    );
}

#[tokio::test]
async fn test_login_401_exposes_backend_message() {
    let backend = TestBackend::start().await;

    Mock::given(method("POST"))
        .and(path("/admins/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let auth = AuthService::new(backend.api.clone(), backend.tokens.clone());
    let err = auth.login(&login_payload("wrong")).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.message(), Some("Invalid credentials"));
    assert_eq!(backend.tokens.get(ACCESS_TOKEN_KEY).unwrap(), None);
}

#[tokio::test]
async fn test_login_is_not_retried() {
    let backend = TestBackend::start().await;

    Mock::given(method("POST"))
        .and(path("/admins/login"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&backend.server)
        .await;

    let err = backend.api.login_admin(&login_payload("x")).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Http {
            status: 503,
            message: None
        }
    );
}

#[tokio::test]
async fn test_register_conflict_message() {
    let backend = TestBackend::start().await;

    Mock::given(method("POST"))
        .and(path("/admins/register"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "error": "Email already registered" })),
        )
        .mount(&backend.server)
        .await;

    let err = backend.api.register_admin(&register_payload()).await.unwrap_err();
    assert_eq!(err.message(), Some("Email already registered"));
}

#[tokio::test]
async fn test_legacy_admin_path() {
    let backend = TestBackend::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "accessToken": "legacy-token" } })),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    let client = ApiClient::new(backend.server.uri(), store).with_admin_path("admin");

    let response = console::services::api::login_admin(&client, &login_payload("x"))
        .await
        .unwrap();
    assert_eq!(response.access_token, "legacy-token");
}

#[tokio::test]
async fn test_stored_token_sent_as_bearer() {
    let backend = TestBackend::start().await;
    backend.tokens.set(ACCESS_TOKEN_KEY, "jwt-abc").unwrap();

    Mock::given(method("GET"))
        .and(path("/categories/c-1"))
        .and(header("authorization", "Bearer jwt-abc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::category_json("c-1", "Shirts")),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let category = backend.api.get_category("c-1").await.unwrap();
    assert_eq!(category.category_name, "Shirts");
}

#[tokio::test]
async fn test_network_failure_is_network_error() {
    let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    // Port 9 (discard) is not listening on test machines.
    let client = ApiClient::new("http://127.0.0.1:9", store);

    let err = console::services::api::get_categories(&client, None)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
