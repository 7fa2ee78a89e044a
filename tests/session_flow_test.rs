//! Session Manager integration tests
//!
//! Drives login, registration, logout and profile updates against a mock
//! HTTP backend and a temp-directory session store.

mod helpers;

use assert_matches::assert_matches;
use tempfile::TempDir;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use eventmate::models::UpdateProfileRequest;
use eventmate::{ApiError, AppError, ServiceFactory};

use helpers::{login_success_body, sample_user_json, test_settings};

async fn factory(server: &MockServer, dir: &TempDir) -> ServiceFactory {
    ServiceFactory::new(&test_settings(&server.uri(), dir))
        .await
        .expect("factory builds")
}

#[tokio::test]
async fn login_success_sets_user_and_persists_token() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("temp dir");

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({
            "email": "ayse@example.com",
            "password": "gizli123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_success_body("tok-1")))
        .expect(1)
        .mount(&server)
        .await;

    let services = factory(&server, &dir).await;
    let manager = &services.session_manager;

    let user = manager
        .login("ayse@example.com", "gizli123")
        .await
        .expect("login succeeds");
    assert_eq!(user.first_name, "Ayşe");
    assert!(manager.is_authenticated().await);
    assert_eq!(manager.token().await.as_deref(), Some("tok-1"));
    assert!(manager.has_persisted_session().await);

    // A new manager over the same data directory restores the session
    let restarted = factory(&server, &dir).await;
    assert!(restarted.session_manager.init().await.expect("init"));
    assert!(restarted.session_manager.is_authenticated().await);
    assert_eq!(
        restarted
            .session_manager
            .current_user()
            .await
            .map(|u| u.username),
        Some("ayse".to_string())
    );
}

#[tokio::test]
async fn login_failure_leaves_session_unchanged() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("temp dir");

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status": "error",
            "message": "Invalid credentials"
        })))
        .mount(&server)
        .await;

    let services = factory(&server, &dir).await;
    let manager = &services.session_manager;

    let result = manager.login("ayse@example.com", "yanlış").await;
    assert_matches!(result, Err(AppError::Api(ApiError::InvalidCredentials)));
    assert!(!manager.is_authenticated().await);
    assert!(manager.current_user().await.is_none());
    assert!(!manager.has_persisted_session().await);
}

#[tokio::test]
async fn register_logs_in_with_the_same_credentials() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("temp dir");

    // The register body must carry the username derived from the email
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_partial_json(serde_json::json!({
            "email": "ayse@example.com",
            "username": "ayse",
            "firstName": "Ayşe",
            "lastName": "Yılmaz"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "status": "success",
            "message": "User registered",
            "data": sample_user_json()
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({
            "email": "ayse@example.com",
            "password": "gizli123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_success_body("tok-2")))
        .expect(1)
        .mount(&server)
        .await;

    let services = factory(&server, &dir).await;
    let user = services
        .session_manager
        .register("ayse@example.com", "gizli123", "Ayşe", "Yılmaz")
        .await
        .expect("register + login succeeds");

    assert_eq!(user.username, "ayse");
    assert!(services.session_manager.is_authenticated().await);
    assert_eq!(
        services.session_manager.token().await.as_deref(),
        Some("tok-2")
    );
}

#[tokio::test]
async fn register_duplicate_email_surfaces_distinct_error() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("temp dir");

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "status": "error",
            "message": "Email already exists"
        })))
        .mount(&server)
        .await;

    let services = factory(&server, &dir).await;
    let result = services
        .session_manager
        .register("ayse@example.com", "gizli123", "Ayşe", "Yılmaz")
        .await;

    assert_matches!(result, Err(AppError::Api(ApiError::DuplicateEmail)));
    assert!(!services.session_manager.is_authenticated().await);
}

#[tokio::test]
async fn update_profile_merges_partial_response_into_user() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("temp dir");

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_success_body("tok-3")))
        .mount(&server)
        .await;

    // The backend echoes only the changed field back
    Mock::given(method("PATCH"))
        .and(path("/users/profile"))
        .and(header("authorization", "Bearer tok-3"))
        .and(body_json(serde_json::json!({"bio": "Dağcılık"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "message": "Profile updated",
            "data": { "bio": "Dağcılık" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let services = factory(&server, &dir).await;
    let manager = &services.session_manager;
    manager
        .login("ayse@example.com", "gizli123")
        .await
        .expect("login");

    let updated = manager
        .update_profile(&UpdateProfileRequest {
            bio: Some("Dağcılık".to_string()),
            ..UpdateProfileRequest::default()
        })
        .await
        .expect("profile update");

    assert_eq!(updated.bio.as_deref(), Some("Dağcılık"));
    assert_eq!(updated.first_name, "Ayşe");
    assert_eq!(updated.email, "ayse@example.com");

    // The merged profile is what a restart restores
    let restarted = factory(&server, &dir).await;
    restarted.session_manager.init().await.expect("init");
    assert_eq!(
        restarted
            .session_manager
            .current_user()
            .await
            .and_then(|u| u.bio),
        Some("Dağcılık".to_string())
    );
}

#[tokio::test]
async fn update_profile_without_token_makes_no_request() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("temp dir");

    Mock::given(method("PATCH"))
        .and(path("/users/profile"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let services = factory(&server, &dir).await;
    let result = services
        .session_manager
        .update_profile(&UpdateProfileRequest {
            bio: Some("x".to_string()),
            ..UpdateProfileRequest::default()
        })
        .await;

    assert_matches!(result, Err(AppError::NotAuthenticated(_)));
    server.verify().await;
}

#[tokio::test]
async fn logout_twice_is_idempotent() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("temp dir");

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_success_body("tok-4")))
        .mount(&server)
        .await;

    let services = factory(&server, &dir).await;
    let manager = &services.session_manager;
    manager
        .login("ayse@example.com", "gizli123")
        .await
        .expect("login");

    manager.logout().await.expect("first logout");
    assert!(manager.current_user().await.is_none());
    assert!(!manager.has_persisted_session().await);

    manager.logout().await.expect("second logout");
    assert!(manager.current_user().await.is_none());
}

#[tokio::test]
async fn concurrent_login_is_rejected_while_one_is_in_flight() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("temp dir");

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(login_success_body("tok-5"))
                .set_delay(std::time::Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    let services = factory(&server, &dir).await;
    let manager = &services.session_manager;

    let (first, second) = tokio::join!(
        manager.login("ayse@example.com", "gizli123"),
        manager.login("ayse@example.com", "gizli123"),
    );

    let outcomes = [first.is_ok(), second.is_ok()];
    assert_eq!(outcomes.iter().filter(|ok| **ok).count(), 1);

    let rejected = if outcomes[0] { second } else { first };
    assert_matches!(rejected, Err(AppError::OperationInFlight));
    assert!(manager.is_authenticated().await);
}

#[tokio::test]
async fn corrupted_persisted_record_restores_logged_out() {
    let server = MockServer::start().await;
    let dir = TempDir::new().expect("temp dir");

    tokio::fs::write(dir.path().join("session.json"), b"{broken")
        .await
        .expect("write garbage");

    let services = factory(&server, &dir).await;
    let restored = services.session_manager.init().await.expect("init");
    assert!(!restored);
    assert!(!services.session_manager.is_authenticated().await);
    assert!(!services.session_manager.has_persisted_session().await);
}
