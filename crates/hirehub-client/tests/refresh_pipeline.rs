//! Refresh pipeline integration tests.
//!
//! Exercises the dispatcher and refresh coordinator against a mock
//! backend: pass-through of non-auth responses, the single
//! refresh-and-retry, and every failure mode that must propagate the
//! original 401.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hirehub_client::{ApiClient, ApiRequest, ClientConfig, ClientError, SessionStore};
use hirehub_models::{Session, UserRole};

fn seeker_session(access: Option<&str>, refresh: Option<&str>) -> Session {
    Session {
        access_token: access.map(Into::into),
        refresh_token: refresh.map(Into::into),
        email: Some("a@b.com".into()),
        role: Some(UserRole::Seeker),
    }
}

fn client_with(server: &MockServer, session: Session) -> ApiClient {
    let store = Arc::new(SessionStore::in_memory());
    store.set_session(session);
    let config = ClientConfig::default().with_base_url(server.uri());
    ApiClient::new(config, store).expect("client construction")
}

fn listing_body() -> serde_json::Value {
    serde_json::json!([{
        "id": "j1",
        "title": "Backend Engineer",
        "company_name": "Acme",
        "description": "Build the boring parts",
        "location": "Remote",
        "salary": "12 LPA",
        "keywords": ["rust"],
        "created_at": "2025-06-01T10:30:00Z"
    }])
}

async fn mount_refresh_never_called(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn non_401_response_passes_through_untouched() {
    let server = MockServer::start().await;
    mount_refresh_never_called(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(header("Authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(&server, seeker_session(Some("T1"), Some("R1")));
    let jobs = client.fetch_jobs().await.expect("listing should succeed");

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].company, "Acme");

    // The store is untouched by a successful call.
    let session = client.session().session();
    assert_eq!(session.access_token.as_deref(), Some("T1"));
    assert_eq!(session.refresh_token.as_deref(), Some("R1"));
}

#[tokio::test]
async fn application_error_is_not_intercepted() {
    let server = MockServer::start().await;
    mount_refresh_never_called(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"message": "db down"})),
        )
        .mount(&server)
        .await;

    let client = client_with(&server, seeker_session(Some("T1"), Some("R1")));
    let err = client.fetch_jobs().await.expect_err("500 should surface");

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "db down");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(client.session().access_token().as_deref(), Some("T1"));
}

#[tokio::test]
async fn expired_token_is_refreshed_and_retried_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(header("Authorization", "Bearer T1"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "token expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/refresh"))
        .and(body_json(serde_json::json!({"refresh_token": "R1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "T2"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(header("Authorization", "Bearer T2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(&server, seeker_session(Some("T1"), Some("R1")));
    let jobs = client.fetch_jobs().await.expect("retry should succeed");
    assert_eq!(jobs.len(), 1);

    // Only the access token rotated; the refresh token stays "R1".
    let session = client.session().session();
    assert_eq!(session.access_token.as_deref(), Some("T2"));
    assert_eq!(session.refresh_token.as_deref(), Some("R1"));
}

#[tokio::test]
async fn missing_refresh_token_propagates_original_401() {
    let server = MockServer::start().await;
    mount_refresh_never_called(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "token expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(&server, seeker_session(Some("T1"), None));
    let err = client.fetch_jobs().await.expect_err("401 should surface");

    match err {
        ClientError::Unauthorized(message) => assert_eq!(message, "token expired"),
        other => panic!("expected Unauthorized, got {other:?}"),
    }
    assert_eq!(client.session().access_token().as_deref(), Some("T1"));
}

#[tokio::test]
async fn failed_refresh_exchange_propagates_original_401() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "token expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/refresh"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"message": "refresh broken"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(&server, seeker_session(Some("T1"), Some("R1")));
    let err = client.fetch_jobs().await.expect_err("401 should surface");

    // The caller sees the original 401, never the refresh error.
    match err {
        ClientError::Unauthorized(message) => assert_eq!(message, "token expired"),
        other => panic!("expected Unauthorized, got {other:?}"),
    }
    // Store unchanged: still holds the expired token.
    assert_eq!(client.session().access_token().as_deref(), Some("T1"));
    assert_eq!(client.session().refresh_token().as_deref(), Some("R1"));
}

#[tokio::test]
async fn refresh_response_without_token_counts_as_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "token expired"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(&server, seeker_session(Some("T1"), Some("R1")));
    let err = client.fetch_jobs().await.expect_err("401 should surface");

    assert!(err.is_unauthorized());
    assert_eq!(client.session().access_token().as_deref(), Some("T1"));
}

#[tokio::test]
async fn second_401_after_refresh_is_terminal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(header("Authorization", "Bearer T1"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "token expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    // Exactly one refresh, even though the retry fails again.
    Mock::given(method("POST"))
        .and(path("/refresh"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "T2"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(header("Authorization", "Bearer T2"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "still expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(&server, seeker_session(Some("T1"), Some("R1")));
    let err = client.fetch_jobs().await.expect_err("second 401 is final");

    match err {
        ClientError::Unauthorized(message) => assert_eq!(message, "still expired"),
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn concurrent_expiry_coalesces_into_one_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(header("Authorization", "Bearer T1"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "token expired"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/refresh"))
        .and(body_json(serde_json::json!({"refresh_token": "R1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "T2"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(header("Authorization", "Bearer T2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body()))
        .mount(&server)
        .await;

    let client = client_with(&server, seeker_session(Some("T1"), Some("R1")));
    let (a, b) = tokio::join!(client.fetch_jobs(), client.fetch_jobs());

    // Both logical calls succeed; the refresh mock's expect(1) verifies
    // the exchanges were coalesced.
    assert_eq!(a.expect("first call").len(), 1);
    assert_eq!(b.expect("second call").len(), 1);
    assert_eq!(client.session().access_token().as_deref(), Some("T2"));
}

#[tokio::test]
async fn cancellation_abandons_the_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(listing_body())
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let client = client_with(&server, seeker_session(Some("T1"), Some("R1")));
    let cancel = CancellationToken::new();
    cancel.cancel();

    let request = ApiRequest::get("/api/jobs").with_cancellation(cancel);
    let err = client.dispatch(request).await.expect_err("cancelled");
    assert!(matches!(err, ClientError::Cancelled));
}

#[tokio::test]
async fn cancellation_during_refresh_leaves_store_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "token expired"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"access_token": "T2"}))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let client = client_with(&server, seeker_session(Some("T1"), Some("R1")));
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let request = ApiRequest::get("/api/jobs").with_cancellation(cancel);
    let err = client.dispatch(request).await.expect_err("cancelled");

    assert!(matches!(err, ClientError::Cancelled));
    // Abandoned mid-refresh: the expired token is still in place.
    assert_eq!(client.session().access_token().as_deref(), Some("T1"));
}
