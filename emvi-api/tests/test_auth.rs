//! Integration tests for the client credentials exchange.
//!
//! Tests token refresh success, rejected and malformed token responses,
//! transport failures, and credential snapshot consistency.

mod common;

use common::{client_for, mount_token, token_request, ACCESS_TOKEN};
use emvi_api::EmviClient;
use emvi_core::config::ClientConfig;
use emvi_core::error::EmviError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn refresh_yields_bearer_token_with_positive_expiry() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    let client = client_for(&server);

    let credential = client.refresh_token().await.expect("refresh should succeed");

    assert_eq!(credential.token_type(), "Bearer");
    assert_eq!(credential.access_token(), ACCESS_TOKEN);
    assert!(credential.expires_in().as_secs() > 0);
    assert!(credential.expires_at() > credential.received_at());

    let stored = client.credentials().current().await.expect("credential stored");
    assert_eq!(stored, credential);
    assert_eq!(client.credentials().access_token().await, ACCESS_TOKEN);
}

#[tokio::test]
async fn refresh_rejected_status_is_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid client"))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client.refresh_token().await.unwrap_err();

    match err {
        EmviError::AuthRejected { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid client");
        }
        other => panic!("expected AuthRejected, got {other:?}"),
    }
    assert!(client.credentials().current().await.is_none());
}

#[tokio::test]
async fn refresh_with_empty_rejected_body_is_still_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = client_for(&server).refresh_token().await.unwrap_err();
    assert!(matches!(err, EmviError::AuthRejected { status: 403, .. }));
}

#[tokio::test]
async fn refresh_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).refresh_token().await.unwrap_err();
    assert!(matches!(err, EmviError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn refresh_wrong_shape_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"token_type": "Bearer"})),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client.refresh_token().await.unwrap_err();
    assert!(matches!(err, EmviError::Decode(_)), "got {err:?}");
    assert!(client.credentials().current().await.is_none());
}

#[tokio::test]
async fn refresh_unreachable_host_is_transport_error() {
    let config = ClientConfig::new("id", "secret", "orga")
        .with_hosts("http://127.0.0.1:1", "http://127.0.0.1:1");
    let client = EmviClient::new(&config).unwrap();

    let err = client.refresh_token().await.unwrap_err();
    assert!(matches!(err, EmviError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn refresh_sends_json_credentials() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    client_for(&server).refresh_token().await.unwrap();

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, token_request());
    assert_eq!(
        requests[0]
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
}

#[tokio::test]
async fn concurrent_refreshes_leave_a_whole_credential() {
    let server = MockServer::start().await;
    mount_token(&server, 2).await;
    let client = client_for(&server);
    let other = client.clone();

    let (a, b) = tokio::join!(client.refresh_token(), other.refresh_token());
    assert!(a.is_ok() && b.is_ok());

    let stored = client.credentials().current().await.unwrap();
    assert_eq!(stored.access_token(), ACCESS_TOKEN);
    assert_eq!(stored.token_type(), "Bearer");
    // clones share the token state
    assert_eq!(other.credentials().current().await.unwrap(), stored);
}

#[tokio::test]
async fn clear_drops_the_credential() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    let client = client_for(&server);
    client.refresh_token().await.unwrap();

    client.credentials().clear().await;
    assert!(client.credentials().current().await.is_none());
    assert_eq!(client.credentials().access_token().await, "");
}
