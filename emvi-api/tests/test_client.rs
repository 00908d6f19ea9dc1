//! Integration tests for the request executor.
//!
//! Tests the identity headers, the single re-authentication on 401,
//! status checking and response decoding.

mod common;

use common::{
    authenticated_client, client_for, mount_token, organization_body, BEARER, CLIENT_ID,
    ORGANIZATION,
};
use emvi_api::EmviClient;
use emvi_core::config::ClientConfig;
use emvi_core::error::EmviError;
use emvi_models::Organization;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORGANIZATION_PATH: &str = "/api/v1/organization";

#[tokio::test]
async fn unauthorized_triggers_exactly_one_refresh_and_retry() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("GET"))
        .and(path(ORGANIZATION_PATH))
        .and(header("Authorization", BEARER))
        .respond_with(ResponseTemplate::new(200).set_body_json(organization_body()))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ORGANIZATION_PATH))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let organization = client.get_organization().await.expect("retry should succeed");

    assert_eq!(organization.name, "API Test");
    assert_eq!(client.credentials().access_token().await, common::ACCESS_TOKEN);
}

#[tokio::test]
async fn second_unauthorized_surfaces_as_api_error() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;
    Mock::given(method("GET"))
        .and(path(ORGANIZATION_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("token revoked"))
        .expect(2)
        .mount(&server)
        .await;

    let err = client_for(&server).get_organization().await.unwrap_err();

    assert!(err.is_unauthorized());
    match err {
        EmviError::Api { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "token revoked");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn refresh_failure_during_retry_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token"))
        .respond_with(ResponseTemplate::new(500).set_body_string("auth down"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ORGANIZATION_PATH))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).get_organization().await.unwrap_err();
    assert!(
        matches!(err, EmviError::AuthRejected { status: 500, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn valid_token_is_reused_without_refresh() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await;
    Mock::given(method("GET"))
        .and(path(ORGANIZATION_PATH))
        .and(header("Authorization", BEARER))
        .respond_with(ResponseTemplate::new(200).set_body_json(organization_body()))
        .expect(3)
        .mount(&server)
        .await;

    for _ in 0..3 {
        client.get_organization().await.unwrap();
    }
}

#[tokio::test]
async fn identity_headers_sent_with_every_request() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await;
    Mock::given(method("GET"))
        .and(path(ORGANIZATION_PATH))
        .and(header("Organization", ORGANIZATION))
        .and(header("Client", CLIENT_ID))
        .and(header("Authorization", BEARER))
        .respond_with(ResponseTemplate::new(200).set_body_json(organization_body()))
        .expect(1)
        .mount(&server)
        .await;

    client.get_organization().await.unwrap();
}

#[tokio::test]
async fn first_request_goes_out_before_any_token_exists() {
    let server = MockServer::start().await;
    mount_token(&server, 0).await;
    Mock::given(method("GET"))
        .and(path(ORGANIZATION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(organization_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.get_organization().await.unwrap();
    assert!(client.credentials().current().await.is_none());
}

#[tokio::test]
async fn non_ok_status_is_api_error_with_body() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await;
    Mock::given(method("GET"))
        .and(path(ORGANIZATION_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_string("organization not found"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.get_organization().await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(!err.is_unauthorized());
    assert_eq!(
        err.to_string(),
        "received status code 404 on request: organization not found"
    );
}

#[tokio::test]
async fn success_status_other_than_ok_is_api_error() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await;
    Mock::given(method("GET"))
        .and(path(ORGANIZATION_PATH))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = client.get_organization().await.unwrap_err();
    assert!(matches!(err, EmviError::Api { status: 204, .. }), "got {err:?}");
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await;
    Mock::given(method("GET"))
        .and(path(ORGANIZATION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"name\": "))
        .mount(&server)
        .await;

    let err = client.get_organization().await.unwrap_err();
    assert!(matches!(err, EmviError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn get_json_reaches_any_path() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/pin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(organization_body()))
        .expect(1)
        .mount(&server)
        .await;

    let url = client.endpoint("/api/v1/pin", &[]).unwrap();
    let organization: Organization = client.get_json(url).await.unwrap();
    assert_eq!(organization.base.id, "orga1");
}

#[tokio::test]
async fn concurrent_requests_share_one_client() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await;
    Mock::given(method("GET"))
        .and(path(ORGANIZATION_PATH))
        .and(header("Authorization", BEARER))
        .respond_with(ResponseTemplate::new(200).set_body_json(organization_body()))
        .expect(4)
        .mount(&server)
        .await;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.get_organization().await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
}

#[tokio::test]
async fn unreachable_api_host_is_transport_error() {
    let config = ClientConfig::new(CLIENT_ID, "secret", ORGANIZATION)
        .with_hosts("http://127.0.0.1:1", "http://127.0.0.1:1");
    let client = EmviClient::new(&config).unwrap();

    let err = client.get_languages().await.unwrap_err();
    assert!(matches!(err, EmviError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn token_unusable_as_header_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "access_token": "bad\ntoken",
            "expires_in": 7200
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ORGANIZATION_PATH))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).get_organization().await.unwrap_err();
    assert!(
        matches!(err, EmviError::Decode(ref msg) if msg.contains("header value")),
        "got {err:?}"
    );
}
