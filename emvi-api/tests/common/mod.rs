//! Shared test utilities for integration tests.
//!
//! One `MockServer` plays both the auth host and the API host.

#![allow(dead_code)]

use emvi_api::EmviClient;
use emvi_core::config::ClientConfig;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CLIENT_ID: &str = "HEuxz77eec6xat5xD0Xj";
pub const CLIENT_SECRET: &str = "test-secret";
pub const ORGANIZATION: &str = "api-test";
pub const ACCESS_TOKEN: &str = "fresh-token";
pub const BEARER: &str = "Bearer fresh-token";

/// Create a client whose auth and API hosts both point at `server`.
pub fn client_for(server: &MockServer) -> EmviClient {
    let config = ClientConfig::new(CLIENT_ID, CLIENT_SECRET, ORGANIZATION)
        .with_hosts(server.uri(), server.uri());
    EmviClient::new(&config).expect("failed to build client")
}

/// Successful token endpoint response body.
pub fn token_body() -> Value {
    json!({
        "token_type": "Bearer",
        "access_token": ACCESS_TOKEN,
        "expires_in": 7200
    })
}

/// Expected client credentials exchange request body.
pub fn token_request() -> Value {
    json!({
        "grant_type": "client_credentials",
        "client_id": CLIENT_ID,
        "client_secret": CLIENT_SECRET
    })
}

/// Mount a token endpoint that must be called exactly `calls` times.
pub async fn mount_token(server: &MockServer, calls: u64) {
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/token"))
        .and(body_json(token_request()))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .expect(calls)
        .named("token endpoint")
        .mount(server)
        .await;
}

/// Create a client that already holds a token (one token call consumed).
pub async fn authenticated_client(server: &MockServer) -> EmviClient {
    mount_token(server, 1).await;
    let client = client_for(server);
    client.refresh_token().await.expect("token refresh failed");
    client
}

/// Organization response body with every field populated.
pub fn organization_body() -> Value {
    json!({
        "id": "orga1",
        "def_time": "2019-01-01T00:00:00Z",
        "mod_time": "2019-02-01T00:00:00Z",
        "name": "API Test",
        "name_normalized": "api-test",
        "picture": "",
        "expert": false,
        "create_group_admin": true,
        "create_group_mod": false,
        "member_count": 2,
        "article_count": 2
    })
}
