//! HTTP client for the Emvi client API.
//!
//! Handles URL construction, the authentication headers, the single
//! re-authentication on 401, status checking and response decoding.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use emvi_core::config::ClientConfig;
use emvi_core::constants::{self, headers};
use emvi_core::error::{EmviError, EmviResult};
use emvi_core::platform::Platform;

use crate::auth::{Credential, CredentialManager};
use crate::filter::Filter;

/// HTTP client for the Emvi client API.
///
/// Wraps reqwest::Client with the organization/client headers, bearer
/// authentication and token refresh. Cloning shares the connection pool and
/// the token state.
#[derive(Clone)]
pub struct EmviClient {
    inner: Client,
    /// API host without trailing slash (e.g. "https://api.emvi.com").
    api_host: String,
    /// Auth host without trailing slash.
    auth_host: String,
    organization: String,
    client_id: String,
    /// `Organization` and `Client` headers sent with every API request.
    identity_headers: HeaderMap,
    credentials: CredentialManager,
}

impl EmviClient {
    /// Create a new client from configuration.
    ///
    /// No network call is made; the first request is sent without a token
    /// and authenticates through the 401 path.
    pub fn new(config: &ClientConfig) -> EmviResult<Self> {
        let api_host = config.effective_api_host();
        let auth_host = config.effective_auth_host();
        for host in [&api_host, &auth_host] {
            Url::parse(host).map_err(|e| EmviError::InvalidUrl(format!("{host}: {e}")))?;
        }
        if config.api_timeout_ms == 0 {
            return Err(EmviError::Config("api_timeout_ms must be greater than 0".into()));
        }

        let mut builder = Client::builder()
            .timeout(Duration::from_millis(config.api_timeout_ms))
            .connect_timeout(Duration::from_secs(constants::CONNECT_TIMEOUT_SECS))
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(Platform::user_agent());

        if config.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let inner = builder
            .build()
            .map_err(|e| EmviError::Transport(format!("failed to build HTTP client: {e}")))?;

        let credentials = CredentialManager::new(
            inner.clone(),
            &auth_host,
            config.client_id.clone(),
            config.client_secret.clone(),
        );

        let identity_headers = identity_headers(&config.organization, &config.client_id)?;

        Ok(Self {
            inner,
            api_host,
            auth_host,
            organization: config.organization.clone(),
            client_id: config.client_id.clone(),
            identity_headers,
            credentials,
        })
    }

    /// Get the API host.
    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    /// Get the auth host.
    pub fn auth_host(&self) -> &str {
        &self.auth_host
    }

    /// Get the organization subdomain.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Get the client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Access the token state.
    pub fn credentials(&self) -> &CredentialManager {
        &self.credentials
    }

    /// Obtain a fresh access token now instead of waiting for a 401.
    pub async fn refresh_token(&self) -> EmviResult<Credential> {
        self.credentials.refresh().await
    }

    // --- URL building ---

    /// Join the API host with a fixed endpoint path, then append each of
    /// `segments` as a percent-encoded path segment.
    pub fn endpoint(&self, path: &str, segments: &[&str]) -> EmviResult<Url> {
        let raw = format!("{}{path}", self.api_host);
        let mut url = Url::parse(&raw).map_err(|e| EmviError::InvalidUrl(format!("{raw}: {e}")))?;

        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| EmviError::InvalidUrl(format!("{raw} cannot have path segments")))?
                .extend(segments);
        }

        Ok(url)
    }

    // --- Requests ---

    /// Authenticated GET of `url`, decoded into `T`.
    ///
    /// A 401 triggers one token refresh and one retry with the new token.
    /// Any status other than 200 afterwards (including a second 401) is
    /// returned as `Api`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> EmviResult<T> {
        debug!("GET {}", url.path());
        let mut response = self.send_get(&url).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            warn!("unauthorized on {}, refreshing access token", url.path());
            self.credentials.refresh().await?;
            response = self.send_get(&url).await?;
        }

        Self::decode(response).await
    }

    async fn send_get(&self, url: &Url) -> EmviResult<Response> {
        let token = self.credentials.access_token().await;
        let mut bearer = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
            EmviError::Decode(format!("access token is not a valid header value: {e}"))
        })?;
        bearer.set_sensitive(true);

        let response = self
            .inner
            .get(url.clone())
            .headers(self.identity_headers.clone())
            .header(AUTHORIZATION, bearer)
            .send()
            .await?;

        Ok(response)
    }

    /// Check for 200 OK and decode the JSON body.
    async fn decode<T: DeserializeOwned>(response: Response) -> EmviResult<T> {
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(EmviError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| EmviError::Decode(format!("failed to parse response: {e}")))
    }
}

/// Build the `Organization` and `Client` headers.
fn identity_headers(organization: &str, client_id: &str) -> EmviResult<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in [(headers::ORGANIZATION, organization), (headers::CLIENT, client_id)] {
        let header = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| EmviError::Config(format!("invalid header name {name}: {e}")))?;
        map.insert(header, HeaderValue::from_str(value)?);
    }
    Ok(map)
}

/// Append the free-text query, filter parameters and auxiliary parameters
/// to `url`.
///
/// `query` is added under `query` when non-empty, auxiliary parameters only
/// when their value is non-empty. A URL with nothing to add is returned
/// without a `?`.
pub fn build_url(
    mut url: Url,
    query: &str,
    filter: Option<&dyn Filter>,
    params: &[(&str, &str)],
) -> Url {
    let mut pairs: Vec<(&str, String)> = Vec::new();

    if !query.is_empty() {
        pairs.push(("query", query.to_string()));
    }

    if let Some(filter) = filter {
        for (key, value) in filter.params() {
            pairs.push((key, value));
        }
    }

    for (key, value) in params {
        if !value.is_empty() {
            pairs.push((key, value.to_string()));
        }
    }

    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }

    url
}
