//! Client credentials exchange and access token state.
//!
//! The access token is held as one immutable [`Credential`] snapshot. A
//! refresh builds a new snapshot and swaps it in under the write lock, so a
//! reader sees either the old or the new credential, never a mix.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use emvi_core::constants::{endpoints, GRANT_TYPE};
use emvi_core::error::{EmviError, EmviResult};

/// Request body of the client credentials exchange.
#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

/// Response body of the client credentials exchange.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    token_type: String,
    access_token: String,
    /// TTL in seconds.
    expires_in: u64,
}

/// An access token obtained from the authentication service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token_type: String,
    access_token: String,
    expires_in: u64,
    received_at: DateTime<Utc>,
}

impl Credential {
    fn from_response(response: TokenResponse, received_at: DateTime<Utc>) -> Self {
        Self {
            token_type: response.token_type,
            access_token: response.access_token,
            expires_in: response.expires_in,
            received_at,
        }
    }

    /// Token type reported by the server (usually "Bearer").
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Lifetime the server announced for the token.
    ///
    /// Informational only: the client does not expire tokens itself, it
    /// refreshes when the API answers 401.
    pub fn expires_in(&self) -> Duration {
        Duration::from_secs(self.expires_in)
    }

    /// When the token was received.
    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    /// Announced expiry time, derived from `received_at` and `expires_in`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        chrono::Duration::from_std(self.expires_in())
            .ok()
            .and_then(|ttl| self.received_at.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("token_type", &self.token_type)
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .field("received_at", &self.received_at)
            .finish()
    }
}

/// Owns the client credentials and the current access token.
///
/// Cloning shares the token state.
#[derive(Clone)]
pub struct CredentialManager {
    http: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    current: Arc<RwLock<Option<Credential>>>,
}

impl CredentialManager {
    /// Create a manager for the given auth host. No token is held until the
    /// first [`refresh`](Self::refresh).
    pub fn new(
        http: Client,
        auth_host: &str,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            http,
            token_url: format!("{auth_host}{}", endpoints::AUTHENTICATION),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            current: Arc::new(RwLock::new(None)),
        }
    }

    /// Full URL of the token endpoint.
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Exchange the client credentials for a new access token.
    ///
    /// On success the stored credential is replaced and a copy returned.
    /// A network failure yields `Transport`, a non-success status
    /// `AuthRejected`, and an unexpected body `Decode`; the stored
    /// credential is left untouched in every failure case.
    pub async fn refresh(&self) -> EmviResult<Credential> {
        let body = TokenRequest {
            grant_type: GRANT_TYPE,
            client_id: &self.client_id,
            client_secret: &self.client_secret,
        };
        debug!("POST {}", endpoints::AUTHENTICATION);

        let response = self.http.post(&self.token_url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("token request rejected with status {}", status.as_u16());
            return Err(EmviError::AuthRejected {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let token: TokenResponse = serde_json::from_slice(&bytes)
            .map_err(|e| EmviError::Decode(format!("failed to parse token response: {e}")))?;
        let credential = Credential::from_response(token, Utc::now());

        *self.current.write().await = Some(credential.clone());
        info!(
            "access token refreshed (type={}, expires_in={}s)",
            credential.token_type, credential.expires_in
        );

        Ok(credential)
    }

    /// Snapshot of the current credential, if one was obtained.
    pub async fn current(&self) -> Option<Credential> {
        self.current.read().await.clone()
    }

    /// The current access token, or an empty string before the first refresh.
    pub async fn access_token(&self) -> String {
        self.current
            .read()
            .await
            .as_ref()
            .map(|c| c.access_token.clone())
            .unwrap_or_default()
    }

    /// Drop the current credential.
    pub async fn clear(&self) {
        *self.current.write().await = None;
        debug!("credential cleared");
    }
}
