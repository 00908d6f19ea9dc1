//! Error types for the Emvi client.
//!
//! Every failure a caller can see is one `EmviError` variant. Request
//! failures fall into three groups: the call never completed (`Transport`),
//! the server answered with a non-200 status (`Api`, or `AuthRejected` for
//! the token endpoint), or the body could not be decoded (`Decode`).

use thiserror::Error;

/// Convenience type alias for Results using EmviError.
pub type EmviResult<T> = Result<T, EmviError>;

/// Unified error type for the Emvi client.
#[derive(Error, Debug)]
pub enum EmviError {
    // -- Network errors --
    /// The HTTP call could not be completed (connect, DNS, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// A response body was not valid JSON or did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The API answered a request with a status other than 200 OK.
    #[error("received status code {status} on request: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// The authentication service refused the client credentials exchange.
    #[error("authentication rejected (status {status}): {body}")]
    AuthRejected {
        /// HTTP status code returned by the token endpoint.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// A host or endpoint could not be turned into a URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    // -- Configuration errors --
    /// Failed to load or parse configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Generic --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EmviError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            EmviError::Api { status, .. } | EmviError::AuthRejected { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Whether the API rejected the request as unauthorized.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, EmviError::Api { status: 401, .. })
    }
}

impl From<serde_json::Error> for EmviError {
    fn from(e: serde_json::Error) -> Self {
        EmviError::Decode(e.to_string())
    }
}

impl From<toml::de::Error> for EmviError {
    fn from(e: toml::de::Error) -> Self {
        EmviError::Config(e.to_string())
    }
}

impl From<reqwest::Error> for EmviError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            EmviError::Transport(format!("request timed out: {e}"))
        } else if e.is_connect() {
            EmviError::Transport(format!("connection failed: {e}"))
        } else if e.is_decode() {
            EmviError::Decode(e.to_string())
        } else {
            EmviError::Transport(e.to_string())
        }
    }
}

impl From<reqwest::header::InvalidHeaderValue> for EmviError {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        EmviError::Config(format!("invalid header value: {e}"))
    }
}
