//! Client configuration management.
//!
//! Holds the client identity (id, secret, organization subdomain), host
//! overrides for the auth and API services, and logging preferences.
//! Configuration is persisted as TOML on disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{EmviError, EmviResult};
use crate::platform::Platform;

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Client identity and connection settings.
    #[serde(default)]
    pub client: ClientConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Client identity and connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Client id generated in the organization administration.
    #[serde(default)]
    pub client_id: String,

    /// Client secret generated alongside the client id.
    #[serde(default)]
    pub client_secret: String,

    /// Organization subdomain (`https://my-orga.emvi.com/` -> `my-orga`).
    #[serde(default)]
    pub organization: String,

    /// Authentication service host. Empty means the default host.
    #[serde(default)]
    pub auth_host: String,

    /// API service host. Empty means the default host.
    #[serde(default)]
    pub api_host: String,

    /// API request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub api_timeout_ms: u64,

    /// Whether to accept invalid TLS certificates (test environments only).
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            organization: String::new(),
            auth_host: String::new(),
            api_host: String::new(),
            api_timeout_ms: default_api_timeout(),
            accept_invalid_certs: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given identity, using the default hosts.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        organization: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            organization: organization.into(),
            ..Self::default()
        }
    }

    /// Override the auth and API hosts. Empty strings keep the defaults.
    pub fn with_hosts(mut self, auth_host: impl Into<String>, api_host: impl Into<String>) -> Self {
        self.auth_host = auth_host.into();
        self.api_host = api_host.into();
        self
    }

    /// The auth host to use, falling back to the default when unset.
    pub fn effective_auth_host(&self) -> String {
        sanitize_host(&self.auth_host, constants::DEFAULT_AUTH_HOST)
    }

    /// The API host to use, falling back to the default when unset.
    pub fn effective_api_host(&self) -> String {
        sanitize_host(&self.api_host, constants::DEFAULT_API_HOST)
    }

    /// Check that the identity fields required for authentication are
    /// present and the request timeout is usable.
    pub fn validate(&self) -> EmviResult<()> {
        if self.client_id.trim().is_empty() {
            return Err(EmviError::MissingConfig("client_id".into()));
        }
        if self.client_secret.trim().is_empty() {
            return Err(EmviError::MissingConfig("client_secret".into()));
        }
        if self.organization.trim().is_empty() {
            return Err(EmviError::MissingConfig("organization".into()));
        }
        if self.api_timeout_ms == 0 {
            return Err(EmviError::Config("api_timeout_ms must be greater than 0".into()));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load configuration from the default config file path.
    pub fn load_default() -> EmviResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> EmviResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> EmviResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| EmviError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> EmviResult<PathBuf> {
        Ok(Platform::config_dir()?.join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> EmviResult<PathBuf> {
        if self.logging.directory.is_empty() {
            Ok(Platform::data_dir()?.join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }
}

/// Trim a host override and strip trailing slashes; empty means `default`.
fn sanitize_host(host: &str, default: &str) -> String {
    let trimmed = host.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
