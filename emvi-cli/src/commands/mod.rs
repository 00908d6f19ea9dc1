//! CLI command implementations.

pub mod article;
pub mod languages;
pub mod organization;
pub mod search;
pub mod token;

use chrono::{DateTime, Datelike, Utc};
use clap::Args;

use emvi_api::EmviClient;
use emvi_core::config::ClientConfig;
use emvi_core::error::EmviResult;

/// Client identity overrides, applied on top of the configuration file.
#[derive(Debug, Default, Args)]
pub struct IdentityArgs {
    /// Client ID (overrides config).
    #[arg(long, global = true)]
    pub client_id: Option<String>,

    /// Client secret (overrides config).
    #[arg(long, global = true)]
    pub client_secret: Option<String>,

    /// Organization subdomain (overrides config).
    #[arg(long, global = true)]
    pub organization: Option<String>,

    /// Authentication host (overrides config).
    #[arg(long, global = true)]
    pub auth_host: Option<String>,

    /// API host (overrides config).
    #[arg(long, global = true)]
    pub api_host: Option<String>,
}

impl IdentityArgs {
    /// Overwrite the config values that were given on the command line.
    pub fn apply(&self, config: &mut ClientConfig) {
        let overrides = [
            (&self.client_id, &mut config.client_id),
            (&self.client_secret, &mut config.client_secret),
            (&self.organization, &mut config.organization),
            (&self.auth_host, &mut config.auth_host),
            (&self.api_host, &mut config.api_host),
        ];
        for (value, target) in overrides {
            if let Some(value) = value {
                *target = value.clone();
            }
        }
    }
}

/// Helper to create an API client from config.
pub fn create_client(config: &ClientConfig) -> EmviResult<EmviClient> {
    config.validate()?;
    EmviClient::new(config)
}

/// Truncate a string to a maximum number of characters, appending an
/// ellipsis if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Format a timestamp for tables.
///
/// Unset timestamps (the server's `0001-01-01` or a missing field) show as "-".
pub fn format_date(date: DateTime<Utc>) -> String {
    if date.year() <= 1 || date.timestamp() == 0 {
        "-".to_string()
    } else {
        date.format("%Y-%m-%d %H:%M").to_string()
    }
}
