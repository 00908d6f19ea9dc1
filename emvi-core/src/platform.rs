//! Platform detection and OS-specific directories.

use std::path::PathBuf;

use crate::error::{EmviError, EmviResult};

/// Directory name used under the platform config/data roots.
const APP_DIR: &str = "emvi";

/// Detected operating system platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Detect the current platform at compile time.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Get the platform-specific configuration directory.
    ///
    /// - Windows: `%APPDATA%/emvi`
    /// - macOS: `~/Library/Application Support/emvi`
    /// - Linux: `~/.config/emvi`
    pub fn config_dir() -> EmviResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| EmviError::Config("could not determine config directory".into()))?;
        Ok(base.join(APP_DIR))
    }

    /// Get the platform-specific data directory (log files live here).
    pub fn data_dir() -> EmviResult<PathBuf> {
        let base = dirs::data_dir()
            .ok_or_else(|| EmviError::Config("could not determine data directory".into()))?;
        Ok(base.join(APP_DIR))
    }

    /// Get a human-readable platform name.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
        }
    }

    /// User agent sent with every request.
    pub fn user_agent() -> String {
        format!(
            "emvi-rs/{} ({})",
            crate::constants::CLIENT_VERSION,
            Self::current().name()
        )
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
