//! Emvi Core - Foundation types shared by the Emvi client crates.
//!
//! This crate provides:
//! - Client configuration (identity, hosts, timeouts) persisted as TOML
//! - The error taxonomy used by every request
//! - Structured logging with tracing
//! - API constants (default hosts, endpoint paths, header names)

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::{AppConfig, ClientConfig};
pub use error::{EmviError, EmviResult};
pub use logging::init_logging;
pub use platform::Platform;
