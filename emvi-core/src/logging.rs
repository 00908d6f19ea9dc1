//! Structured logging setup using the `tracing` ecosystem.
//!
//! A plain level such as `"info"` applies to the emvi crates only; every
//! other target is capped at `warn`. A full filter directive is used as
//! given, and `RUST_LOG` overrides both.

use std::path::Path;

use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::EmviResult;

/// Crates whose log level follows the configured level.
const EMVI_TARGETS: &[&str] = &["emvi_core", "emvi_models", "emvi_api", "emvi_cli"];

/// Level applied to targets outside the emvi crates.
const DEPENDENCY_LEVEL: &str = "warn";

/// Log file name prefix; the appender adds the date.
const LOG_FILE: &str = "emvi.log";

/// Turn a configured level into a filter directive.
///
/// `"debug"` becomes `"warn,emvi_core=debug,emvi_models=debug,..."`.
/// Anything containing `=` or `,` is already a directive and passes
/// through unchanged.
pub fn filter_directive(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }
    let level = if level.is_empty() { "info" } else { level };

    let mut directive = DEPENDENCY_LEVEL.to_string();
    for target in EMVI_TARGETS {
        directive.push_str(&format!(",{target}={level}"));
    }
    directive
}

fn env_filter(level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::try_new(filter_directive(level))
        .unwrap_or_else(|_| EnvFilter::new(filter_directive("info")))
}

/// Initialize the global tracing subscriber.
///
/// Logs go to stderr and to a daily-rotated `emvi.log` in `log_dir`. The
/// file layer writes JSON when `json_output` is set.
///
/// # Arguments
/// * `level` - Log level or filter directive, see [`filter_directive`]
/// * `log_dir` - Directory for log files
/// * `json_output` - If true, use JSON format for file output
pub fn init_logging(level: &str, log_dir: &Path, json_output: bool) -> EmviResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(rolling::daily(log_dir, LOG_FILE));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    // exactly one of the two file layers is installed
    let (json_layer, text_layer) = if json_output {
        let layer = fmt::layer()
            .with_writer(non_blocking)
            .json()
            .with_file(true)
            .with_line_number(true);
        (Some(layer), None)
    } else {
        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(console_layer)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;

    tracing::debug!(
        "logging initialized with filter {}, dir={}",
        filter_directive(level),
        log_dir.display()
    );

    Ok(LogGuard { _guard: guard })
}

/// Guard that keeps the non-blocking log writer alive.
/// Drop this to flush and close the log file.
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Console-only logger for tests or when no log directory is available.
///
/// A no-op when a subscriber is already installed.
pub fn init_console_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true).compact())
        .try_init();
}
