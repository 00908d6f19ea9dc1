//! Emvi CLI - Command-line interface for the Emvi client API.
//!
//! Searches and reads articles, the organization and its languages from
//! the terminal. Useful for scripting and for checking client credentials.

mod commands;

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::info;

use emvi_core::config::AppConfig;
use emvi_core::error::EmviResult;
use emvi_core::logging;

use commands::IdentityArgs;

/// Emvi - knowledge base client for the Emvi client API.
#[derive(Parser)]
#[command(
    name = "emvi",
    version,
    about = "Emvi client API CLI",
    long_about = "A command-line interface for the Emvi client API.\n\
                   Authenticates with a client id and secret and reads articles, \
                   languages and organization data."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(flatten)]
    identity: IdentityArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Obtain an access token and show its type and expiry.
    Token {
        /// Print the access token itself.
        #[arg(long)]
        show: bool,
    },
    /// Search articles.
    Search(commands::search::SearchArgs),
    /// Show an article with its content and authors.
    Article {
        /// Article ID.
        id: String,
        /// Content language ID (default language if omitted).
        #[arg(short, long, default_value = "")]
        lang: String,
        /// Content version (latest if omitted or 0).
        #[arg(long, default_value = "0")]
        version: u32,
    },
    /// Show the organization.
    Organization,
    /// List the organization languages.
    Languages,
}

#[tokio::main]
async fn main() -> EmviResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from_file(Path::new(path))?,
        None => AppConfig::load_default()?,
    };
    cli.identity.apply(&mut config.client);

    // Initialize logging
    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    let log_guard = match config.effective_log_dir() {
        Ok(dir) => logging::init_logging(&log_level, &dir, config.logging.json_output).ok(),
        Err(_) => None,
    };
    if log_guard.is_none() {
        logging::init_console_logging(&log_level);
    }

    info!("Emvi CLI v{}", emvi_core::constants::CLIENT_VERSION);

    let client = commands::create_client(&config.client)?;

    // Dispatch to command handlers
    match cli.command {
        Commands::Token { show } => commands::token::run(client, show, cli.format).await,
        Commands::Search(args) => commands::search::run(client, args, cli.format).await,
        Commands::Article { id, lang, version } => {
            commands::article::run(client, id, lang, version, cli.format).await
        }
        Commands::Organization => commands::organization::run(client, cli.format).await,
        Commands::Languages => commands::languages::run(client, cli.format).await,
    }
}
