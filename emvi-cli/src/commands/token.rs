//! Token command - run the client credentials exchange.

use console::style;
use serde::Serialize;

use emvi_api::{Credential, EmviClient};
use emvi_core::error::EmviResult;

use crate::OutputFormat;

#[derive(Serialize)]
struct TokenOutput<'a> {
    token_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    expires_in: u64,
    expires_at: String,
}

impl<'a> TokenOutput<'a> {
    fn new(credential: &'a Credential, show: bool) -> Self {
        Self {
            token_type: credential.token_type(),
            access_token: show.then(|| credential.access_token()),
            expires_in: credential.expires_in().as_secs(),
            expires_at: credential.expires_at().to_rfc3339(),
        }
    }
}

/// Run the token command.
pub async fn run(client: EmviClient, show: bool, format: OutputFormat) -> EmviResult<()> {
    let credential = client.refresh_token().await?;
    let output = TokenOutput::new(&credential, show);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        }
        OutputFormat::Text => {
            println!("{}", style("Access token").bold().underlined());
            println!("  Organization: {}", client.organization());
            println!("  Type:         {}", output.token_type);
            println!(
                "  Expires:      {} ({}s)",
                credential.expires_at().format("%Y-%m-%d %H:%M:%S UTC"),
                output.expires_in
            );
            if let Some(token) = output.access_token {
                println!("  Token:        {}", token);
            }
        }
    }

    Ok(())
}
