//! Organization command.

use console::style;

use emvi_api::EmviClient;
use emvi_core::error::EmviResult;

use crate::OutputFormat;

/// Run the organization command.
pub async fn run(client: EmviClient, format: OutputFormat) -> EmviResult<()> {
    let organization = client.get_organization().await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&organization).unwrap_or_default());
        }
        OutputFormat::Text => {
            println!("{}", style(&organization.name).bold().underlined());
            println!("  ID:        {}", organization.base.id);
            println!("  Subdomain: {}", organization.name_normalized);
            println!(
                "  Plan:      {}",
                if organization.expert {
                    style("expert").green().to_string()
                } else {
                    "entry".to_string()
                }
            );
            println!("  Members:   {}", organization.member_count);
            println!("  Articles:  {}", organization.article_count);
            println!("  Created:   {}", super::format_date(organization.base.def_time));
        }
    }

    Ok(())
}
