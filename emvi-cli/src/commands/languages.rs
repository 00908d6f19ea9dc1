//! Languages command.

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

use emvi_api::EmviClient;
use emvi_core::error::EmviResult;

use crate::OutputFormat;

/// Run the languages command.
pub async fn run(client: EmviClient, format: OutputFormat) -> EmviResult<()> {
    let languages = client.get_languages().await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&languages).unwrap_or_default());
        }
        OutputFormat::Text => {
            if languages.is_empty() {
                println!("No languages found.");
                return Ok(());
            }

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_content_arrangement(ContentArrangement::Dynamic);

            table.set_header(vec!["Code", "Name", "Default", "ID"]);

            for language in &languages {
                table.add_row(vec![
                    language.code.clone(),
                    language.name.clone(),
                    if language.default { "yes" } else { "" }.to_string(),
                    language.base.id.clone(),
                ]);
            }

            println!("{table}");
        }
    }

    Ok(())
}
