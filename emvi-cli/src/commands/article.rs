//! Article command - show one article.

use console::style;

use emvi_api::EmviClient;
use emvi_core::error::EmviResult;
use emvi_models::User;

use crate::OutputFormat;

/// Run the article command.
pub async fn run(
    client: EmviClient,
    id: String,
    lang: String,
    version: u32,
    format: OutputFormat,
) -> EmviResult<()> {
    let detail = client.get_article(&id, &lang, version).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&detail).unwrap_or_default());
        }
        OutputFormat::Text => {
            let title = detail
                .content
                .as_ref()
                .map(|c| c.title.as_str())
                .filter(|t| !t.is_empty())
                .unwrap_or("(untitled)");
            println!("{}", style(title).bold().underlined());

            if let Some(article) = &detail.article {
                println!("  ID:        {}", article.base.id);
                println!("  Published: {}", super::format_date(article.published));
                println!("  Views:     {}", article.views);
                if article.is_archived() {
                    println!("  Archived:  {}", style(&article.archived).yellow());
                }
                if !article.tags.is_empty() {
                    println!("  Tags:      {}", super::search::tag_names(article));
                }
            }

            if let Some(content) = &detail.content {
                println!("  Version:   {}", content.version);
                println!("  Language:  {}", content.language_id);
                if content.wip {
                    println!("  Status:    {}", style("work in progress").yellow());
                }
            }

            if !detail.authors.is_empty() {
                let authors: Vec<String> = detail.authors.iter().map(author_name).collect();
                println!("  Authors:   {}", authors.join(", "));
            }

            if let Some(content) = detail.content.as_ref().filter(|c| !c.content.is_empty()) {
                println!();
                println!("{}", content.content);
            }
        }
    }

    Ok(())
}

/// Display name of an author: full name, else username, else user id.
fn author_name(user: &User) -> String {
    let name = user.full_name();
    if !name.is_empty() {
        name
    } else if let Some(username) = user.username() {
        username.to_string()
    } else {
        user.base.id.clone()
    }
}
