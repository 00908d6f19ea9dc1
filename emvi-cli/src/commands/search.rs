//! Search command - find articles.

use chrono::NaiveDate;
use clap::Args;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use console::style;

use emvi_api::{ArticleFilter, BaseSearch, EmviClient, SortDirection};
use emvi_core::error::EmviResult;
use emvi_models::Article;

use crate::OutputFormat;

/// Search query and article filter options.
#[derive(Debug, Default, Args)]
pub struct SearchArgs {
    /// Free-text search query (matches everything if omitted).
    pub query: Option<String>,

    /// Maximum number of results.
    #[arg(short = 'n', long, default_value = "0")]
    pub limit: u32,

    /// Number of results to skip.
    #[arg(long, default_value = "0")]
    pub offset: u32,

    /// Created on or after this date (YYYY-MM-DD).
    #[arg(long)]
    pub created_start: Option<NaiveDate>,

    /// Created on or before this date (YYYY-MM-DD).
    #[arg(long)]
    pub created_end: Option<NaiveDate>,

    /// Updated on or after this date (YYYY-MM-DD).
    #[arg(long)]
    pub updated_start: Option<NaiveDate>,

    /// Updated on or before this date (YYYY-MM-DD).
    #[arg(long)]
    pub updated_end: Option<NaiveDate>,

    /// Published on or after this date (YYYY-MM-DD).
    #[arg(long)]
    pub published_start: Option<NaiveDate>,

    /// Published on or before this date (YYYY-MM-DD).
    #[arg(long)]
    pub published_end: Option<NaiveDate>,

    /// Sort by creation time (asc, desc).
    #[arg(long)]
    pub sort_created: Option<SortDirection>,

    /// Sort by modification time (asc, desc).
    #[arg(long)]
    pub sort_updated: Option<SortDirection>,

    /// Sort by title (asc, desc).
    #[arg(long)]
    pub sort_title: Option<SortDirection>,

    /// Sort by publication time (asc, desc).
    #[arg(long)]
    pub sort_published: Option<SortDirection>,

    /// Only archived articles.
    #[arg(long)]
    pub archived: bool,

    /// Only articles with work in progress.
    #[arg(long)]
    pub wip: bool,

    /// Only articles accessible by API clients.
    #[arg(long)]
    pub client_access: bool,

    /// Include a content preview (first paragraph and image).
    #[arg(long)]
    pub preview: bool,

    /// Title contains.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Content contains.
    #[arg(long, default_value = "")]
    pub content: String,

    /// Comma separated tag names.
    #[arg(long, default_value = "")]
    pub tags: String,

    /// Tag ID (repeatable).
    #[arg(long = "tag-id")]
    pub tag_ids: Vec<String>,

    /// Author user ID (repeatable).
    #[arg(long = "author")]
    pub authors: Vec<String>,

    /// Commit message contains.
    #[arg(long, default_value = "")]
    pub commits: String,
}

impl SearchArgs {
    /// Build the article filter from the command line options.
    pub fn to_filter(&self) -> ArticleFilter {
        let mut base = BaseSearch::default()
            .offset(self.offset)
            .limit(self.limit)
            .created_between(self.created_start, self.created_end)
            .updated_between(self.updated_start, self.updated_end);
        if let Some(direction) = self.sort_created {
            base = base.sort_created(direction);
        }
        if let Some(direction) = self.sort_updated {
            base = base.sort_updated(direction);
        }

        let mut filter = ArticleFilter::default()
            .base(base)
            .archived(self.archived)
            .wip(self.wip)
            .client_access(self.client_access)
            .title(self.title.as_str())
            .content(self.content.as_str())
            .tags(self.tags.as_str())
            .tag_ids(&self.tag_ids)
            .authors(&self.authors)
            .commits(self.commits.as_str())
            .published_between(self.published_start, self.published_end);
        if self.preview {
            filter = filter.preview(true, true);
        }
        if let Some(direction) = self.sort_title {
            filter = filter.sort_title(direction);
        }
        if let Some(direction) = self.sort_published {
            filter = filter.sort_published(direction);
        }
        filter
    }
}

/// Run the search command.
pub async fn run(client: EmviClient, args: SearchArgs, format: OutputFormat) -> EmviResult<()> {
    let filter = args.to_filter();
    let query = args.query.as_deref().unwrap_or_default();
    let result = client.find_articles(query, Some(&filter)).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default());
        }
        OutputFormat::Text => {
            if result.articles.is_empty() {
                println!("No articles found.");
                return Ok(());
            }

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_content_arrangement(ContentArrangement::Dynamic);

            table.set_header(vec!["ID", "Title", "Views", "Published", "Tags"]);

            for article in &result.articles {
                let mut title = super::truncate(article.title().unwrap_or("(untitled)"), 40);
                if article.pinned {
                    title.push_str(" [P]");
                }
                if article.is_archived() {
                    title.push_str(" [A]");
                }

                table.add_row(vec![
                    article.base.id.clone(),
                    title,
                    article.views.to_string(),
                    super::format_date(article.published),
                    super::truncate(&tag_names(article), 30),
                ]);
            }

            println!("{table}");
            println!(
                "{}",
                style(format!(
                    "Showing {} of {} articles",
                    result.articles.len(),
                    result.count
                ))
                .dim()
            );
        }
    }

    Ok(())
}

/// Comma separated tag names of an article.
pub fn tag_names(article: &Article) -> String {
    let names: Vec<&str> = article.tags.iter().map(|t| t.name.as_str()).collect();
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use emvi_api::Filter;
    use emvi_models::Tag;

    #[test]
    fn test_tag_names() {
        let mut article = Article::default();
        assert_eq!(tag_names(&article), "");

        for name in ["release", "api"] {
            article.tags.push(Tag {
                name: name.into(),
                ..Default::default()
            });
        }
        assert_eq!(tag_names(&article), "release, api");
    }

    #[test]
    fn test_default_args_give_empty_filter() {
        let filter = SearchArgs::default().to_filter();
        assert_eq!(filter, ArticleFilter::default());
        assert!(filter.params().is_empty());
    }

    #[test]
    fn test_args_map_to_filter() {
        let args = SearchArgs {
            query: Some("release".into()),
            limit: 20,
            offset: 40,
            created_start: NaiveDate::from_ymd_opt(2019, 3, 7),
            sort_created: Some(SortDirection::Descending),
            sort_title: Some(SortDirection::Ascending),
            wip: true,
            preview: true,
            tag_ids: vec!["t1".into(), "t2".into()],
            authors: vec!["u1".into()],
            ..Default::default()
        };
        let filter = args.to_filter();

        assert_eq!(filter.base.limit, 20);
        assert_eq!(filter.base.offset, 40);
        assert_eq!(filter.base.created_start, NaiveDate::from_ymd_opt(2019, 3, 7));
        assert_eq!(filter.base.sort_created, Some(SortDirection::Descending));
        assert_eq!(filter.sort_title, Some(SortDirection::Ascending));
        assert!(filter.wip && filter.preview && filter.preview_paragraph && filter.preview_image);
        assert!(!filter.archived);
        assert_eq!(filter.tag_ids, vec!["t1", "t2"]);
        assert_eq!(filter.author_user_ids, vec!["u1"]);
    }
}
