//! Article and article content entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::base::BaseEntity;
use super::tag::Tag;
use super::user::User;
use crate::de::null_as_default;

/// An article in the organization knowledge base.
///
/// The article itself only carries metadata; the text lives in
/// `ArticleContent`, one per language and version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    #[serde(flatten)]
    pub base: BaseEntity,
    pub organization_id: String,
    pub views: u64,
    /// Number of work-in-progress versions.
    pub wip: i64,
    /// Archive reason; empty when the article is not archived.
    pub archived: String,
    pub published: DateTime<Utc>,
    pub pinned: bool,
    pub latest_article_content: Option<Box<ArticleContent>>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    pub preview_image: String,
}

impl Article {
    /// Title of the latest content, if it was sent along.
    pub fn title(&self) -> Option<&str> {
        self.latest_article_content
            .as_deref()
            .map(|content| content.title.as_str())
    }

    /// Whether the article has been archived.
    pub fn is_archived(&self) -> bool {
        !self.archived.is_empty()
    }
}

/// One version of an article in one language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleContent {
    #[serde(flatten)]
    pub base: BaseEntity,
    pub title: String,
    pub content: String,
    pub version: i64,
    pub commit: String,
    pub wip: bool,
    pub article_id: String,
    pub language_id: String,
    /// User who created this commit.
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub authors: Vec<User>,
}
