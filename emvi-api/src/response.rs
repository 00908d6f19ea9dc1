//! Response envelopes.
//!
//! Endpoints that return more than one entity wrap them in an envelope;
//! single-entity and list endpoints decode straight into the models.

use serde::{Deserialize, Serialize};

use emvi_models::de::null_as_default;
use emvi_models::{Article, ArticleContent, User};

/// Result page of an article search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleSearchResult {
    #[serde(deserialize_with = "null_as_default")]
    pub articles: Vec<Article>,
    /// Total number of matches, independent of offset and limit.
    pub count: u64,
}

/// An article with the requested content version and its authors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleDetail {
    pub article: Option<Article>,
    pub content: Option<ArticleContent>,
    #[serde(deserialize_with = "null_as_default")]
    pub authors: Vec<User>,
}
