//! Search filters and their query parameter encoding.
//!
//! A filter contributes an ordered list of key/value pairs to a request URL.
//! Unset values are left out: `None` dates and sort directions, `0` offsets
//! and limits, `false` flags, empty strings and empty id lists. Set flags are
//! sent as `true`, dates as `YYYY-MM-DD`, id lists joined by `,`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use emvi_core::constants::DATE_FORMAT;

/// Sort direction for a sortable result field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Wire value of the direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

/// Anything that can contribute query parameters to a request.
pub trait Filter {
    /// Non-empty key/value pairs, in the order they should be encoded.
    fn params(&self) -> Vec<(&'static str, String)>;
}

/// Criteria shared by every search: time ranges, sorting, pagination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseSearch {
    pub created_start: Option<NaiveDate>,
    pub created_end: Option<NaiveDate>,
    pub updated_start: Option<NaiveDate>,
    pub updated_end: Option<NaiveDate>,
    pub sort_created: Option<SortDirection>,
    pub sort_updated: Option<SortDirection>,
    pub offset: u32,
    pub limit: u32,
}

impl BaseSearch {
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn created_between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.created_start = start;
        self.created_end = end;
        self
    }

    pub fn updated_between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.updated_start = start;
        self.updated_end = end;
        self
    }

    pub fn sort_created(mut self, direction: SortDirection) -> Self {
        self.sort_created = Some(direction);
        self
    }

    pub fn sort_updated(mut self, direction: SortDirection) -> Self {
        self.sort_updated = Some(direction);
        self
    }
}

impl Filter for BaseSearch {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_date(&mut params, "created_start", self.created_start);
        push_date(&mut params, "created_end", self.created_end);
        push_date(&mut params, "updated_start", self.updated_start);
        push_date(&mut params, "updated_end", self.updated_end);
        push_sort(&mut params, "sort_created", self.sort_created);
        push_sort(&mut params, "sort_updated", self.sort_updated);
        push_count(&mut params, "offset", self.offset);
        push_count(&mut params, "limit", self.limit);
        params
    }
}

/// Article search criteria on top of [`BaseSearch`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleFilter {
    #[serde(flatten)]
    pub base: BaseSearch,

    pub archived: bool,
    pub wip: bool,
    pub client_access: bool,
    pub preview: bool,
    pub preview_paragraph: bool,
    pub preview_image: bool,
    /// Substring of the title.
    pub title: String,
    /// Substring of the content.
    pub content: String,
    /// Comma separated tag names.
    pub tags: String,
    pub tag_ids: Vec<String>,
    #[serde(rename = "authors")]
    pub author_user_ids: Vec<String>,
    pub commits: String,
    pub published_start: Option<NaiveDate>,
    pub published_end: Option<NaiveDate>,
    pub sort_title: Option<SortDirection>,
    pub sort_published: Option<SortDirection>,
}

impl ArticleFilter {
    /// Replace the shared search criteria.
    pub fn base(mut self, base: BaseSearch) -> Self {
        self.base = base;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.base.limit = limit;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.base.offset = offset;
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    pub fn wip(mut self, wip: bool) -> Self {
        self.wip = wip;
        self
    }

    pub fn client_access(mut self, client_access: bool) -> Self {
        self.client_access = client_access;
        self
    }

    /// Request previews; `paragraph` and `image` select what they contain.
    pub fn preview(mut self, paragraph: bool, image: bool) -> Self {
        self.preview = true;
        self.preview_paragraph = paragraph;
        self.preview_image = image;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn tag_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn authors<I, S>(mut self, user_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.author_user_ids = user_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn commits(mut self, commits: impl Into<String>) -> Self {
        self.commits = commits.into();
        self
    }

    pub fn published_between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.published_start = start;
        self.published_end = end;
        self
    }

    pub fn sort_title(mut self, direction: SortDirection) -> Self {
        self.sort_title = Some(direction);
        self
    }

    pub fn sort_published(mut self, direction: SortDirection) -> Self {
        self.sort_published = Some(direction);
        self
    }
}

impl Filter for ArticleFilter {
    fn params(&self) -> Vec<(&'static str, String)> {
        // shared criteria first
        let mut params = self.base.params();
        push_flag(&mut params, "archived", self.archived);
        push_flag(&mut params, "wip", self.wip);
        push_flag(&mut params, "client_access", self.client_access);
        push_flag(&mut params, "preview", self.preview);
        push_flag(&mut params, "preview_paragraph", self.preview_paragraph);
        push_flag(&mut params, "preview_image", self.preview_image);
        push_text(&mut params, "title", &self.title);
        push_text(&mut params, "content", &self.content);
        push_text(&mut params, "tags", &self.tags);
        push_text(&mut params, "tag_ids", &self.tag_ids.join(","));
        push_text(&mut params, "authors", &self.author_user_ids.join(","));
        push_text(&mut params, "commits", &self.commits);
        push_date(&mut params, "published_start", self.published_start);
        push_date(&mut params, "published_end", self.published_end);
        push_sort(&mut params, "sort_title", self.sort_title);
        push_sort(&mut params, "sort_published", self.sort_published);
        params
    }
}

fn push_text(params: &mut Vec<(&'static str, String)>, key: &'static str, value: &str) {
    if !value.is_empty() {
        params.push((key, value.to_string()));
    }
}

fn push_date(params: &mut Vec<(&'static str, String)>, key: &'static str, date: Option<NaiveDate>) {
    if let Some(date) = date {
        params.push((key, date.format(DATE_FORMAT).to_string()));
    }
}

fn push_sort(
    params: &mut Vec<(&'static str, String)>,
    key: &'static str,
    direction: Option<SortDirection>,
) {
    if let Some(direction) = direction {
        params.push((key, direction.as_str().to_string()));
    }
}

fn push_count(params: &mut Vec<(&'static str, String)>, key: &'static str, value: u32) {
    if value != 0 {
        params.push((key, value.to_string()));
    }
}

fn push_flag(params: &mut Vec<(&'static str, String)>, key: &'static str, value: bool) {
    if value {
        params.push((key, "true".to_string()));
    }
}
