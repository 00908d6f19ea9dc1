//! Tag entity model.

use serde::{Deserialize, Serialize};

use super::base::BaseEntity;

/// A tag attached to articles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(flatten)]
    pub base: BaseEntity,
    pub organization_id: String,
    pub name: String,
    /// Number of articles using this tag.
    pub usages: i64,
}
