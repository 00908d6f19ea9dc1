//! Organization entity model.

use serde::{Deserialize, Serialize};

use super::base::BaseEntity;

/// The organization the client is registered in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    #[serde(flatten)]
    pub base: BaseEntity,
    pub name: String,
    /// Subdomain form of the name.
    pub name_normalized: String,
    pub picture: String,
    pub expert: bool,
    pub create_group_admin: bool,
    pub create_group_mod: bool,
    pub member_count: i64,
    pub article_count: i64,
}
