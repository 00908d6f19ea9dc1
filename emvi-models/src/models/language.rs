//! Language entity model.

use serde::{Deserialize, Serialize};

use super::base::BaseEntity;

/// A content language configured for the organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    #[serde(flatten)]
    pub base: BaseEntity,
    pub organization_id: String,
    pub name: String,
    /// ISO 639-1 code, e.g. "en".
    pub code: String,
    /// Whether this is the organization's default language.
    pub default: bool,
}
