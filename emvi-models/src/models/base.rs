//! Identity and timestamps shared by every entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity and creation/modification timestamps of an entity.
///
/// Flattened into every entity record, so `id`, `def_time` and `mod_time`
/// sit at the top level of the JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseEntity {
    pub id: String,
    pub def_time: DateTime<Utc>,
    pub mod_time: DateTime<Utc>,
}

impl BaseEntity {
    /// Whether the entity carries a server-assigned id.
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }
}
