//! User and organization member entity models.

use serde::{Deserialize, Serialize};

use super::base::BaseEntity;

/// A user account.
///
/// When returned in the context of an organization, the membership record
/// is sent along in `organization_member`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(flatten)]
    pub base: BaseEntity,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub language: String,
    pub info: String,
    pub picture: String,
    pub organization_member: Option<Box<OrganizationMember>>,
}

impl User {
    /// First and last name separated by a space, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }

    /// Username within the organization, if membership data is present.
    pub fn username(&self) -> Option<&str> {
        self.organization_member
            .as_deref()
            .map(|member| member.username.as_str())
            .filter(|name| !name.is_empty())
    }
}

/// Membership of a user in an organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationMember {
    #[serde(flatten)]
    pub base: BaseEntity,
    pub organization_id: String,
    pub user_id: String,
    pub language_id: String,
    pub username: String,
    pub phone: String,
    pub mobile: String,
    pub info: String,
    pub user: Option<Box<User>>,
}
