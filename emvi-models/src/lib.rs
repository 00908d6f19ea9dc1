//! Emvi Models - Entity records decoded from API responses.
//!
//! Every entity shares the `BaseEntity` identity and timestamps and is a
//! passive record: fields mirror the JSON the API sends, missing fields
//! decode to their zero values.

pub mod de;
pub mod models;

// Re-export key types
pub use models::article::{Article, ArticleContent};
pub use models::base::BaseEntity;
pub use models::language::Language;
pub use models::organization::Organization;
pub use models::tag::Tag;
pub use models::user::{OrganizationMember, User};
