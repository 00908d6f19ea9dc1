//! Emvi API - HTTP client for the Emvi client API.
//!
//! This crate provides a typed client for searching and reading articles,
//! the organization and its languages. It handles the client credentials
//! exchange, the custom `Organization`/`Client` headers, filter to query
//! parameter encoding, and a single re-authentication when the access
//! token is rejected.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod filter;
pub mod response;

// Re-export key types
pub use auth::{Credential, CredentialManager};
pub use client::{build_url, EmviClient};
pub use filter::{ArticleFilter, BaseSearch, Filter, SortDirection};
pub use response::{ArticleDetail, ArticleSearchResult};
