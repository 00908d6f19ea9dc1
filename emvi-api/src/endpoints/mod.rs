//! API endpoint modules organized by category.
//!
//! Each module adds typed methods on `EmviClient` for one group of endpoints.

pub mod articles;
pub mod languages;
pub mod organization;
pub mod search;
