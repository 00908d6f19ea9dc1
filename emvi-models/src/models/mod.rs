//! Entity model definitions.

pub mod article;
pub mod base;
pub mod language;
pub mod organization;
pub mod tag;
pub mod user;
