//! Catalog domain module.
//!
//! This crate holds the three static source collections (users, categories,
//! products) and the enrichment join that turns them into denormalized
//! product view records. Pure deterministic logic: no IO, no rendering.

pub mod catalog;
pub mod category;
pub mod enrich;
pub mod product;
pub mod user;

pub use catalog::Catalog;
pub use category::Category;
pub use enrich::{enrich, EnrichedProduct};
pub use product::Product;
pub use user::{Sex, User};
