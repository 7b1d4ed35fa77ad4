//! `prodcat-cli`
//!
//! **Responsibility:** terminal front end for the product categories view.
//!
//! This crate provides:
//! - environment-driven configuration
//! - loading of the three static collections (embedded or from a directory)
//! - a line-oriented command session that drives a [`prodcat_filter::CatalogView`]
//! - plain-text rendering of the filter panel and product table

pub mod command;
pub mod config;
pub mod data;
pub mod render;
pub mod session;

pub use command::{Command, CommandError};
pub use config::CliConfig;
pub use data::{DataError, Dataset};
pub use session::Session;
