//! External data sources
//!
//! This module loads the game catalog the page is built from.

pub mod catalog;

pub use catalog::{builtin_catalog, categories, load_catalog};
