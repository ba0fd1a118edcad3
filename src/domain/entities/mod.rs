//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored alias to URL mapping
//! - [`Allocation`] - The alias and id handed back after a successful create

pub mod url_record;

pub use url_record::{Allocation, UrlRecord};
