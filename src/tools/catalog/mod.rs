//! Catalog tools
//!
//! This module contains 2 tools for browsing and extending the catalog.

mod add_items;
mod list_items;

pub use add_items::AddItemsTool;
pub use list_items::ListItemsTool;
