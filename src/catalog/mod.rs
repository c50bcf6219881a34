//! Catalog - In-memory collection of searchable garden items
//!
//! Items are loaded once from a JSON Lines file and kept in memory behind a
//! read-write lock. The file is never written back.

mod query;

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::error::CatalogError;
use crate::types::{CatalogItem, ItemKind, SearchField};

pub use query::{Page, SearchOutcome};

/// Thread-safe catalog of posts, products and plants
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) items: RwLock<Vec<CatalogItem>>,
}

impl Catalog {
    /// Create an empty catalog not backed by any file
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON Lines file.
    ///
    /// A missing file yields an empty catalog. Lines that do not parse, items
    /// without slug or title, and repeated slugs are skipped with a warning.
    pub fn with_file_path(file_path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let file_path = file_path.into();
        let items = Self::load_items_from_file(&file_path)?;
        info!(path = %file_path.display(), items = items.len(), "catalog loaded");

        Ok(Self {
            items: RwLock::new(items),
        })
    }

    /// Build a catalog from items already in memory
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        let catalog = Self::new();
        catalog.add_items(items);
        catalog
    }

    fn load_items_from_file(file_path: &Path) -> Result<Vec<CatalogItem>, CatalogError> {
        let content = match fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %file_path.display(), "catalog file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(CatalogError::Io {
                    path: file_path.to_path_buf(),
                    source,
                })
            }
        };

        let mut items = Vec::new();
        let mut slugs = HashSet::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_str::<CatalogItem>(line) {
                Ok(item) if !item.is_valid() => {
                    warn!(line = line_no + 1, "skipping catalog item without slug or title");
                }
                Ok(item) => {
                    if slugs.insert(item.slug.clone()) {
                        items.push(item);
                    } else {
                        warn!(line = line_no + 1, slug = %item.slug, "skipping duplicate slug");
                    }
                }
                Err(e) => {
                    warn!(line = line_no + 1, error = %e, "skipping malformed catalog line");
                }
            }
        }

        Ok(items)
    }

    /// Append items whose slug is not yet present; returns the ones added
    pub fn add_items(&self, items: Vec<CatalogItem>) -> Vec<CatalogItem> {
        let mut current = self.items.write();
        let mut slugs: HashSet<String> = current.iter().map(|i| i.slug.clone()).collect();

        let mut added = Vec::new();
        for item in items {
            if !item.is_valid() {
                debug!(slug = %item.slug, "ignoring invalid item");
                continue;
            }
            if slugs.insert(item.slug.clone()) {
                current.push(item.clone());
                added.push(item);
            }
        }

        debug!(added = added.len(), total = current.len(), "items added");
        added
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

// Query operations live in query.rs
impl Catalog {
    pub fn search(
        &self,
        query: &str,
        field: SearchField,
        kind: Option<ItemKind>,
        threshold: f64,
    ) -> SearchOutcome {
        query::search(self, query, field, kind, threshold)
    }

    pub fn suggest(
        &self,
        query: &str,
        field: SearchField,
        max_suggestions: usize,
    ) -> Vec<String> {
        query::suggest(self, query, field, max_suggestions)
    }

    pub fn list_items(&self, kind: Option<ItemKind>, limit: usize, offset: usize) -> Page {
        query::list_items(self, kind, limit, offset)
    }

    pub fn get_item(&self, slug: &str) -> Option<CatalogItem> {
        query::get_item(self, slug)
    }
}
