//! Query operations for the catalog

use serde::Serialize;
use tracing::debug;

use crate::search::{filter_with_auto_correct, get_search_suggestions, Corpus};
use crate::types::{CatalogItem, ItemKind, SearchField};

use super::Catalog;

/// Items matching a search and the correction applied to the query
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub items: Vec<CatalogItem>,
    pub suggested_term: Option<String>,
}

impl SearchOutcome {
    pub fn total(&self) -> usize {
        self.items.len()
    }
}

/// One page of a listing
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub items: Vec<CatalogItem>,
    /// Items matching the filter before pagination
    pub total: usize,
}

/// Distinct non-blank terms of `field` across `items`.
///
/// Tags contribute one term each so suggestions name single tags.
fn field_corpus(items: &[CatalogItem], field: SearchField) -> Corpus {
    let terms: Vec<String> = match field {
        SearchField::Tags => items.iter().flat_map(|item| item.tags.clone()).collect(),
        _ => items
            .iter()
            .map(|item| field.extract(item).into_owned())
            .collect(),
    };
    terms
        .into_iter()
        .filter(|term| !term.trim().is_empty())
        .collect()
}

/// Search items by one field, auto-correcting close misspellings
pub fn search(
    catalog: &Catalog,
    query: &str,
    field: SearchField,
    kind: Option<ItemKind>,
    threshold: f64,
) -> SearchOutcome {
    let items = catalog.items.read();
    // An item with an empty field value would offer "" as the correction for every query
    let blank_query = query.trim().is_empty();
    let pool: Vec<&CatalogItem> = items
        .iter()
        .filter(|item| kind.map_or(true, |k| item.kind == k))
        .filter(|item| blank_query || !field.extract(item).trim().is_empty())
        .collect();

    let result = filter_with_auto_correct(
        &pool,
        query,
        |item| field.extract(item).into_owned(),
        threshold,
    )
    .map(|item| (*item).clone());

    debug!(
        query,
        field = ?field,
        matched = result.filtered.len(),
        suggested = ?result.suggested_term,
        "catalog search"
    );

    SearchOutcome {
        items: result.filtered,
        suggested_term: result.suggested_term,
    }
}

/// Ranked suggestions drawn from the values of one field
pub fn suggest(
    catalog: &Catalog,
    query: &str,
    field: SearchField,
    max_suggestions: usize,
) -> Vec<String> {
    let items = catalog.items.read();
    let corpus = field_corpus(&items, field);
    get_search_suggestions(query, corpus.terms(), max_suggestions)
}

/// List items with an optional kind filter and pagination
pub fn list_items(catalog: &Catalog, kind: Option<ItemKind>, limit: usize, offset: usize) -> Page {
    let items = catalog.items.read();
    let matching: Vec<&CatalogItem> = items
        .iter()
        .filter(|item| kind.map_or(true, |k| item.kind == k))
        .collect();

    Page {
        total: matching.len(),
        items: matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect(),
    }
}

/// Look up a single item by slug
pub fn get_item(catalog: &Catalog, slug: &str) -> Option<CatalogItem> {
    catalog
        .items
        .read()
        .iter()
        .find(|item| item.slug == slug)
        .cloned()
}
