//! Searchable item fields

use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CatalogItem;

/// Which text of a [`CatalogItem`] a search runs against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    Title,
    Category,
    /// All tags joined by single spaces
    Tags,
}

impl SearchField {
    /// Extract the searchable text for this field
    pub fn extract<'a>(&self, item: &'a CatalogItem) -> Cow<'a, str> {
        match self {
            SearchField::Title => Cow::Borrowed(item.title.as_str()),
            SearchField::Category => Cow::Borrowed(item.category.as_deref().unwrap_or("")),
            SearchField::Tags => Cow::Owned(item.tags.join(" ")),
        }
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "title" | "name" => Ok(SearchField::Title),
            "category" => Ok(SearchField::Category),
            "tags" | "tag" => Ok(SearchField::Tags),
            other => Err(format!("unknown search field: {}", other)),
        }
    }
}
