//! Catalog item types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of content an item represents on the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Post,
    Product,
    Plant,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Post => "post",
            ItemKind::Product => "product",
            ItemKind::Plant => "plant",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "post" | "posts" => Ok(ItemKind::Post),
            "product" | "products" => Ok(ItemKind::Product),
            "plant" | "plants" => Ok(ItemKind::Plant),
            other => Err(format!("unknown item kind: {}", other)),
        }
    }
}

/// A searchable post, product or plant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique URL slug
    pub slug: String,
    pub kind: ItemKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl CatalogItem {
    /// Create an item with only the required fields
    pub fn new(slug: impl Into<String>, kind: ItemKind, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            kind,
            title: title.into(),
            category: None,
            tags: Vec::new(),
            summary: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Items without a slug or title cannot be searched or linked
    pub fn is_valid(&self) -> bool {
        !self.slug.trim().is_empty() && !self.title.trim().is_empty()
    }
}
