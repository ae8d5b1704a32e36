//! Boundary between the catalog and persisted "saved unit" records.
//!
//! The relational layer stores promoted units by display name. Working out
//! which catalog entries still lack a record is a plain set difference on
//! names.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog::{Catalog, CatalogEntry, CategoryTag};

/// Editable record created when an author promotes a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedUnit {
    pub name: String,
    pub description: String,
    pub category: CategoryTag,
    pub template: String,
    pub tag_names: Vec<String>,
}

impl SavedUnit {
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            name: entry.name.clone(),
            description: entry.description.clone(),
            category: entry.category,
            template: entry.template.clone(),
            tag_names: entry.tags.clone(),
        }
    }
}

/// Catalog entries whose display name has no persisted record yet, in catalog order.
pub fn unpromoted<'a, I, S>(catalog: &'a Catalog, persisted_names: I) -> Vec<&'a CatalogEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let persisted: HashSet<String> = persisted_names
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect();

    catalog
        .iter()
        .filter(|entry| !persisted.contains(&entry.name))
        .collect()
}
