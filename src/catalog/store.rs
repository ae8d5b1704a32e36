use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tracing::{debug, warn};

use super::category::CategoryTag;
use super::descriptor::{CatalogEntry, EntryDescriptor};
use super::unit::Implementation;
use crate::error::{CatalogError, Result};
use crate::metrics::CatalogMetrics;

/// The single in-process store of active units, keyed by id.
///
/// Iteration order is insertion order; replacing an id keeps its slot.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry under `descriptor.id`, stamped with the current time.
    pub fn register(
        &mut self,
        implementation: Implementation,
        descriptor: EntryDescriptor,
    ) -> Result<()> {
        self.register_at(implementation, descriptor, Utc::now())
    }

    /// Insert or replace with an explicit registration time.
    pub fn register_at(
        &mut self,
        implementation: Implementation,
        descriptor: EntryDescriptor,
        now: DateTime<Utc>,
    ) -> Result<()> {
        if descriptor.id.trim().is_empty() {
            return Err(CatalogError::EmptyId);
        }

        let previous = self.entries.get(&descriptor.id).map(|e| e.created_at);
        let entry = descriptor.into_entry(implementation, now, previous);
        let id = entry.id.clone();

        if previous.is_some() {
            debug!("Replacing unit '{}' ({})", id, entry.name);
            CatalogMetrics::record_replacement();
        } else {
            debug!("Registering unit '{}' ({}) under {}", id, entry.name, entry.category);
        }
        self.entries.insert(id, entry);

        CatalogMetrics::record_registration(self.len());
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    /// All entries in insertion order.
    pub fn get_all(&self) -> Vec<&CatalogEntry> {
        self.iter().collect()
    }

    pub fn get_by_category(&self, category: CategoryTag) -> Vec<&CatalogEntry> {
        self.iter().filter(|e| e.category == category).collect()
    }

    /// Entries whose name, description or any tag contains `query`, ignoring case.
    ///
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let needle = query.to_lowercase();
        self.iter().filter(|e| e.matches(&needle)).collect()
    }

    /// Drop the entry under `id`; absent ids are ignored.
    pub fn remove(&mut self, id: &str) -> Option<CatalogEntry> {
        let removed = self.entries.shift_remove(id)?;
        debug!("Removed unit '{}'", id);
        CatalogMetrics::record_size(self.len());
        Some(removed)
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            warn!("Clearing {} units from the catalog", self.entries.len());
        }
        self.entries.clear();
        CatalogMetrics::record_size(0);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }
}
