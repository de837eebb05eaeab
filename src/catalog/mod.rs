//! Catalog - the in-memory collection of marketplace listings.
//!
//! Entries are created from a seed or a cached snapshot, replaced only as whole
//! values through `update`, and soft-deleted through `deactivate` so that ids held
//! by favorites or "recently viewed" lists keep resolving.

mod category;
mod collate;
mod entry;
mod seed;
mod snapshot;

use std::collections::HashSet;

pub use category::{CategoryLabel, CategoryLabels};
pub use collate::compare_names;
pub use entry::{CatalogEntry, PriceTier};
pub use seed::seed_entries;
pub use snapshot::{load_catalog, store_catalog, CatalogSnapshot, SnapshotError};

/// Owned collection of catalog entries, unique by id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog. Later entries reusing an id are dropped.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut seen = HashSet::with_capacity(entries.len());
        let mut unique = Vec::with_capacity(entries.len());

        for entry in entries {
            if seen.insert(entry.id) {
                unique.push(entry);
            } else {
                log::warn!("dropping duplicate catalog entry id {}", entry.id);
            }
        }

        Self { entries: unique }
    }

    pub fn get(&self, id: u64) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub(crate) fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries
    }

    pub fn active_entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|entry| entry.is_active)
    }

    /// Replace the entry with the same id. Returns false if the id is unknown.
    pub fn update(&mut self, entry: CatalogEntry) -> bool {
        match self.entries.iter_mut().find(|existing| existing.id == entry.id) {
            Some(existing) => {
                *existing = entry;
                true
            }
            None => false,
        }
    }

    /// Soft-delete an entry. Returns false if the id is unknown or already inactive.
    pub fn deactivate(&mut self, id: u64) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) if entry.is_active => {
                entry.is_active = false;
                true
            }
            _ => false,
        }
    }

    pub fn featured(&self) -> Vec<&CatalogEntry> {
        self.active_entries().filter(|entry| entry.featured).collect()
    }

    /// Active entries sharing the category of `id`, excluding `id` itself.
    pub fn related(&self, id: u64, limit: usize) -> Vec<&CatalogEntry> {
        let Some(current) = self.get(id) else {
            return Vec::new();
        };

        self.active_entries()
            .filter(|entry| entry.category == current.category && entry.id != id)
            .take(limit)
            .collect()
    }

    /// Count a detail-page view. Returns the new view count.
    pub fn record_view(&mut self, id: u64) -> Option<u64> {
        let entry = self.entries.iter_mut().find(|entry| entry.id == id)?;
        entry.views = entry.views.saturating_add(1);
        Some(entry.views)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<CatalogEntry>> for Catalog {
    fn from(entries: Vec<CatalogEntry>) -> Self {
        Self::new(entries)
    }
}
