//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use saas_catalog::{
    CatalogEntry, FavoriteAction, FavoritesChange, FavoritesStore, PriceTier, StorageArea,
    StorageChange, StorageError, SubscriptionId,
};

pub fn date(year: i32, month: u32, day: u32) -> chrono::DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// The two-entry catalog used by the worked scenarios.
pub fn notion_and_figma() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(1, "Notion", "productivity", date(2024, 1, 15))
            .with_description("All-in-one workspace")
            .with_rating(4.8, 1250),
        CatalogEntry::new(2, "Figma", "design", date(2024, 1, 20))
            .with_description("Collaborative interface design")
            .with_rating(4.9, 2100),
    ]
}

/// `count` generated entries with ids `1..=count`.
pub fn generated(count: u64) -> Vec<CatalogEntry> {
    (1..=count)
        .map(|id| {
            CatalogEntry::new(id, format!("Tool {:03}", id), "productivity", date(2024, 1, 1))
                .with_price(if id % 2 == 0 {
                    PriceTier::Premium
                } else {
                    PriceTier::Free
                })
                .with_rating(3.0 + (id % 3) as f64 * 0.5, id * 10)
        })
        .collect()
}

/// Collects every notification a store broadcasts.
#[derive(Clone, Default)]
pub struct Recorder {
    changes: Arc<Mutex<Vec<FavoritesChange>>>,
}

impl Recorder {
    pub fn attach<S: StorageArea>(store: &mut FavoritesStore<S>) -> Self {
        Self::subscribe(store).0
    }

    pub fn subscribe<S: StorageArea>(store: &mut FavoritesStore<S>) -> (Self, SubscriptionId) {
        let recorder = Recorder::default();
        let sink = Arc::clone(&recorder.changes);
        let id = store.subscribe(move |change| sink.lock().unwrap().push(change));
        (recorder, id)
    }

    pub fn changes(&self) -> Vec<FavoritesChange> {
        self.changes.lock().unwrap().clone()
    }

    pub fn actions(&self) -> Vec<FavoriteAction> {
        self.changes().into_iter().map(|change| change.action).collect()
    }
}

/// Storage wrapper that counts successful writes.
pub struct CountingStorage<S> {
    inner: S,
    writes: AtomicUsize,
}

impl<S: StorageArea> CountingStorage<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            writes: AtomicUsize::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl<S: StorageArea> StorageArea for CountingStorage<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value)?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn poll_changes(&self) -> Result<Vec<StorageChange>, StorageError> {
        self.inner.poll_changes()
    }
}
