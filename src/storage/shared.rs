//! In-memory shared storage - one storage area observed by many contexts.
//!
//! `SharedStorage` plays the role of a browser profile's local storage: every
//! `StorageContext` opened from it sees the same values, and every effective write
//! is appended to a shared change log. Each open context has a read position
//! into that log and only ever reports changes written by other contexts. Records
//! every open context has read are discarded.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::{ContextId, StorageArea, StorageChange, StorageError};

struct Area {
    values: HashMap<String, String>,
    /// Changes not yet read by every open context.
    log: Vec<StorageChange>,
    /// Absolute sequence number of `log[0]`.
    base: usize,
    /// Absolute read position of each open context.
    cursors: HashMap<ContextId, usize>,
    quota: Option<usize>,
    next_context: u64,
}

impl Area {
    fn used_bytes_without(&self, key: &str) -> usize {
        self.values
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }

    fn end(&self) -> usize {
        self.base + self.log.len()
    }

    fn record(&mut self, change: StorageChange) {
        let origin = change.origin;
        let end = self.end();
        self.log.push(change);

        // A context that had read everything never needs its own write back.
        if let Some(cursor) = self.cursors.get_mut(&origin) {
            if *cursor == end {
                *cursor = end + 1;
            }
        }
        self.compact();
    }

    /// Drop the prefix of the log that every open context has read.
    fn compact(&mut self) {
        let read_by_all = self.cursors.values().copied().min().unwrap_or(self.end());
        let drained = read_by_all.saturating_sub(self.base).min(self.log.len());
        if drained > 0 {
            self.log.drain(..drained);
            self.base += drained;
        }
    }
}

/// Shared in-memory storage area.
///
/// Clone-friendly via Arc; clones refer to the same area.
#[derive(Clone)]
pub struct SharedStorage {
    area: Arc<RwLock<Area>>,
}

impl Default for SharedStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedStorage {
    /// Create an empty area without a quota.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Create an empty area limited to `bytes` of keys plus values.
    pub fn with_quota(bytes: usize) -> Self {
        Self::build(Some(bytes))
    }

    fn build(quota: Option<usize>) -> Self {
        Self {
            area: Arc::new(RwLock::new(Area {
                values: HashMap::new(),
                log: Vec::new(),
                base: 0,
                cursors: HashMap::new(),
                quota,
                next_context: 1,
            })),
        }
    }

    /// Open a new writable context. It only observes changes made after it was opened.
    pub fn open_context(&self) -> StorageContext {
        self.open(false)
    }

    /// Open a context that can read but never write.
    pub fn open_read_only_context(&self) -> StorageContext {
        self.open(true)
    }

    fn open(&self, read_only: bool) -> StorageContext {
        // Context ids must stay unique, so a poisoned lock is recovered, not skipped.
        let mut area = self.area.write().unwrap_or_else(|poisoned| {
            log::warn!("shared storage lock was poisoned; recovering");
            poisoned.into_inner()
        });
        let id = ContextId(area.next_context);
        area.next_context += 1;
        let end = area.end();
        area.cursors.insert(id, end);

        StorageContext {
            area: Arc::clone(&self.area),
            id,
            read_only,
        }
    }

    /// Changes still pending for at least one open context, in write order.
    pub fn changes(&self) -> Vec<StorageChange> {
        self.area
            .read()
            .map(|area| area.log.clone())
            .unwrap_or_default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.area.read().map(|area| area.values.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One context (tab/window) attached to a `SharedStorage`.
///
/// Dropping the context releases its read position.
pub struct StorageContext {
    area: Arc<RwLock<Area>>,
    id: ContextId,
    read_only: bool,
}

impl StorageContext {
    pub fn id(&self) -> ContextId {
        self.id
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

impl Drop for StorageContext {
    fn drop(&mut self) {
        let mut area = self.area.write().unwrap_or_else(PoisonError::into_inner);
        area.cursors.remove(&self.id);
        area.compact();
    }
}

impl StorageArea for StorageContext {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let area = self
            .area
            .read()
            .map_err(|_| StorageError::LockPoisoned("read"))?;
        Ok(area.values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::ReadOnly);
        }

        let mut area = self
            .area
            .write()
            .map_err(|_| StorageError::LockPoisoned("write"))?;

        let old_value = area.values.get(key).cloned();
        if old_value.as_deref() == Some(value) {
            return Ok(());
        }

        if let Some(quota) = area.quota {
            let required = area.used_bytes_without(key) + key.len() + value.len();
            if required > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    required,
                    quota,
                });
            }
        }

        area.values.insert(key.to_string(), value.to_string());
        area.record(StorageChange {
            key: key.to_string(),
            old_value,
            new_value: Some(value.to_string()),
            origin: self.id,
        });

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::ReadOnly);
        }

        let mut area = self
            .area
            .write()
            .map_err(|_| StorageError::LockPoisoned("remove"))?;

        if let Some(old_value) = area.values.remove(key) {
            area.record(StorageChange {
                key: key.to_string(),
                old_value: Some(old_value),
                new_value: None,
                origin: self.id,
            });
        }

        Ok(())
    }

    fn poll_changes(&self) -> Result<Vec<StorageChange>, StorageError> {
        let mut area = self
            .area
            .write()
            .map_err(|_| StorageError::LockPoisoned("poll"))?;

        let end = area.end();
        let position = area.cursors.get(&self.id).copied().unwrap_or(end);
        let start = position.saturating_sub(area.base).min(area.log.len());

        let changes = area.log[start..]
            .iter()
            .filter(|change| change.origin != self.id)
            .cloned()
            .collect();

        area.cursors.insert(self.id, end);
        area.compact();

        Ok(changes)
    }
}
