use std::collections::BTreeSet;

use chrono::Utc;

use super::emitter::{ChangeEmitter, SubscriptionId};
use super::transfer::{parse_import, FavoritesExport};
use super::{FavoriteAction, FavoritesChange, FavoritesError};
use crate::catalog::Catalog;
use crate::config::FavoritesConfig;
use crate::storage::{StorageArea, StorageChange};

/// The favorites set of one context, backed by a storage area.
///
/// The in-memory set is the source of truth for this context. Persistence is
/// best effort: a failed write is logged and the mutation still stands.
pub struct FavoritesStore<S: StorageArea> {
    storage: S,
    key: String,
    favorites: BTreeSet<u64>,
    emitter: ChangeEmitter,
}

impl<S: StorageArea> FavoritesStore<S> {
    /// Open the store, loading whatever set is persisted under the configured key.
    pub fn open(storage: S, config: &FavoritesConfig) -> Self {
        let key = config.storage_key.clone();
        let favorites = match storage.get(&key) {
            Ok(Some(value)) => decode_set(&value).unwrap_or_else(|err| {
                log::warn!("ignoring persisted favorites under {}: {}", key, err);
                BTreeSet::new()
            }),
            Ok(None) => BTreeSet::new(),
            Err(err) => {
                log::error!("failed to load favorites from {}: {}", key, err);
                BTreeSet::new()
            }
        };

        log::info!("favorites store opened with {} favorites", favorites.len());

        Self {
            storage,
            key,
            favorites,
            emitter: ChangeEmitter::new(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns whether `id` was newly added. Ids are positive; 0 is ignored.
    pub fn add(&mut self, id: u64) -> bool {
        if id == 0 || !self.favorites.insert(id) {
            return false;
        }
        self.persist_logged();
        self.notify(FavoriteAction::Add, Some(id));
        true
    }

    /// Returns whether `id` was present.
    pub fn remove(&mut self, id: u64) -> bool {
        if !self.favorites.remove(&id) {
            return false;
        }
        self.persist_logged();
        self.notify(FavoriteAction::Remove, Some(id));
        true
    }

    /// Flip membership of `id`. Returns the resulting membership.
    pub fn toggle(&mut self, id: u64) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.add(id)
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.favorites.contains(&id)
    }

    /// Favorited ids, ascending.
    pub fn list(&self) -> Vec<u64> {
        self.favorites.iter().copied().collect()
    }

    pub fn count(&self) -> usize {
        self.favorites.len()
    }

    /// Empty the set. Returns how many favorites were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.favorites.len();
        self.favorites.clear();
        self.persist_logged();
        self.notify(FavoriteAction::Clear, None);
        count
    }

    /// Write the whole set under the store's key.
    pub fn persist(&self) -> Result<(), FavoritesError> {
        let value = serde_json::to_string(&self.list())
            .map_err(|e| FavoritesError::Serde(e.to_string()))?;
        self.storage.set(&self.key, &value)?;
        Ok(())
    }

    /// Register a listener for every change to the set.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(FavoritesChange) + Send + Sync + 'static,
    {
        self.emitter.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: &SubscriptionId) -> bool {
        self.emitter.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.emitter.len()
    }

    /// Apply the writes other contexts made to the favorites key.
    ///
    /// Each applied write replaces the local set and broadcasts `Sync`. Returns the
    /// number of writes applied; unreadable values are logged and skipped.
    pub fn process_storage_events(&mut self) -> usize {
        let changes = match self.storage.poll_changes() {
            Ok(changes) => changes,
            Err(err) => {
                log::error!("failed to poll storage changes: {}", err);
                return 0;
            }
        };

        let key = self.key.clone();
        let mut applied = 0;
        for change in changes.iter().filter(|change| change.key == key) {
            if self.apply_remote(change) {
                applied += 1;
            }
        }
        applied
    }

    /// Add every id listed in an import document. Returns how many were new.
    ///
    /// The document is validated before anything changes; a rejected document
    /// leaves the set untouched.
    pub fn import_set(&mut self, payload: &str) -> Result<usize, FavoritesError> {
        let ids = match parse_import(payload) {
            Ok(ids) => ids,
            Err(err) => {
                log::warn!("rejected favorites import: {}", err);
                return Err(err);
            }
        };

        let added = ids
            .into_iter()
            .filter(|id| self.favorites.insert(*id))
            .count();

        if added > 0 {
            self.persist_logged();
            self.notify(FavoriteAction::Import, None);
        }

        Ok(added)
    }

    /// Build a timestamped backup document of the current favorites.
    pub fn export_set(&self, catalog: &Catalog) -> FavoritesExport {
        FavoritesExport::build(self.favorites.iter().copied(), catalog, Utc::now())
    }

    fn apply_remote(&mut self, change: &StorageChange) -> bool {
        let favorites = match change.new_value.as_deref() {
            None => BTreeSet::new(),
            Some(value) => match decode_set(value) {
                Ok(favorites) => favorites,
                Err(err) => {
                    log::warn!("ignoring favorites written by {:?}: {}", change.origin, err);
                    return false;
                }
            },
        };

        log::debug!(
            "favorites synced from {:?}: {} -> {}",
            change.origin,
            self.favorites.len(),
            favorites.len()
        );
        self.favorites = favorites;
        self.notify(FavoriteAction::Sync, None);
        true
    }

    fn persist_logged(&self) {
        if let Err(err) = self.persist() {
            log::error!("failed to persist favorites under {}: {}", self.key, err);
        }
    }

    fn notify(&mut self, action: FavoriteAction, id: Option<u64>) {
        let change = FavoritesChange {
            action,
            id,
            favorites: self.list(),
        };
        self.emitter.broadcast(change);
    }
}

fn decode_set(value: &str) -> Result<BTreeSet<u64>, FavoritesError> {
    let ids: Vec<u64> =
        serde_json::from_str(value).map_err(|e| FavoritesError::Serde(e.to_string()))?;
    Ok(ids.into_iter().filter(|id| *id > 0).collect())
}
