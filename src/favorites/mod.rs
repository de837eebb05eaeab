//! Favorites - the per-profile set of favorited entry ids, persisted to a durable
//! string store and kept in step across open contexts.
//!
//! Every local mutation is written to storage and then broadcast to subscribed
//! listeners. Writes made by other contexts arrive through the storage area's
//! change notifications; `process_storage_events` replaces the local set with the
//! observed value wholesale (last writer wins) and broadcasts `Sync`.
//!
//! ## Example
//!
//! ```
//! use saas_catalog::{FavoritesConfig, FavoritesStore, SharedStorage};
//!
//! let profile = SharedStorage::new();
//! let config = FavoritesConfig::default();
//!
//! let mut tab_a = FavoritesStore::open(profile.open_context(), &config);
//! let mut tab_b = FavoritesStore::open(profile.open_context(), &config);
//!
//! assert!(tab_a.toggle(5));
//! assert_eq!(tab_b.process_storage_events(), 1);
//! assert!(tab_b.contains(5));
//! ```

mod emitter;
mod store;
mod transfer;
mod view;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::storage::StorageError;

/// What caused a favorites notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteAction {
    Add,
    Remove,
    Clear,
    /// Another context changed the persisted set.
    Sync,
    /// A bulk import added one or more ids.
    Import,
}

/// Payload delivered to favorites listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesChange {
    pub action: FavoriteAction,
    /// The affected id for `Add` and `Remove`.
    pub id: Option<u64>,
    /// The full set after the change, ascending.
    pub favorites: Vec<u64>,
}

/// Error type for favorites persistence and import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesError {
    Storage(StorageError),
    Serde(String),
    /// The import document does not have the expected shape. Nothing was changed.
    InvalidPayload(String),
}

impl fmt::Display for FavoritesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FavoritesError::Storage(err) => write!(f, "favorites storage error: {}", err),
            FavoritesError::Serde(msg) => write!(f, "favorites serialization error: {}", msg),
            FavoritesError::InvalidPayload(msg) => {
                write!(f, "invalid favorites payload: {}", msg)
            }
        }
    }
}

impl std::error::Error for FavoritesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FavoritesError::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for FavoritesError {
    fn from(err: StorageError) -> Self {
        FavoritesError::Storage(err)
    }
}

pub use emitter::SubscriptionId;
pub use store::FavoritesStore;
pub use transfer::{export_file_name, ExportedFavorite, FavoritesExport};
pub use view::{favorite_entries, favorites_stats, sort_favorites, FavoritesSort, FavoritesStats};
