//! Durable key-value storage - the per-profile string store favorites and the
//! catalog cache are persisted to.
//!
//! A `StorageArea` is addressed by string keys and holds string values. Areas that
//! are shared between several open contexts (tabs, windows) also report the writes
//! made by *other* contexts through `poll_changes`, which is the only cross-context
//! transport the favorites store relies on.
//!
//! ## Example
//!
//! ```
//! use saas_catalog::{SharedStorage, StorageArea};
//!
//! let profile = SharedStorage::new();
//! let tab_a = profile.open_context();
//! let tab_b = profile.open_context();
//!
//! tab_a.set("theme", "dark").unwrap();
//!
//! assert_eq!(tab_b.get("theme").unwrap().as_deref(), Some("dark"));
//! let changes = tab_b.poll_changes().unwrap();
//! assert_eq!(changes.len(), 1);
//! assert!(tab_a.poll_changes().unwrap().is_empty());
//! ```

mod disabled;
mod shared;

use std::fmt;

/// Identifies one open context (tab/window) of a shared storage area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(pub u64);

/// A write observed on a shared storage area.
///
/// `new_value` is `None` when the key was removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageChange {
    pub key: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub origin: ContextId,
}

/// Error type for storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The write would exceed the area's quota. Nothing was written.
    QuotaExceeded { key: String, required: usize, quota: usize },
    /// The area is disabled or otherwise unreachable.
    Unavailable(String),
    /// The context was opened without write access.
    ReadOnly,
    LockPoisoned(&'static str),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::QuotaExceeded {
                key,
                required,
                quota,
            } => write!(
                f,
                "storage quota exceeded writing {} ({} bytes required, quota {})",
                key, required, quota
            ),
            StorageError::Unavailable(reason) => write!(f, "storage unavailable: {}", reason),
            StorageError::ReadOnly => write!(f, "storage context is read-only"),
            StorageError::LockPoisoned(operation) => {
                write!(f, "storage lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Abstract string key-value storage.
pub trait StorageArea {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`. Either the whole value is stored or nothing is.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Drain the writes other contexts made since the last poll.
    ///
    /// Areas without a change notification mechanism report nothing.
    fn poll_changes(&self) -> Result<Vec<StorageChange>, StorageError> {
        Ok(Vec::new())
    }
}

impl<T: StorageArea + ?Sized> StorageArea for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }

    fn poll_changes(&self) -> Result<Vec<StorageChange>, StorageError> {
        (**self).poll_changes()
    }
}

pub use disabled::DisabledStorage;
pub use shared::{SharedStorage, StorageContext};
