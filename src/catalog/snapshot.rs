//! Catalog cache in the durable string store.
//!
//! The cached value is a version byte followed by the bitcode encoding of the
//! entry list, armoured as base64 text. Values written by older builds are a
//! plain JSON array and are still accepted on load.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::{seed_entries, Catalog, CatalogEntry};
use crate::config::FavoritesConfig;
use crate::storage::StorageArea;

const SNAPSHOT_VERSION: u8 = 1;

/// Error type for catalog snapshot encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    Encoding(String),
    Decode(String),
    UnsupportedVersion(u8),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Encoding(msg) => write!(f, "catalog snapshot encoding error: {}", msg),
            SnapshotError::Decode(msg) => write!(f, "catalog snapshot decode error: {}", msg),
            SnapshotError::UnsupportedVersion(version) => {
                write!(f, "unsupported catalog snapshot version {}", version)
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

pub struct CatalogSnapshot;

impl CatalogSnapshot {
    pub fn encode(entries: &[CatalogEntry]) -> Result<String, SnapshotError> {
        let body =
            bitcode::serialize(entries).map_err(|e| SnapshotError::Encoding(e.to_string()))?;
        let mut bytes = Vec::with_capacity(body.len() + 1);
        bytes.push(SNAPSHOT_VERSION);
        bytes.extend_from_slice(&body);
        Ok(STANDARD.encode(bytes))
    }

    pub fn decode(value: &str) -> Result<Vec<CatalogEntry>, SnapshotError> {
        let trimmed = value.trim();
        if trimmed.starts_with('[') {
            return serde_json::from_str(trimmed).map_err(|e| SnapshotError::Decode(e.to_string()));
        }

        let bytes = STANDARD
            .decode(trimmed)
            .map_err(|e| SnapshotError::Decode(e.to_string()))?;
        let (version, body) = bytes
            .split_first()
            .ok_or_else(|| SnapshotError::Decode("empty snapshot".into()))?;
        if *version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(*version));
        }

        bitcode::deserialize(body).map_err(|e| SnapshotError::Decode(e.to_string()))
    }
}

/// Load the catalog cached under the configured key, falling back to the built-in
/// seed when nothing usable is cached. Storage and decode failures are logged,
/// never returned.
pub fn load_catalog<S: StorageArea>(storage: &S, config: &FavoritesConfig) -> Catalog {
    let key = config.catalog_key.as_str();
    match storage.get(key) {
        Ok(Some(value)) => match CatalogSnapshot::decode(&value) {
            Ok(entries) => {
                log::debug!("loaded {} catalog entries from {}", entries.len(), key);
                return Catalog::new(entries);
            }
            Err(err) => log::warn!("ignoring cached catalog under {}: {}", key, err),
        },
        Ok(None) => {}
        Err(err) => log::error!("failed to read cached catalog under {}: {}", key, err),
    }

    Catalog::new(seed_entries())
}

/// Write the catalog snapshot under the configured key. Failures are logged and
/// reported as `false`.
pub fn store_catalog<S: StorageArea>(
    storage: &S,
    config: &FavoritesConfig,
    catalog: &Catalog,
) -> bool {
    let key = config.catalog_key.as_str();
    let encoded = match CatalogSnapshot::encode(catalog.entries()) {
        Ok(encoded) => encoded,
        Err(err) => {
            log::error!("failed to encode catalog snapshot: {}", err);
            return false;
        }
    };

    match storage.set(key, &encoded) {
        Ok(()) => true,
        Err(err) => {
            log::error!("failed to cache catalog under {}: {}", key, err);
            false
        }
    }
}
