use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::FavoritesError;
use crate::catalog::Catalog;

/// One favorite in an export document, with display fields for offline reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedFavorite {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub url: String,
}

/// Backup document produced by `FavoritesStore::export_set`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesExport {
    pub timestamp: DateTime<Utc>,
    pub count: usize,
    pub favorites: Vec<ExportedFavorite>,
}

impl FavoritesExport {
    /// Ids with no catalog entry are left out.
    pub fn build<I>(ids: I, catalog: &Catalog, timestamp: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let favorites: Vec<ExportedFavorite> = ids
            .into_iter()
            .filter_map(|id| catalog.get(id))
            .map(|entry| ExportedFavorite {
                id: entry.id,
                name: entry.name.clone(),
                category: entry.category.clone(),
                url: entry.url.clone(),
            })
            .collect();

        Self {
            timestamp,
            count: favorites.len(),
            favorites,
        }
    }

    pub fn to_json(&self) -> Result<String, FavoritesError> {
        serde_json::to_string_pretty(self).map_err(|e| FavoritesError::Serde(e.to_string()))
    }
}

/// Download name for an export taken on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("saashub-favorites-{}.json", date.format("%Y-%m-%d"))
}

/// Validate an import document and pull out its ids.
///
/// The document must have a `favorites` list whose items each carry a positive
/// integer `id`. Any other shape is rejected as a whole.
pub(crate) fn parse_import(payload: &str) -> Result<Vec<u64>, FavoritesError> {
    let document: Value =
        serde_json::from_str(payload).map_err(|e| FavoritesError::Serde(e.to_string()))?;

    let favorites = document
        .get("favorites")
        .ok_or_else(|| FavoritesError::InvalidPayload("missing `favorites` field".into()))?;
    let items = favorites
        .as_array()
        .ok_or_else(|| FavoritesError::InvalidPayload("`favorites` must be a list".into()))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.get("id")
                .and_then(Value::as_u64)
                .filter(|id| *id > 0)
                .ok_or_else(|| {
                    FavoritesError::InvalidPayload(format!(
                        "favorites[{}] has no positive integer `id`",
                        index
                    ))
                })
        })
        .collect()
}
