//! Configuration for the catalog engine and the favorites store.
//!
//! Both configs have working defaults and can be loaded from a JSON document in
//! which every field is optional:
//!
//! ```
//! use saas_catalog::CatalogConfig;
//!
//! let config = CatalogConfig::from_json(r#"{ "pageSize": 12 }"#).unwrap();
//! assert_eq!(config.page_size, 12);
//! assert_eq!(config.suggestion_limit, 6);
//! ```

use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::catalog::CategoryLabels;
use crate::query::SortKey;

pub const DEFAULT_PAGE_SIZE: usize = 24;
pub const DEFAULT_FAVORITES_KEY: &str = "saashub_favorites";
pub const DEFAULT_CATALOG_KEY: &str = "saashub_saas_data";

/// Error type for loading configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "config parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for the catalog query engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    pub page_size: usize,
    pub default_sort: SortKey,
    pub categories: CategoryLabels,
    pub suggestion_limit: usize,
    pub related_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: SortKey::Popularity,
            categories: CategoryLabels::default(),
            suggestion_limit: 6,
            related_limit: 3,
        }
    }
}

impl CatalogConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = parse(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("pageSize must be positive".into()));
        }
        Ok(())
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_default_sort(mut self, sort: SortKey) -> Self {
        self.default_sort = sort;
        self
    }

    pub fn with_categories(mut self, categories: CategoryLabels) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    pub fn with_related_limit(mut self, limit: usize) -> Self {
        self.related_limit = limit;
        self
    }
}

/// Settings for the favorites store and the catalog cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FavoritesConfig {
    pub storage_key: String,
    pub catalog_key: String,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_FAVORITES_KEY.to_string(),
            catalog_key: DEFAULT_CATALOG_KEY.to_string(),
        }
    }
}

impl FavoritesConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = parse(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storageKey must not be empty".into()));
        }
        if self.catalog_key.trim().is_empty() {
            return Err(ConfigError::Invalid("catalogKey must not be empty".into()));
        }
        if self.storage_key == self.catalog_key {
            return Err(ConfigError::Invalid(
                "storageKey and catalogKey must differ".into(),
            ));
        }
        Ok(())
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_catalog_key(mut self, key: impl Into<String>) -> Self {
        self.catalog_key = key.into();
        self
    }
}

fn parse<T: DeserializeOwned>(json: &str) -> Result<T, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
}
