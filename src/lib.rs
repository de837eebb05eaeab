mod catalog;
mod config;
mod favorites;
mod query;
mod storage;

pub use catalog::{
    compare_names, load_catalog, seed_entries, store_catalog, Catalog, CatalogEntry,
    CatalogSnapshot, CategoryLabel, CategoryLabels, PriceTier, SnapshotError,
};
pub use config::{
    CatalogConfig, ConfigError, FavoritesConfig, DEFAULT_CATALOG_KEY, DEFAULT_FAVORITES_KEY,
    DEFAULT_PAGE_SIZE,
};
pub use favorites::{
    export_file_name, favorite_entries, favorites_stats, sort_favorites, ExportedFavorite,
    FavoriteAction, FavoritesChange, FavoritesError, FavoritesExport, FavoritesSort,
    FavoritesStats, FavoritesStore, SubscriptionId,
};
pub use query::{
    ActiveFilter, CatalogQuery, FilterKind, QueryFilterState, QueryPage, SortKey, Suggestion,
    SuggestionKind, UrlState,
};
pub use storage::{
    ContextId, DisabledStorage, SharedStorage, StorageArea, StorageChange, StorageContext,
    StorageError,
};
