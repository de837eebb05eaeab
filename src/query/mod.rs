//! Catalog query engine - search, filter, sort and paginate the catalog.
//!
//! The engine maps `(entries, filter state)` to `(page items, total count, total
//! pages)`. It is driven directly by raw UI input, so nothing in here fails: bad
//! values are coerced to the neutral option instead.
//!
//! Filters are applied in a fixed order (search, category, price, minimum
//! rating), then the survivors are stably sorted and sliced into the current page.
//!
//! ## Example
//!
//! ```
//! use saas_catalog::{seed_entries, CatalogConfig, CatalogQuery};
//!
//! let mut query = CatalogQuery::new(seed_entries(), CatalogConfig::default());
//! query.set_category("design");
//! query.set_sort_key("rating");
//!
//! let page = query.results();
//! assert_eq!(page.items[0].name, "Figma");
//! assert_eq!(page.total_pages, 1);
//! ```

mod engine;
mod filter;
mod suggest;
mod url_state;

pub use engine::{CatalogQuery, QueryPage};
pub use filter::{ActiveFilter, FilterKind, QueryFilterState, SortKey};
pub use suggest::{Suggestion, SuggestionKind};
pub use url_state::UrlState;
