use std::cmp::Ordering;

use crate::catalog::{compare_names, Catalog, CatalogEntry, CategoryLabels, PriceTier};
use crate::config::CatalogConfig;

use super::filter::{normalize_rating, normalize_search};
use super::suggest::suggestions;
use super::{ActiveFilter, FilterKind, QueryFilterState, SortKey, Suggestion, UrlState};

/// One rendered page of the current result.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPage<'a> {
    pub items: Vec<&'a CatalogEntry>,
    pub page: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

/// Filter/sort/paginate engine over an owned copy of the catalog entries.
///
/// Every setter normalizes its input instead of rejecting it, resets the page to 1
/// and recomputes the derived result, so the result always matches the filter
/// state that produced it.
pub struct CatalogQuery {
    entries: Vec<CatalogEntry>,
    config: CatalogConfig,
    filter: QueryFilterState,
    /// Indices into `entries`, filtered and sorted.
    matches: Vec<usize>,
}

impl CatalogQuery {
    /// Build the engine. Later entries reusing an id are dropped.
    pub fn new(entries: Vec<CatalogEntry>, config: CatalogConfig) -> Self {
        let filter = QueryFilterState::new(config.page_size, config.default_sort);
        let mut query = Self {
            entries: Catalog::new(entries).into_entries(),
            config,
            filter,
            matches: Vec::new(),
        };
        query.recompute();
        query
    }

    pub fn from_catalog(catalog: &Catalog, config: CatalogConfig) -> Self {
        Self::new(catalog.entries().to_vec(), config)
    }

    /// Build the engine with the filter state carried in a page URL query string.
    pub fn from_url(entries: Vec<CatalogEntry>, config: CatalogConfig, query: &str) -> Self {
        let url = UrlState::parse(query);
        let mut engine = Self::new(entries, config);

        if let Some(search) = &url.search {
            engine.set_search_term(search);
        }
        if let Some(category) = &url.category {
            engine.set_category(category);
        }
        if let Some(page) = url.page {
            engine.set_page(i64::try_from(page).unwrap_or(i64::MAX));
        }

        engine
    }

    pub fn filter(&self) -> &QueryFilterState {
        &self.filter
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.filter.search_term = normalize_search(term);
        self.filter_changed();
    }

    /// Select a category key. `"all"` and unknown keys select every category.
    pub fn set_category(&mut self, key: &str) {
        let key = key.trim();
        self.filter.category = if key == "all" || !self.is_known_category(key) {
            None
        } else {
            Some(key.to_string())
        };
        self.filter_changed();
    }

    /// Select a price tier. `"all"` and unknown tiers select every tier.
    pub fn set_price_tier(&mut self, key: &str) {
        self.filter.price_tier = PriceTier::parse(key);
        self.filter_changed();
    }

    /// Set the minimum rating. Negative and non-finite values unset the filter.
    pub fn set_min_rating(&mut self, value: f64) {
        self.filter.min_rating = normalize_rating(value);
        self.filter_changed();
    }

    pub fn set_sort_key(&mut self, key: &str) {
        self.filter.sort_key = SortKey::parse(key);
        self.filter_changed();
    }

    /// Change the number of items per page. Zero and negative sizes select the
    /// configured default.
    pub fn set_page_size(&mut self, page_size: i64) {
        self.filter.page_size = usize::try_from(page_size)
            .ok()
            .filter(|size| *size > 0)
            .unwrap_or(self.config.page_size)
            .max(1);
        self.filter_changed();
    }

    /// Move to page `page`, clamped to `[1, total_pages]`. Returns the current page.
    pub fn set_page(&mut self, page: i64) -> usize {
        let last = i64::try_from(self.total_pages()).unwrap_or(i64::MAX);
        let target = page.clamp(1, last) as usize;
        if target != self.filter.page {
            self.filter.page = target;
        }
        self.filter.page
    }

    /// Reset every filter and the sort order to their defaults. The page size is kept.
    pub fn clear_filters(&mut self) {
        self.filter = QueryFilterState::new(self.filter.page_size, self.config.default_sort);
        self.recompute();
    }

    /// Reset one filter field to its neutral value.
    pub fn remove_filter(&mut self, kind: FilterKind) {
        match kind {
            FilterKind::Search => self.filter.search_term.clear(),
            FilterKind::Category => self.filter.category = None,
            FilterKind::Price => self.filter.price_tier = None,
            FilterKind::Rating => self.filter.min_rating = 0.0,
        }
        self.filter_changed();
    }

    /// Swap in a new source list, keeping the filter. The page is re-clamped.
    pub fn replace_entries(&mut self, entries: Vec<CatalogEntry>) {
        self.entries = Catalog::new(entries).into_entries();
        self.recompute();
    }

    /// Rebuild the filtered, sorted result from the entries and the filter state.
    pub fn recompute(&mut self) {
        let term = self.filter.search_term.to_lowercase();
        let labels = &self.config.categories;
        let filter = &self.filter;

        let mut matches: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_active)
            .filter(|(_, entry)| term.is_empty() || matches_search(entry, &term, labels))
            .filter(|(_, entry)| {
                filter
                    .category
                    .as_deref()
                    .map_or(true, |category| entry.category == category)
            })
            .filter(|(_, entry)| filter.price_tier.map_or(true, |price| entry.price == price))
            .filter(|(_, entry)| filter.min_rating <= 0.0 || entry.rating >= filter.min_rating)
            .map(|(index, _)| index)
            .collect();

        let entries = &self.entries;
        let sort_key = filter.sort_key;
        matches.sort_by(|&a, &b| compare(&entries[a], &entries[b], sort_key));

        self.matches = matches;
        self.filter.page = self.filter.page.clamp(1, self.total_pages());

        log::debug!(
            "catalog recomputed: {} of {} entries match, page {}/{}",
            self.matches.len(),
            self.entries.len(),
            self.filter.page,
            self.total_pages()
        );
    }

    pub fn total_count(&self) -> usize {
        self.matches.len()
    }

    /// `max(1, ceil(total_count / page_size))`.
    pub fn total_pages(&self) -> usize {
        self.matches.len().div_ceil(self.filter.page_size).max(1)
    }

    pub fn page_items(&self) -> Vec<&CatalogEntry> {
        let start = (self.filter.page - 1) * self.filter.page_size;
        self.matches
            .iter()
            .skip(start)
            .take(self.filter.page_size)
            .map(|&index| &self.entries[index])
            .collect()
    }

    pub fn results(&self) -> QueryPage<'_> {
        QueryPage {
            items: self.page_items(),
            page: self.filter.page,
            total_count: self.total_count(),
            total_pages: self.total_pages(),
        }
    }

    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        self.filter.active_filters(&self.config.categories)
    }

    pub fn suggestions(&self, query: &str) -> Vec<Suggestion> {
        suggestions(
            query,
            &self.config.categories,
            self.entries.iter().filter(|entry| entry.is_active),
            self.config.suggestion_limit,
        )
    }

    /// Active entries sharing the category of `id`, up to the configured limit.
    pub fn related(&self, id: u64) -> Vec<&CatalogEntry> {
        let Some(current) = self.entries.iter().find(|entry| entry.id == id) else {
            return Vec::new();
        };

        self.entries
            .iter()
            .filter(|entry| {
                entry.is_active && entry.id != id && entry.category == current.category
            })
            .take(self.config.related_limit)
            .collect()
    }

    pub fn url_state(&self) -> UrlState {
        UrlState::from_filter(&self.filter)
    }

    pub fn to_query_string(&self) -> String {
        self.url_state().to_query_string()
    }

    fn filter_changed(&mut self) {
        self.filter.page = 1;
        self.recompute();
    }

    fn is_known_category(&self, key: &str) -> bool {
        self.config.categories.contains(key) || self.entries.iter().any(|entry| entry.category == key)
    }
}

fn matches_search(entry: &CatalogEntry, term: &str, labels: &CategoryLabels) -> bool {
    entry.name.to_lowercase().contains(term)
        || entry.description.to_lowercase().contains(term)
        || entry.tags.iter().any(|tag| tag.to_lowercase().contains(term))
        || labels.label(&entry.category).to_lowercase().contains(term)
}

fn compare(a: &CatalogEntry, b: &CatalogEntry, sort_key: SortKey) -> Ordering {
    match sort_key {
        SortKey::Name => compare_names(&a.name, &b.name),
        SortKey::Rating => b.rating.total_cmp(&a.rating),
        SortKey::Popularity => b.review_count.cmp(&a.review_count),
        SortKey::Newest => b.created_at.cmp(&a.created_at),
    }
}
