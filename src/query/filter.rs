use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryLabels, PriceTier};

/// Ordering applied to the filtered entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Rating,
    #[default]
    Popularity,
    Newest,
}

impl SortKey {
    /// Parse a sort key coming from the UI. Anything unknown means popularity.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "name" => SortKey::Name,
            "rating" => SortKey::Rating,
            "newest" => SortKey::Newest,
            _ => SortKey::Popularity,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Rating => "rating",
            SortKey::Popularity => "popularity",
            SortKey::Newest => "newest",
        }
    }
}

/// The filter fields that can be individually cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Search,
    Category,
    Price,
    Rating,
}

/// A non-neutral filter, as shown in the active filter chips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveFilter {
    pub kind: FilterKind,
    pub label: String,
    pub value: String,
}

/// Search/category/price/rating/sort/page parameters of the catalog view.
///
/// Only the engine writes these fields, and only in normalized form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryFilterState {
    pub(crate) search_term: String,
    pub(crate) category: Option<String>,
    pub(crate) price_tier: Option<PriceTier>,
    pub(crate) min_rating: f64,
    pub(crate) sort_key: SortKey,
    pub(crate) page: usize,
    pub(crate) page_size: usize,
}

impl QueryFilterState {
    pub(crate) fn new(page_size: usize, sort_key: SortKey) -> Self {
        Self {
            search_term: String::new(),
            category: None,
            price_tier: None,
            min_rating: 0.0,
            sort_key,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The selected category key, or `"all"`.
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("all")
    }

    pub fn category_key(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn price_tier(&self) -> Option<PriceTier> {
        self.price_tier
    }

    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn active_filters(&self, labels: &CategoryLabels) -> Vec<ActiveFilter> {
        let mut active = Vec::new();

        if !self.search_term.is_empty() {
            active.push(ActiveFilter {
                kind: FilterKind::Search,
                label: format!("Busca: {}", self.search_term),
                value: self.search_term.clone(),
            });
        }

        if let Some(category) = &self.category {
            active.push(ActiveFilter {
                kind: FilterKind::Category,
                label: format!("Categoria: {}", labels.label(category)),
                value: category.clone(),
            });
        }

        if let Some(price) = self.price_tier {
            active.push(ActiveFilter {
                kind: FilterKind::Price,
                label: format!("Preço: {}", price.label()),
                value: price.as_str().to_string(),
            });
        }

        if self.min_rating > 0.0 {
            active.push(ActiveFilter {
                kind: FilterKind::Rating,
                label: format!("Avaliação: {}+ estrelas", self.min_rating),
                value: self.min_rating.to_string(),
            });
        }

        active
    }
}

pub(crate) fn normalize_search(term: &str) -> String {
    term.trim().to_string()
}

pub(crate) fn normalize_rating(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
