use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{compare_names, Catalog, CatalogEntry};

/// Orderings offered on the favorites page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoritesSort {
    #[default]
    Name,
    Rating,
    Category,
    /// Higher ids were listed later.
    Recent,
}

impl FavoritesSort {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "rating" => FavoritesSort::Rating,
            "category" => FavoritesSort::Category,
            "recent" => FavoritesSort::Recent,
            _ => FavoritesSort::Name,
        }
    }
}

/// Summary counters shown above the favorites grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesStats {
    pub count: usize,
    pub categories: usize,
}

/// Active catalog entries whose id is in `favorites`, in catalog order.
pub fn favorite_entries<'a>(catalog: &'a Catalog, favorites: &[u64]) -> Vec<&'a CatalogEntry> {
    let wanted: HashSet<u64> = favorites.iter().copied().collect();
    catalog
        .active_entries()
        .filter(|entry| wanted.contains(&entry.id))
        .collect()
}

pub fn sort_favorites(entries: &mut [&CatalogEntry], sort: FavoritesSort) {
    match sort {
        FavoritesSort::Name => entries.sort_by(|a, b| compare_names(&a.name, &b.name)),
        FavoritesSort::Rating => entries.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        FavoritesSort::Category => {
            entries.sort_by(|a, b| compare_names(&a.category, &b.category))
        }
        FavoritesSort::Recent => entries.sort_by(|a, b| b.id.cmp(&a.id)),
    }
}

pub fn favorites_stats(entries: &[&CatalogEntry]) -> FavoritesStats {
    let categories: HashSet<&str> = entries.iter().map(|entry| entry.category.as_str()).collect();
    FavoritesStats {
        count: entries.len(),
        categories: categories.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_entries;

    fn ids(entries: &[&CatalogEntry]) -> Vec<u64> {
        entries.iter().map(|entry| entry.id).collect()
    }

    #[test]
    fn entries_follow_catalog_order_and_skip_inactive() {
        let mut catalog = Catalog::new(seed_entries());
        catalog.deactivate(6);

        let entries = favorite_entries(&catalog, &[8, 6, 1, 404]);
        assert_eq!(ids(&entries), vec![1, 8]);
    }

    #[test]
    fn sorts() {
        let catalog = Catalog::new(seed_entries());
        let mut entries = favorite_entries(&catalog, &[1, 5, 9, 10]);

        sort_favorites(&mut entries, FavoritesSort::Name);
        assert_eq!(ids(&entries), vec![5, 1, 9, 10]);

        sort_favorites(&mut entries, FavoritesSort::Rating);
        assert_eq!(ids(&entries), vec![5, 1, 10, 9]);

        sort_favorites(&mut entries, FavoritesSort::Category);
        assert_eq!(ids(&entries), vec![10, 5, 9, 1]);

        sort_favorites(&mut entries, FavoritesSort::Recent);
        assert_eq!(ids(&entries), vec![10, 9, 5, 1]);
    }

    #[test]
    fn parse_defaults_to_name() {
        assert_eq!(FavoritesSort::parse("recent"), FavoritesSort::Recent);
        assert_eq!(FavoritesSort::parse("whatever"), FavoritesSort::Name);
    }

    #[test]
    fn stats_count_distinct_categories() {
        let catalog = Catalog::new(seed_entries());
        let entries = favorite_entries(&catalog, &[1, 2, 5]);
        assert_eq!(
            favorites_stats(&entries),
            FavoritesStats {
                count: 3,
                categories: 2
            }
        );
        assert_eq!(favorites_stats(&[]), FavoritesStats::default());
    }
}
