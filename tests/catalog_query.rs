//! Integration tests for the catalog query engine.

mod support;

use saas_catalog::{
    load_catalog, seed_entries, store_catalog, CatalogConfig, CatalogEntry, CatalogQuery,
    FavoritesConfig, FilterKind, SharedStorage, SuggestionKind,
};
use support::{date, generated, notion_and_figma};

fn names(query: &CatalogQuery) -> Vec<String> {
    query
        .page_items()
        .iter()
        .map(|entry| entry.name.clone())
        .collect()
}

#[test]
fn category_filter_selects_design() {
    let mut query = CatalogQuery::new(notion_and_figma(), CatalogConfig::default());
    query.set_category("design");

    assert_eq!(names(&query), vec!["Figma"]);
    assert_eq!(query.total_count(), 1);
}

#[test]
fn rating_sort_puts_highest_first() {
    let mut query = CatalogQuery::new(notion_and_figma(), CatalogConfig::default());
    query.set_sort_key("rating");

    assert_eq!(names(&query), vec!["Figma", "Notion"]);
}

#[test]
fn fifty_entries_make_three_pages() {
    let mut query = CatalogQuery::new(generated(50), CatalogConfig::default());

    assert_eq!(query.filter().page_size(), 24);
    assert_eq!(query.total_pages(), 3);
    assert_eq!(query.set_page(5), 3);
    assert_eq!(query.page_items().len(), 2);
}

#[test]
fn total_pages_formula_holds_for_every_size() {
    for count in [0u64, 1, 23, 24, 25, 48, 49, 50] {
        let query = CatalogQuery::new(generated(count), CatalogConfig::default());
        let expected = std::cmp::max(1, (count as usize + 23) / 24);
        assert_eq!(query.total_pages(), expected, "count {}", count);
    }
}

#[test]
fn every_filter_change_resets_page() {
    let mut query = CatalogQuery::new(generated(50), CatalogConfig::default().with_page_size(5));
    let changes: Vec<Box<dyn Fn(&mut CatalogQuery)>> = vec![
        Box::new(|q| q.set_search_term("tool")),
        Box::new(|q| q.set_category("productivity")),
        Box::new(|q| q.set_price_tier("free")),
        Box::new(|q| q.set_min_rating(3.5)),
        Box::new(|q| q.set_sort_key("name")),
        Box::new(|q| q.remove_filter(FilterKind::Price)),
        Box::new(|q| q.set_page_size(4)),
        Box::new(|q| q.clear_filters()),
    ];

    for change in changes {
        query.set_page(3);
        assert_eq!(query.filter().page(), 3);
        change(&mut query);
        assert_eq!(query.filter().page(), 1);
    }
}

#[test]
fn total_pages_follows_page_size() {
    let mut query = CatalogQuery::new(generated(50), CatalogConfig::default());
    assert_eq!(query.total_pages(), 3);

    query.set_page_size(10);
    assert_eq!(query.total_pages(), 5);
    assert_eq!(query.set_page(5), 5);
    assert_eq!(query.page_items().len(), 10);

    query.set_page_size(7);
    assert_eq!(query.filter().page(), 1);
    assert_eq!(query.total_pages(), 8);

    query.set_page_size(0);
    assert_eq!(query.total_pages(), 3);
}

#[test]
fn set_page_stays_in_range() {
    let mut query = CatalogQuery::new(generated(30), CatalogConfig::default().with_page_size(7));
    for requested in [-100, -1, 0, 1, 3, 5, 6, 1000] {
        let page = query.set_page(requested);
        assert!(page >= 1 && page <= query.total_pages());
    }
}

#[test]
fn recompute_is_deterministic() {
    let mut first = CatalogQuery::new(seed_entries(), CatalogConfig::default().with_page_size(4));
    let mut second = CatalogQuery::new(seed_entries(), CatalogConfig::default().with_page_size(4));

    for query in [&mut first, &mut second] {
        query.set_search_term("a");
        query.set_sort_key("popularity");
        query.set_page(2);
    }

    let before: Vec<u64> = first.page_items().iter().map(|e| e.id).collect();
    first.recompute();
    let after: Vec<u64> = first.page_items().iter().map(|e| e.id).collect();
    let other: Vec<u64> = second.page_items().iter().map(|e| e.id).collect();

    assert_eq!(before, after);
    assert_eq!(before, other);
}

#[test]
fn rating_sort_is_stable() {
    let entries = vec![
        CatalogEntry::new(1, "First", "design", date(2024, 1, 1)).with_rating(4.5, 10),
        CatalogEntry::new(2, "Top", "design", date(2024, 1, 1)).with_rating(4.9, 5),
        CatalogEntry::new(3, "Second", "design", date(2024, 1, 1)).with_rating(4.5, 99),
        CatalogEntry::new(4, "Third", "design", date(2024, 1, 1)).with_rating(4.5, 1),
    ];
    let mut query = CatalogQuery::new(entries, CatalogConfig::default());
    query.set_sort_key("rating");

    assert_eq!(names(&query), vec!["Top", "First", "Second", "Third"]);
}

#[test]
fn source_entries_are_never_mutated() {
    let entries = seed_entries();
    let mut query = CatalogQuery::new(entries.clone(), CatalogConfig::default());
    query.set_sort_key("name");
    query.set_min_rating(4.7);
    query.set_page(2);

    assert_eq!(query.entries(), entries.as_slice());
}

#[test]
fn malformed_input_is_normalized() {
    let mut query = CatalogQuery::new(seed_entries(), CatalogConfig::default());
    query.set_category("<script>");
    query.set_price_tier("lifetime");
    query.set_min_rating(f64::NAN);
    query.set_sort_key("DROP TABLE");

    let filter = query.filter();
    assert_eq!(filter.category(), "all");
    assert_eq!(filter.price_tier(), None);
    assert_eq!(filter.min_rating(), 0.0);
    assert_eq!(filter.sort_key().as_str(), "popularity");
    assert_eq!(query.total_count(), 10);
}

#[test]
fn category_known_only_through_entries_is_accepted() {
    let mut entries = seed_entries();
    entries.push(CatalogEntry::new(11, "Steam", "gaming", date(2024, 2, 1)));

    let mut query = CatalogQuery::new(entries, CatalogConfig::default());
    query.set_category("gaming");
    assert_eq!(names(&query), vec!["Steam"]);
    assert_eq!(query.active_filters()[0].label, "Categoria: gaming");
}

#[test]
fn active_filters_and_removal() {
    let mut query = CatalogQuery::new(seed_entries(), CatalogConfig::default());
    query.set_category("design");
    query.set_price_tier("premium");

    let kinds: Vec<FilterKind> = query.active_filters().iter().map(|f| f.kind).collect();
    assert_eq!(kinds, vec![FilterKind::Category, FilterKind::Price]);
    assert_eq!(names(&query), vec!["Canva Pro"]);

    query.remove_filter(FilterKind::Price);
    assert_eq!(query.total_count(), 2);
    assert_eq!(query.active_filters().len(), 1);
}

#[test]
fn suggestions_respect_configured_limit() {
    let query = CatalogQuery::new(
        seed_entries(),
        CatalogConfig::default().with_suggestion_limit(2),
    );
    let found = query.suggestions("o");
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|s| s.kind == SuggestionKind::Category));
}

#[test]
fn url_state_restores_view() {
    let entries = generated(50);
    let query = CatalogQuery::from_url(
        entries.clone(),
        CatalogConfig::default(),
        "?category=productivity&page=2",
    );
    assert_eq!(query.filter().page(), 2);
    assert_eq!(query.to_query_string(), "category=productivity&page=2");

    let clamped = CatalogQuery::from_url(entries, CatalogConfig::default(), "page=40");
    assert_eq!(clamped.filter().page(), 3);
    assert_eq!(clamped.to_query_string(), "page=3");
}

#[test]
fn engine_runs_over_cached_catalog() {
    let profile = SharedStorage::new();
    let tab = profile.open_context();
    let config = FavoritesConfig::default();

    let mut catalog = load_catalog(&tab, &config);
    catalog.deactivate(5);
    assert!(store_catalog(&tab, &config, &catalog));

    let reloaded = load_catalog(&profile.open_context(), &config);
    let mut query = CatalogQuery::from_catalog(&reloaded, CatalogConfig::default());
    query.set_category("design");
    assert_eq!(names(&query), vec!["Canva Pro"]);
}
