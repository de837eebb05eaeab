use std::collections::HashSet;

use url::form_urlencoded;

use super::QueryFilterState;

/// The part of the filter state that round-trips through the page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlState {
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: Option<usize>,
}

impl UrlState {
    /// Read `search`, `category` and `page` from a query string, with or without
    /// the leading `?`. The first occurrence of a parameter wins, even when its
    /// value is unusable and gets dropped.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut state = UrlState::default();
        let mut seen = HashSet::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if !seen.insert(key.clone()) {
                continue;
            }

            let value = value.trim();
            match key.as_ref() {
                "search" => {
                    state.search = Some(value.to_string()).filter(|search| !search.is_empty());
                }
                "category" => {
                    state.category = Some(value.to_string())
                        .filter(|category| !category.is_empty() && category != "all");
                }
                "page" => {
                    state.page = value.parse::<usize>().ok().filter(|page| *page >= 1);
                }
                _ => {}
            }
        }

        state
    }

    pub fn from_filter(filter: &QueryFilterState) -> Self {
        Self {
            search: Some(filter.search_term().to_string()).filter(|term| !term.is_empty()),
            category: filter.category_key().map(str::to_string),
            page: Some(filter.page()).filter(|page| *page > 1),
        }
    }

    /// Serialize the non-default parameters. Empty when everything is default.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(search) = &self.search {
            serializer.append_pair("search", search);
        }
        if let Some(category) = &self.category {
            serializer.append_pair("category", category);
        }
        if let Some(page) = self.page {
            serializer.append_pair("page", &page.to_string());
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_parameters() {
        let state = UrlState::parse("?search=gest%C3%A3o+de+tarefas&category=design&page=3&utm=x");
        assert_eq!(state.search.as_deref(), Some("gestão de tarefas"));
        assert_eq!(state.category.as_deref(), Some("design"));
        assert_eq!(state.page, Some(3));
    }

    #[test]
    fn drops_unusable_values() {
        let state = UrlState::parse("category=all&page=zero&search=");
        assert_eq!(state, UrlState::default());

        assert_eq!(UrlState::parse("page=0").page, None);
        assert_eq!(UrlState::parse("page=-2").page, None);
    }

    #[test]
    fn first_occurrence_wins() {
        let state = UrlState::parse("category=design&category=finance");
        assert_eq!(state.category.as_deref(), Some("design"));

        assert_eq!(UrlState::parse("page=zero&page=7").page, None);
        assert_eq!(UrlState::parse("category=all&category=design").category, None);
        assert_eq!(UrlState::parse("search=&search=crm").search, None);
    }

    #[test]
    fn serializes_only_non_defaults() {
        assert_eq!(UrlState::default().to_query_string(), "");

        let state = UrlState {
            search: Some("ia generativa".into()),
            category: None,
            page: Some(2),
        };
        assert_eq!(state.to_query_string(), "search=ia+generativa&page=2");
    }
}
