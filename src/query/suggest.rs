use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogEntry, CategoryLabels};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Category,
    Term,
    Filter,
    Entry,
}

/// One search-as-you-type suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub kind: SuggestionKind,
}

const POPULAR_TERMS: &[(&str, SuggestionKind)] = &[
    ("ia", SuggestionKind::Term),
    ("colaboração", SuggestionKind::Term),
    ("automação", SuggestionKind::Term),
    ("analytics", SuggestionKind::Term),
    ("grátis", SuggestionKind::Filter),
    ("premium", SuggestionKind::Filter),
];

/// Category labels first, then popular terms, then entry names.
pub(crate) fn suggestions<'a, I>(
    query: &str,
    labels: &CategoryLabels,
    entries: I,
    limit: usize,
) -> Vec<Suggestion>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let categories = labels.iter().filter_map(|category| {
        let text = category.label.to_lowercase();
        text.contains(&needle).then_some(Suggestion {
            text,
            kind: SuggestionKind::Category,
        })
    });

    let terms = POPULAR_TERMS
        .iter()
        .filter(|(term, _)| term.contains(&needle))
        .map(|(term, kind)| Suggestion {
            text: term.to_string(),
            kind: *kind,
        });

    let names = entries
        .into_iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .map(|entry| Suggestion {
            text: entry.name.clone(),
            kind: SuggestionKind::Entry,
        });

    categories.chain(terms).chain(names).take(limit).collect()
}
