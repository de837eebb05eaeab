use serde::{Deserialize, Serialize};

/// Localized display label for a category key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLabel {
    pub key: String,
    pub label: String,
}

/// Ordered table of category labels.
///
/// Unknown keys are displayed as the key itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryLabels {
    labels: Vec<CategoryLabel>,
}

impl Default for CategoryLabels {
    fn default() -> Self {
        Self::new([
            ("productivity", "Produtividade"),
            ("design", "Design"),
            ("marketing", "Marketing"),
            ("development", "Desenvolvimento"),
            ("finance", "Finanças"),
            ("communication", "Comunicação"),
        ])
    }
}

impl CategoryLabels {
    pub fn new<I, K, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: Into<String>,
    {
        Self {
            labels: labels
                .into_iter()
                .map(|(key, label)| CategoryLabel {
                    key: key.into(),
                    label: label.into(),
                })
                .collect(),
        }
    }

    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.label.as_str())
            .unwrap_or(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.labels.iter().any(|entry| entry.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryLabel> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
