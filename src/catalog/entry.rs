use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pricing plan of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    #[default]
    Free,
    Premium,
}

impl PriceTier {
    /// Parse a plan key. Returns `None` for anything that is not a known tier.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "free" => Some(PriceTier::Free),
            "premium" => Some(PriceTier::Premium),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Free => "free",
            PriceTier::Premium => "premium",
        }
    }

    /// Display label shown in the active filter chips.
    pub fn label(&self) -> &'static str {
        match self {
            PriceTier::Free => "Grátis",
            PriceTier::Premium => "Premium",
        }
    }
}

/// One marketplace listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: u64,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub price: PriceTier,
    #[serde(default)]
    pub rating: f64,
    #[serde(default, alias = "reviews")]
    pub review_count: u64,
    #[serde(with = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
    #[serde(default)]
    pub views: u64,
}

fn active_by_default() -> bool {
    true
}

impl CatalogEntry {
    /// Create an active entry with the required fields; everything else is empty.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        category: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            description: String::new(),
            short_description: String::new(),
            tags: Vec::new(),
            price: PriceTier::Free,
            rating: 0.0,
            review_count: 0,
            created_at,
            featured: false,
            url: String::new(),
            logo: String::new(),
            images: Vec::new(),
            is_active: true,
            views: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_price(mut self, price: PriceTier) -> Self {
        self.price = price;
        self
    }

    pub fn with_rating(mut self, rating: f64, review_count: u64) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}

/// `createdAt` is written as RFC 3339 but older seed data only carries a date.
mod created_at {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid createdAt: {}", raw)))
    }

    pub(super) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}
