//! Core value types used by watchdeck state.

use serde::{Deserialize, Serialize};

/// Wildcard value accepted by the brand and country selectors.
pub const ALL: &str = "All";

/// Brand assigned when the source provides no category.
pub const UNKNOWN_BRAND: &str = "Unknown";

/// Country assigned to every item; the source carries no per-item origin.
pub const GLOBAL_COUNTRY: &str = "Global";

/// Upper bound of the default price range.
pub const DEFAULT_PRICE_MAX: u64 = 1_000_000;

/// Raw item as delivered by the remote item source.
///
/// Only the fields the catalog needs are decoded; anything else in the payload
/// is ignored.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RawItem {
    /// Display title.
    pub title: String,
    /// Optional category, used as the brand.
    #[serde(default)]
    pub category: Option<String>,
    /// Price in whole currency units (fractional).
    pub price: f64,
    /// Image URL.
    #[serde(default)]
    pub image: String,
}

/// A catalog entry in the "watch" record shape.
///
/// Built once from a [`RawItem`] at load time; never mutated afterwards.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Watch {
    /// 1-based position in source order.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Brand (source category, or `"Unknown"`).
    pub brand: String,
    /// Country of origin (always `"Global"`).
    pub country: String,
    /// Price in cents-equivalent units.
    pub price_usd: u64,
    /// Model year in `2020..=2024`.
    pub year: u16,
    /// Image URL.
    pub image: String,
}

/// Sorting applied to the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep catalog order.
    #[default]
    Relevance,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Oldest first.
    YearAsc,
    /// Newest first.
    YearDesc,
}

impl SortKey {
    /// Return the string key used in settings files and on the command line.
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::YearAsc => "year-asc",
            Self::YearDesc => "year-desc",
        }
    }

    /// What: Parse a sort key leniently.
    ///
    /// Inputs:
    /// - `s`: Key string (case-insensitive, `_` accepted in place of `-`).
    ///
    /// Output:
    /// - The matching key; any unrecognized value yields [`SortKey::Relevance`].
    #[must_use]
    pub fn from_key(s: &str) -> Self {
        Self::parse_key(s).unwrap_or_default()
    }

    /// Strict variant of [`SortKey::from_key`]: `None` for unknown keys.
    #[must_use]
    pub fn parse_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "relevance" => Some(Self::Relevance),
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            "year-asc" => Some(Self::YearAsc),
            "year-desc" => Some(Self::YearDesc),
            _ => None,
        }
    }

    /// Human label shown in the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::PriceAsc => "Price: Low → High",
            Self::PriceDesc => "Price: High → Low",
            Self::YearDesc => "Newest",
            Self::YearAsc => "Oldest",
        }
    }

    /// Next key in selector order; wraps around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Relevance => Self::PriceAsc,
            Self::PriceAsc => Self::PriceDesc,
            Self::PriceDesc => Self::YearDesc,
            Self::YearDesc => Self::YearAsc,
            Self::YearAsc => Self::Relevance,
        }
    }

    /// Previous key in selector order; wraps around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Relevance => Self::YearAsc,
            Self::PriceAsc => Self::Relevance,
            Self::PriceDesc => Self::PriceAsc,
            Self::YearDesc => Self::PriceDesc,
            Self::YearAsc => Self::YearDesc,
        }
    }
}

/// Inclusive price bounds, in the same unit as [`Watch::price_usd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lower bound (inclusive).
    pub min: u64,
    /// Upper bound (inclusive).
    pub max: u64,
}

impl PriceRange {
    /// Build a range `[min, max]`.
    #[must_use]
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Whether `price` lies inside the range, both ends included.
    #[must_use]
    pub const fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(0, DEFAULT_PRICE_MAX)
    }
}

/// The user's current filter and sort choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text query, matched case-insensitively against `name + " " + brand`.
    pub query: String,
    /// Brand selector value or `"All"`.
    pub brand: String,
    /// Country selector value or `"All"`.
    pub country: String,
    /// Inclusive price bounds.
    pub price: PriceRange,
    /// Ordering applied after filtering.
    pub sort: SortKey,
}

impl FilterCriteria {
    /// Default criteria with a custom upper price bound.
    #[must_use]
    pub fn with_price_max(max: u64) -> Self {
        Self {
            price: PriceRange::new(0, max),
            ..Self::default()
        }
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            brand: ALL.to_string(),
            country: ALL.to_string(),
            price: PriceRange::default(),
            sort: SortKey::Relevance,
        }
    }
}
