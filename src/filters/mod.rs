//! Filter engine for the place catalog.
//!
//! A [`PlaceQuery`] combines the typed [`FilterSelection`] with search text and
//! a favorites-only switch. Every active predicate must pass; the result keeps
//! catalog order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::places::{Place, PlaceCatalog, PriceLevel};

/// Radius bucket, used as an inclusive distance ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RadiusBucket {
    /// Within 500 meters
    #[serde(rename = "500m")]
    Meters500,
    /// Within 1 kilometer
    #[serde(rename = "1km")]
    Km1,
    /// Within 5 kilometers
    #[serde(rename = "5km")]
    Km5,
}

impl RadiusBucket {
    /// All buckets in display order.
    pub const ALL: [RadiusBucket; 3] = [RadiusBucket::Meters500, RadiusBucket::Km1, RadiusBucket::Km5];

    /// Ceiling in meters.
    pub fn ceiling_meters(&self) -> f64 {
        match self {
            Self::Meters500 => 500.0,
            Self::Km1 => 1000.0,
            Self::Km5 => 5000.0,
        }
    }

    /// Filter key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Meters500 => "500m",
            Self::Km1 => "1km",
            Self::Km5 => "5km",
        }
    }

    /// Parse a filter key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.key() == key)
    }

    /// Chip label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Meters500 => "500 м",
            Self::Km1 => "1 км",
            Self::Km5 => "5 км",
        }
    }
}

/// Category key used by filters and collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Cafe,
    Restaurant,
    Park,
    Museum,
    Theater,
    Shopping,
    Bar,
}

/// The single label/key table shared by filtering and collections:
/// key, filter key, place category label, chip label.
const CATEGORY_TABLE: [(CategoryKey, &str, &str, &str); 7] = [
    (CategoryKey::Cafe, "cafe", "Кафе", "Кафе"),
    (CategoryKey::Restaurant, "restaurant", "Ресторан", "Рестораны"),
    (CategoryKey::Park, "park", "Парк", "Парки"),
    (CategoryKey::Museum, "museum", "Музей", "Музеи"),
    (CategoryKey::Theater, "theater", "Театр", "Театры"),
    (CategoryKey::Shopping, "shopping", "Торговый центр", "Торговые центры"),
    (CategoryKey::Bar, "bar", "Бар", "Бары"),
];

impl CategoryKey {
    /// All keys in table order.
    pub fn all() -> impl Iterator<Item = CategoryKey> {
        CATEGORY_TABLE.iter().map(|(key, ..)| *key)
    }

    /// Map a place category label to its key.
    pub fn from_label(label: &str) -> Option<Self> {
        CATEGORY_TABLE
            .iter()
            .find(|(_, _, l, _)| *l == label)
            .map(|(key, ..)| *key)
    }

    /// Parse a filter key ("cafe", "park", ...).
    pub fn from_key(key: &str) -> Option<Self> {
        CATEGORY_TABLE
            .iter()
            .find(|(_, k, ..)| *k == key)
            .map(|(key, ..)| *key)
    }

    /// Filter key.
    pub fn key(&self) -> &'static str {
        CATEGORY_TABLE
            .iter()
            .find(|(k, ..)| k == self)
            .map(|(_, key, ..)| *key)
            .unwrap_or_default()
    }

    /// Place category label this key stands for.
    pub fn label(&self) -> &'static str {
        CATEGORY_TABLE
            .iter()
            .find(|(k, ..)| k == self)
            .map(|(_, _, label, _)| *label)
            .unwrap_or_default()
    }

    /// Filter chip text.
    pub fn chip_label(&self) -> &'static str {
        CATEGORY_TABLE
            .iter()
            .find(|(k, ..)| k == self)
            .map(|(.., chip)| *chip)
            .unwrap_or_default()
    }
}

/// Filter selection errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("Unknown {group} filter key: {key}")]
    UnknownKey { group: &'static str, key: String },
}

/// Chip selection from the filter panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Selected radius buckets (OR'd)
    pub radius: BTreeSet<RadiusBucket>,
    /// Selected categories
    pub categories: BTreeSet<CategoryKey>,
    /// Selected price levels
    pub tags: BTreeSet<PriceLevel>,
}

impl FilterSelection {
    /// Build a selection from raw keys, rejecting unknown ones.
    pub fn from_keys<R, C, T>(radius: R, categories: C, tags: T) -> Result<Self, FilterError>
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        let radius = radius
            .into_iter()
            .map(|k| parse_key(k.as_ref(), "radius", RadiusBucket::from_key))
            .collect::<Result<_, _>>()?;
        let categories = categories
            .into_iter()
            .map(|k| parse_key(k.as_ref(), "category", CategoryKey::from_key))
            .collect::<Result<_, _>>()?;
        let tags = tags
            .into_iter()
            .map(|k| parse_key(k.as_ref(), "price", PriceLevel::from_key))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            radius,
            categories,
            tags,
        })
    }

    /// Whether any chip is selected.
    pub fn has_active_filters(&self) -> bool {
        !self.radius.is_empty() || !self.categories.is_empty() || !self.tags.is_empty()
    }

    /// Labels of the active chips, radius first.
    pub fn active_labels(&self) -> Vec<&'static str> {
        self.radius
            .iter()
            .map(|r| r.label())
            .chain(self.tags.iter().map(|t| t.label()))
            .chain(self.categories.iter().map(|c| c.chip_label()))
            .collect()
    }

    /// Reset every chip group.
    pub fn clear(&mut self) {
        self.radius.clear();
        self.categories.clear();
        self.tags.clear();
    }

    fn matches_radius(&self, place: &Place) -> bool {
        if self.radius.is_empty() {
            return true;
        }
        let distance = place.distance_meters();
        self.radius.iter().any(|r| distance <= r.ceiling_meters())
    }

    fn matches_category(&self, place: &Place) -> bool {
        if self.categories.is_empty() {
            return true;
        }
        CategoryKey::from_label(&place.category)
            .map(|key| self.categories.contains(&key))
            .unwrap_or(false)
    }

    fn matches_tags(&self, place: &Place) -> bool {
        self.tags.is_empty() || self.tags.contains(&place.price_level)
    }
}

fn parse_key<V>(
    key: &str,
    group: &'static str,
    parse: impl Fn(&str) -> Option<V>,
) -> Result<V, FilterError> {
    parse(key).ok_or_else(|| FilterError::UnknownKey {
        group,
        key: key.to_string(),
    })
}

/// Everything that determines the visible subset of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceQuery {
    /// Filter chips
    pub selection: FilterSelection,
    /// Case-insensitive name search
    pub search_query: String,
    /// Only show bookmarked places
    pub favorites_only: bool,
}

impl PlaceQuery {
    /// Check a single place against every active predicate.
    pub fn matches(&self, place: &Place) -> bool {
        if self.favorites_only && !place.is_favorite {
            return false;
        }

        if !self.search_query.is_empty()
            && !place
                .name
                .to_lowercase()
                .contains(&self.search_query.to_lowercase())
        {
            return false;
        }

        self.selection.matches_radius(place)
            && self.selection.matches_category(place)
            && self.selection.matches_tags(place)
    }
}

/// Visible subset of the catalog, in catalog order.
pub fn filter_places<'a>(catalog: &'a PlaceCatalog, query: &PlaceQuery) -> Vec<&'a Place> {
    catalog.iter().filter(|p| query.matches(p)).collect()
}
