//! Place catalog and its mutations.
//!
//! The catalog is treated as an immutable snapshot: every mutation returns a
//! new catalog together with a [`PlaceChange`] describing the affected place,
//! which the statistics engine consumes for its incremental update.

pub mod seed;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::geo::GeoPoint;

/// Category labels counted as dining for statistics.
pub const DINING_CATEGORIES: [&str; 2] = ["Ресторан", "Кафе"];

/// Price level of a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceLevel {
    /// Inexpensive
    Budget,
    /// Mid-range
    Medium,
    /// Expensive
    Premium,
}

impl PriceLevel {
    /// All price levels in display order.
    pub const ALL: [PriceLevel; 3] = [PriceLevel::Budget, PriceLevel::Medium, PriceLevel::Premium];

    /// Key used by stored records and filter selections.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Medium => "medium",
            Self::Premium => "premium",
        }
    }

    /// Parse a price level key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == key)
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Budget => "Бюджетно",
            Self::Medium => "Средний",
            Self::Premium => "Премиум",
        }
    }
}

impl std::fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A point of interest in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Unique, stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Category label ("Кафе", "Парк", ...)
    pub category: String,
    /// Street address
    pub address: String,
    /// Opening hours
    pub hours: String,
    /// Average rating
    pub rating: f32,
    /// Price level
    pub price_level: PriceLevel,
    /// Distance label from the reference location ("650 м", "1.2 км")
    pub distance: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Free-text note left by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_comment: Option<String>,
    /// Whether the user has visited this place (never reset)
    #[serde(default)]
    pub is_visited: bool,
    /// Whether the place is bookmarked
    #[serde(default)]
    pub is_favorite: bool,
}

impl Place {
    /// Coordinates of the place.
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Distance label converted to meters (0 when unparseable).
    pub fn distance_meters(&self) -> f64 {
        crate::geo::parse_distance_label(&self.distance)
    }

    /// Whether the place counts as a restaurant or cafe.
    pub fn is_dining(&self) -> bool {
        DINING_CATEGORIES.contains(&self.category.as_str())
    }
}

/// Before/after state of the single place affected by a mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceChange {
    /// Place as it was before the mutation
    pub before: Place,
    /// Place as it is after the mutation
    pub after: Place,
}

impl PlaceChange {
    /// Whether the favorite flag was switched on.
    pub fn favorite_added(&self) -> bool {
        !self.before.is_favorite && self.after.is_favorite
    }

    /// Whether this change marked the place visited.
    pub fn newly_visited(&self) -> bool {
        !self.before.is_visited && self.after.is_visited
    }
}

/// Ordered catalog of places with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PlaceCatalog {
    places: Vec<Place>,
}

impl PlaceCatalog {
    /// Build a catalog, dropping later entries whose id is already present.
    pub fn new(places: Vec<Place>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(places.len());

        for place in places {
            if seen.insert(place.id.clone()) {
                unique.push(place);
            } else {
                tracing::warn!(id = %place.id, "Dropping duplicate place id from catalog");
            }
        }

        Self { places: unique }
    }

    /// Get a place by id.
    pub fn get(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }

    /// Iterate places in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Place> {
        self.places.iter()
    }

    /// Number of places.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Places the user has visited.
    pub fn visited(&self) -> impl Iterator<Item = &Place> {
        self.places.iter().filter(|p| p.is_visited)
    }

    /// Places the user has bookmarked.
    pub fn favorites(&self) -> impl Iterator<Item = &Place> {
        self.places.iter().filter(|p| p.is_favorite)
    }

    /// Distinct category labels across the whole catalog.
    pub fn distinct_categories(&self) -> BTreeSet<&str> {
        self.places.iter().map(|p| p.category.as_str()).collect()
    }

    /// Flip the favorite flag of a place.
    ///
    /// Returns the catalog unchanged and no change when the id is unknown.
    pub fn toggle_favorite(&self, id: &str) -> (PlaceCatalog, Option<PlaceChange>) {
        self.update(id, |place| {
            place.is_favorite = !place.is_favorite;
            true
        })
    }

    /// Mark a place visited.
    ///
    /// Already visited places and unknown ids leave the catalog unchanged, so
    /// a visit is never counted twice.
    pub fn mark_visited(&self, id: &str) -> (PlaceCatalog, Option<PlaceChange>) {
        self.update(id, |place| {
            if place.is_visited {
                return false;
            }
            place.is_visited = true;
            true
        })
    }

    /// Pair each place with its live distance from a reference point, nearest first.
    pub fn places_with_distance_from(&self, origin: &GeoPoint) -> Vec<(&Place, f64)> {
        let mut with_distance: Vec<(&Place, f64)> = self
            .places
            .iter()
            .map(|p| (p, origin.distance_to(&p.location())))
            .collect();
        with_distance.sort_by(|a, b| a.1.total_cmp(&b.1));
        with_distance
    }

    fn update<F>(&self, id: &str, mutate: F) -> (PlaceCatalog, Option<PlaceChange>)
    where
        F: FnOnce(&mut Place) -> bool,
    {
        let Some(index) = self.places.iter().position(|p| p.id == id) else {
            tracing::debug!(id, "Ignoring mutation for unknown place");
            return (self.clone(), None);
        };

        let before = self.places[index].clone();
        let mut after = before.clone();
        if !mutate(&mut after) {
            return (self.clone(), None);
        }

        let mut places = self.places.clone();
        places[index] = after.clone();

        (Self { places }, Some(PlaceChange { before, after }))
    }
}

impl<'de> Deserialize<'de> for PlaceCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let places = Vec::<Place>::deserialize(deserializer)?;
        Ok(Self::new(places))
    }
}

impl<'a> IntoIterator for &'a PlaceCatalog {
    type Item = &'a Place;
    type IntoIter = std::slice::Iter<'a, Place>;

    fn into_iter(self) -> Self::IntoIter {
        self.places.iter()
    }
}
