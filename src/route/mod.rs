//! Visiting route: an ordered, deduplicated list of places.
//!
//! Stops are kept in insertion order, which is also the navigation order.
//! No reordering or optimisation takes place.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::places::{Place, PlaceCatalog};

/// Base URL of the external navigator deep link.
pub const NAVIGATOR_BASE_URL: &str = "https://yandex.ru/maps/";

/// Top-level view the hosting layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Catalog browsing
    #[default]
    Explore,
    /// Curated collections
    Collections,
    /// Route map
    Map,
    /// Achievements board
    Achievements,
}

/// Result of adding a place to the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteChange {
    /// The place was appended
    Added,
    /// The place was already on the route
    AlreadyPresent,
}

/// Ordered route of places with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Route {
    stops: Vec<Place>,
}

impl Route {
    /// Create an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a route from stored stops, keeping the first occurrence of each id.
    pub fn from_stops(stops: Vec<Place>) -> Self {
        stops
            .into_iter()
            .fold(Self::new(), |route, place| route.add(place).0)
    }

    /// Stops in navigation order.
    pub fn stops(&self) -> &[Place] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Whether a place is on the route.
    pub fn contains(&self, id: &str) -> bool {
        self.stops.iter().any(|p| p.id == id)
    }

    /// Append a place unless it is already on the route.
    pub fn add(&self, place: Place) -> (Route, RouteChange) {
        if self.contains(&place.id) {
            return (self.clone(), RouteChange::AlreadyPresent);
        }

        let mut stops = self.stops.clone();
        stops.push(place);
        (Self { stops }, RouteChange::Added)
    }

    /// Remove a place by id; unknown ids leave the route unchanged.
    pub fn remove(&self, id: &str) -> (Route, Option<Place>) {
        let Some(index) = self.stops.iter().position(|p| p.id == id) else {
            return (self.clone(), None);
        };

        let mut stops = self.stops.clone();
        let removed = stops.remove(index);
        (Self { stops }, Some(removed))
    }

    /// Empty route.
    pub fn clear(&self) -> Route {
        Self::new()
    }

    /// Add the place if absent and switch to the map view.
    pub fn navigate_to(&self, place: Place) -> (Route, View) {
        (self.add(place).0, View::Map)
    }

    /// Replace stored stops with their current catalog versions.
    ///
    /// Stops missing from the catalog keep their stored copy.
    pub fn refreshed(&self, catalog: &PlaceCatalog) -> Route {
        let stops = self
            .stops
            .iter()
            .map(|stop| catalog.get(&stop.id).unwrap_or(stop).clone())
            .collect();
        Self { stops }
    }

    /// Coordinate sequence for the map path: user location first, then each stop.
    pub fn coordinates(&self, user_location: &GeoPoint) -> Vec<GeoPoint> {
        std::iter::once(*user_location)
            .chain(self.stops.iter().map(Place::location))
            .collect()
    }

    /// Point the map should center on.
    pub fn map_center(&self, user_location: &GeoPoint) -> GeoPoint {
        self.stops
            .first()
            .map(Place::location)
            .unwrap_or(*user_location)
    }

    /// Walking length of the path through all stops, in meters.
    pub fn total_length_meters(&self, user_location: &GeoPoint) -> f64 {
        self.coordinates(user_location)
            .windows(2)
            .map(|leg| leg[0].distance_to(&leg[1]))
            .sum()
    }

    /// Deep link opening the route in the external navigator.
    ///
    /// Returns `None` for an empty route.
    pub fn navigator_url(&self, user_location: &GeoPoint) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let points = self
            .coordinates(user_location)
            .iter()
            .map(GeoPoint::to_string)
            .collect::<Vec<_>>()
            .join("~");

        Some(format!("{}?rtext={}&rtt=mt", NAVIGATOR_BASE_URL, points))
    }
}

impl<'de> Deserialize<'de> for Route {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let stops = Vec::<Place>::deserialize(deserializer)?;
        Ok(Self::from_stops(stops))
    }
}
