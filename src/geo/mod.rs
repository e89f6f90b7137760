//! Geographic helpers: great-circle distance and distance label parsing.
//!
//! Place records carry their distance from the reference location as a
//! human-readable label ("650 м", "1.2 км"); filtering and statistics need
//! that label as a number of meters.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Reference location used when no real geolocation is available (Kirov city centre).
pub const DEFAULT_USER_LOCATION: GeoPoint = GeoPoint {
    latitude: 58.6035,
    longitude: 49.6680,
};

/// Number followed by a meter or kilometer unit, e.g. "650 м" or "1.2км".
static DISTANCE_LABEL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*(км|м)").ok());

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another point in meters.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

impl Default for GeoPoint {
    fn default() -> Self {
        DEFAULT_USER_LOCATION
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Calculate the distance between two coordinates in meters (Haversine formula)
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Parse a distance label such as "650 м" or "1.2 км" into meters.
///
/// Labels without a recognisable number and unit yield `0.0`.
pub fn parse_distance_label(text: &str) -> f64 {
    let Some(pattern) = DISTANCE_LABEL_PATTERN.as_ref() else {
        return 0.0;
    };
    let Some(caps) = pattern.captures(text) else {
        return 0.0;
    };

    let value: f64 = match caps.get(1).map(|m| m.as_str().parse()) {
        Some(Ok(v)) => v,
        _ => return 0.0,
    };

    match caps.get(2).map(|m| m.as_str()) {
        Some("км") => value * 1000.0,
        _ => value,
    }
}

/// Format a distance in meters the way catalog labels are written.
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{:.0} м", meters)
    } else {
        format!("{:.1} км", meters / 1000.0)
    }
}
