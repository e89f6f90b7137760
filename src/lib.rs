//! CityScout - place discovery and trip planning core
//!
//! Filters a catalog of points of interest, builds an ordered visiting route,
//! keeps cumulative statistics of visits and favorites, and derives progress
//! achievements from them. State is persisted as named JSON blobs.

pub mod achievements;
pub mod collections;
pub mod filters;
pub mod geo;
pub mod places;
pub mod route;
pub mod session;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use achievements::{Achievement, AchievementBoard};
pub use filters::{filter_places, FilterSelection, PlaceQuery};
pub use geo::{haversine_distance, parse_distance_label, GeoPoint};
pub use places::{Place, PlaceCatalog, PriceLevel};
pub use route::Route;
pub use session::{ActionKind, ActionOutcome, ExplorerSession};
pub use stats::{compute_stats, UserStats};
pub use storage::config::AppConfig;
