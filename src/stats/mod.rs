//! Cumulative user statistics.
//!
//! Statistics are computed two ways: [`compute_stats`] recomputes everything
//! from the catalog (startup and recovery), while the `apply_*` methods update
//! a snapshot from the before/after state of a single mutated place. Both paths
//! must agree for every sequence of mutations.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::places::{PlaceCatalog, PlaceChange};

/// Snapshot of the user's cumulative statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Number of visited places
    pub visited_places: u32,
    /// Sum of distance labels of visited places, in meters
    pub distance_walked: f64,
    /// Number of bookmarked places
    pub favorite_places: u32,
    /// Number of annotated collections
    pub collection_comments: u32,
    /// Current streak of consecutive active days
    pub days_active: u32,
    /// Collections whose places have all been visited
    pub completed_collections: u32,
    /// Distinct categories among visited places
    pub categories_explored: u32,
    /// Visited restaurants and cafes
    pub restaurants_visited: u32,
}

impl UserStats {
    /// Apply a successful visit.
    ///
    /// `catalog` must already contain the visited place, since the explored
    /// category count is recomputed over the updated visited set.
    pub fn apply_visit(&mut self, change: &PlaceChange, catalog: &PlaceCatalog) {
        if !change.newly_visited() {
            return;
        }

        let place = &change.after;
        self.visited_places += 1;
        self.distance_walked += place.distance_meters();
        if place.is_dining() {
            self.restaurants_visited += 1;
        }
        self.categories_explored = visited_category_count(catalog);
    }

    /// Apply a favorite toggle.
    pub fn apply_favorite_toggle(&mut self, change: &PlaceChange) {
        match (change.before.is_favorite, change.after.is_favorite) {
            (false, true) => self.favorite_places += 1,
            (true, false) => self.favorite_places = self.favorite_places.saturating_sub(1),
            _ => {}
        }
    }

    /// Count a collection that received its first comment.
    pub fn apply_new_comment(&mut self) {
        self.collection_comments += 1;
    }

    /// Replace the active-day streak.
    pub fn with_days_active(mut self, days_active: u32) -> Self {
        self.days_active = days_active;
        self
    }

    /// Replace the annotated collection count.
    pub fn with_collection_comments(mut self, collection_comments: u32) -> Self {
        self.collection_comments = collection_comments;
        self
    }

    /// Distance walked in kilometers.
    pub fn distance_walked_km(&self) -> f64 {
        self.distance_walked / 1000.0
    }
}

/// Recompute statistics from the catalog.
///
/// Counters that do not derive from the catalog (comments, active days,
/// completed collections) start at zero.
pub fn compute_stats(catalog: &PlaceCatalog) -> UserStats {
    let mut stats = UserStats {
        favorite_places: catalog.favorites().count() as u32,
        categories_explored: visited_category_count(catalog),
        ..Default::default()
    };

    for place in catalog.visited() {
        stats.visited_places += 1;
        stats.distance_walked += place.distance_meters();
        if place.is_dining() {
            stats.restaurants_visited += 1;
        }
    }

    stats
}

fn visited_category_count(catalog: &PlaceCatalog) -> u32 {
    catalog
        .visited()
        .map(|p| p.category.as_str())
        .collect::<HashSet<_>>()
        .len() as u32
}

/// Calendar days on which the user was active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog {
    days: BTreeSet<NaiveDate>,
}

impl ActivityLog {
    /// Record activity on a day; returns `true` if the day is new.
    pub fn record(&mut self, day: NaiveDate) -> bool {
        self.days.insert(day)
    }

    /// Number of distinct active days.
    pub fn total_days(&self) -> usize {
        self.days.len()
    }

    /// Length of the run of consecutive active days ending on `today`.
    pub fn streak_ending(&self, today: NaiveDate) -> u32 {
        let mut streak = 0;
        let mut day = today;
        while self.days.contains(&day) {
            streak += 1;
            day -= Duration::days(1);
        }
        streak
    }
}
