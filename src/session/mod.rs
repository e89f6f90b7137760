//! Explorer session: the single owner of mutable client state.
//!
//! The session reacts to user actions by mutating the catalog and route
//! snapshots, applying the incremental statistics rules, persisting whatever
//! changed, and returning an [`ActionOutcome`] the notification layer can turn
//! into a message.

use chrono::NaiveDate;
use serde::Serialize;

use crate::achievements::{self, Achievement, AchievementBoard};
use crate::collections::{self, CollectionComments};
use crate::filters::{self, FilterSelection, PlaceQuery};
use crate::geo::GeoPoint;
use crate::places::{Place, PlaceCatalog};
use crate::route::{Route, RouteChange, View};
use crate::stats::{compute_stats, ActivityLog, UserStats};
use crate::storage::{self, BlobStore};

/// What a user action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Place bookmarked
    FavoriteAdded,
    /// Bookmark removed
    FavoriteRemoved,
    /// Place marked visited for the first time
    MarkedVisited,
    /// Place appended to the route
    AddedToRoute,
    /// Place was already on the route
    AlreadyInRoute,
    /// Place removed from the route
    RemovedFromRoute,
    /// Route emptied
    RouteCleared,
    /// Place put on the route and map view requested
    NavigatingTo,
    /// Collection comment saved
    CommentSaved,
    /// Nothing changed (unknown id, repeated visit, blank comment)
    Ignored,
}

/// Result of a user action, for the notification collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    /// What happened
    pub kind: ActionKind,
    /// Name of the affected place, if any
    pub place_name: Option<String>,
    /// Achievements unlocked by this action
    pub unlocked: Vec<Achievement>,
}

impl ActionOutcome {
    /// Whether the action changed any state.
    pub fn changed(&self) -> bool {
        !matches!(self.kind, ActionKind::Ignored | ActionKind::AlreadyInRoute)
    }
}

/// Data handed to the external navigator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationPlan {
    /// Deep link opening the route
    pub url: String,
    /// Number of stops on the route
    pub stops: usize,
    /// Path coordinates, user location first
    pub coordinates: Vec<GeoPoint>,
    /// Walking length through all stops, in meters
    pub length_meters: f64,
}

/// Source of the current calendar day.
pub type Clock = Box<dyn Fn() -> NaiveDate>;

/// Mutable client state backed by a blob store.
pub struct ExplorerSession<S: BlobStore> {
    store: S,
    clock: Clock,
    user_location: GeoPoint,
    catalog: PlaceCatalog,
    route: Route,
    comments: CollectionComments,
    activity: ActivityLog,
    stats: UserStats,
    query: PlaceQuery,
    view: View,
}

impl<S: BlobStore> ExplorerSession<S> {
    /// Load state from the store with the calendar fixed at `today`.
    pub fn load(store: S, user_location: GeoPoint, today: NaiveDate) -> Self {
        Self::load_with_clock(store, user_location, Box::new(move || today))
    }

    /// Load state from the store; every action records the clock's day as active.
    pub fn load_with_clock(store: S, user_location: GeoPoint, clock: Clock) -> Self {
        let today = clock();
        let catalog = storage::load_places(&store);
        let route = storage::load_route(&store).refreshed(&catalog);
        let comments = storage::load_comments(&store);
        let activity = storage::load_activity(&store);

        let mut session = Self {
            store,
            clock,
            user_location,
            stats: UserStats::default(),
            catalog,
            route,
            comments,
            activity,
            query: PlaceQuery::default(),
            view: View::default(),
        };
        session.record_activity(today);
        session.stats = session.full_stats(today);

        tracing::info!(
            places = session.catalog.len(),
            route_stops = session.route.len(),
            visited = session.stats.visited_places,
            "Loaded explorer session"
        );
        session
    }

    /// Record activity on a day and refresh the active-day streak.
    pub fn record_activity(&mut self, today: NaiveDate) {
        if self.activity.record(today) {
            self.persist(storage::ACTIVITY_BLOB, &self.activity);
        }
        self.stats.days_active = self.activity.streak_ending(today);
    }

    /// Current catalog.
    pub fn catalog(&self) -> &PlaceCatalog {
        &self.catalog
    }

    /// Current route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Current statistics.
    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    /// Collection comments.
    pub fn comments(&self) -> &CollectionComments {
        &self.comments
    }

    /// Reference location.
    pub fn user_location(&self) -> GeoPoint {
        self.user_location
    }

    /// Active view.
    pub fn view(&self) -> View {
        self.view
    }

    /// Switch the active view.
    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Current query.
    pub fn query(&self) -> &PlaceQuery {
        &self.query
    }

    /// Replace the filter chips.
    pub fn set_selection(&mut self, selection: FilterSelection) {
        self.query.selection = selection;
    }

    /// Toggle the favorites-only switch.
    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.query.favorites_only = favorites_only;
    }

    /// Search by name and switch to the explore view.
    pub fn search(&mut self, text: impl Into<String>) {
        self.query.search_query = text.into();
        self.view = View::Explore;
    }

    /// Reset filter chips.
    pub fn clear_filters(&mut self) {
        self.query.selection.clear();
    }

    /// Places matching the current query, in catalog order.
    pub fn visible_places(&self) -> Vec<&Place> {
        filters::filter_places(&self.catalog, &self.query)
    }

    /// Achievement board for the current statistics.
    pub fn achievements(&self) -> AchievementBoard {
        AchievementBoard::from_stats(&self.stats)
    }

    /// Toggle a place's favorite flag.
    pub fn toggle_favorite(&mut self, id: &str) -> ActionOutcome {
        let before = self.touch();
        let (catalog, change) = self.catalog.toggle_favorite(id);
        let Some(change) = change else {
            return self.outcome(ActionKind::Ignored, None, &before);
        };

        self.stats.apply_favorite_toggle(&change);
        self.commit_catalog(catalog, id);

        let kind = if change.favorite_added() {
            ActionKind::FavoriteAdded
        } else {
            ActionKind::FavoriteRemoved
        };
        tracing::debug!(id, ?kind, favorites = self.stats.favorite_places, "Toggled favorite");
        self.outcome(kind, Some(change.after.name), &before)
    }

    /// Mark a place visited; repeated visits are ignored.
    pub fn mark_visited(&mut self, id: &str) -> ActionOutcome {
        let before = self.touch();
        let (catalog, change) = self.catalog.mark_visited(id);
        let Some(change) = change else {
            return self.outcome(ActionKind::Ignored, None, &before);
        };

        self.stats.apply_visit(&change, &catalog);
        self.stats.completed_collections = collections::completed_count(&catalog) as u32;
        self.commit_catalog(catalog, id);

        tracing::debug!(id, visited = self.stats.visited_places, "Marked place visited");
        self.outcome(ActionKind::MarkedVisited, Some(change.after.name), &before)
    }

    /// Append a catalog place to the route.
    pub fn add_to_route(&mut self, id: &str) -> ActionOutcome {
        let before = self.touch();
        let Some(place) = self.catalog.get(id).cloned() else {
            return self.outcome(ActionKind::Ignored, None, &before);
        };
        let name = place.name.clone();

        let (route, change) = self.route.add(place);
        let kind = match change {
            RouteChange::Added => {
                self.commit_route(route);
                ActionKind::AddedToRoute
            }
            RouteChange::AlreadyPresent => ActionKind::AlreadyInRoute,
        };
        self.outcome(kind, Some(name), &before)
    }

    /// Remove a place from the route.
    pub fn remove_from_route(&mut self, id: &str) -> ActionOutcome {
        let before = self.touch();
        let (route, removed) = self.route.remove(id);
        let Some(removed) = removed else {
            return self.outcome(ActionKind::Ignored, None, &before);
        };

        self.commit_route(route);
        self.outcome(ActionKind::RemovedFromRoute, Some(removed.name), &before)
    }

    /// Empty the route.
    pub fn clear_route(&mut self) -> ActionOutcome {
        let before = self.touch();
        let route = self.route.clear();
        self.commit_route(route);
        self.outcome(ActionKind::RouteCleared, None, &before)
    }

    /// Put a place on the route and switch to the map view.
    pub fn navigate_to(&mut self, id: &str) -> ActionOutcome {
        let before = self.touch();
        let Some(place) = self.catalog.get(id).cloned() else {
            return self.outcome(ActionKind::Ignored, None, &before);
        };
        let name = place.name.clone();

        let (route, view) = self.route.navigate_to(place);
        if route != self.route {
            self.commit_route(route);
        }
        self.view = view;
        self.outcome(ActionKind::NavigatingTo, Some(name), &before)
    }

    /// Save a comment on a collection.
    ///
    /// Only the first comment on a collection counts towards statistics.
    pub fn add_collection_comment(&mut self, collection_id: &str, comment: &str) -> ActionOutcome {
        let before = self.touch();
        if collections::find_collection(collection_id).is_none() {
            tracing::debug!(collection_id, "Ignoring comment for unknown collection");
            return self.outcome(ActionKind::Ignored, None, &before);
        }
        if comment.trim().is_empty() {
            return self.outcome(ActionKind::Ignored, None, &before);
        }

        if self.comments.set(collection_id, comment) {
            self.stats.apply_new_comment();
        }
        self.persist(storage::COMMENTS_BLOB, &self.comments);

        self.outcome(ActionKind::CommentSaved, None, &before)
    }

    /// Navigation plan for the current route; `None` when the route is empty.
    pub fn start_navigation(&self) -> Option<NavigationPlan> {
        let url = self.route.navigator_url(&self.user_location)?;
        tracing::info!(stops = self.route.len(), "Starting route navigation");

        Some(NavigationPlan {
            url,
            stops: self.route.len(),
            coordinates: self.route.coordinates(&self.user_location),
            length_meters: self.route.total_length_meters(&self.user_location),
        })
    }

    /// Statistics recomputed from scratch.
    pub fn full_stats(&self, today: NaiveDate) -> UserStats {
        let mut stats = compute_stats(&self.catalog)
            .with_collection_comments(self.comments.annotated_count() as u32)
            .with_days_active(self.activity.streak_ending(today));
        stats.completed_collections = collections::completed_count(&self.catalog) as u32;
        stats
    }

    /// Record the clock's day and return the stats as they were before it.
    fn touch(&mut self) -> UserStats {
        let before = self.stats.clone();
        let today = (self.clock)();
        self.record_activity(today);
        before
    }

    fn commit_catalog(&mut self, catalog: PlaceCatalog, changed_id: &str) {
        self.catalog = catalog;
        self.persist(storage::PLACES_BLOB, &self.catalog);

        if self.route.contains(changed_id) {
            let route = self.route.refreshed(&self.catalog);
            self.commit_route(route);
        }
    }

    fn commit_route(&mut self, route: Route) {
        self.route = route;
        self.persist(storage::ROUTE_BLOB, &self.route);
    }

    fn outcome(&self, kind: ActionKind, place_name: Option<String>, before: &UserStats) -> ActionOutcome {
        let unlocked = achievements::newly_unlocked(before, &self.stats);
        for achievement in &unlocked {
            tracing::info!(achievement = achievement.definition.title, "Achievement unlocked");
        }

        ActionOutcome {
            kind,
            place_name,
            unlocked,
        }
    }

    fn persist<T: Serialize>(&self, name: &str, value: &T) {
        if let Err(e) = storage::save(&self.store, name, value) {
            tracing::warn!(blob = name, error = %e, "Failed to persist state");
        }
    }
}
