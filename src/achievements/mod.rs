//! Achievement engine.
//!
//! Achievements are not stored: each one binds a statistic to a threshold and
//! is evaluated against the current [`UserStats`] whenever it is displayed.

pub mod definitions;

use serde::Serialize;

use crate::stats::UserStats;

/// Points awarded per unlocked achievement.
pub const POINTS_PER_ACHIEVEMENT: u32 = 100;

/// Number of upcoming goals shown on the board.
pub const UPCOMING_GOALS_LIMIT: usize = 3;

/// Achievement category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AchievementCategory {
    /// Visiting new places and categories
    Exploration,
    /// Walking and regular use
    Activity,
    /// Dining
    Specialization,
    /// Favorites
    Social,
    /// Collection comments
    Collections,
}

impl AchievementCategory {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Exploration => "Исследование",
            Self::Activity => "Активность",
            Self::Specialization => "Специализация",
            Self::Social => "Социальное",
            Self::Collections => "Коллекции",
        }
    }
}

/// Statistic an achievement tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatMetric {
    VisitedPlaces,
    /// Distance walked, converted from meters to kilometers
    DistanceWalkedKm,
    RestaurantsVisited,
    CategoriesExplored,
    FavoritePlaces,
    DaysActive,
    CollectionComments,
}

impl StatMetric {
    /// Read the metric from a stats snapshot.
    pub fn read(&self, stats: &UserStats) -> f64 {
        match self {
            Self::VisitedPlaces => stats.visited_places as f64,
            Self::DistanceWalkedKm => stats.distance_walked_km(),
            Self::RestaurantsVisited => stats.restaurants_visited as f64,
            Self::CategoriesExplored => stats.categories_explored as f64,
            Self::FavoritePlaces => stats.favorite_places as f64,
            Self::DaysActive => stats.days_active as f64,
            Self::CollectionComments => stats.collection_comments as f64,
        }
    }
}

/// Static achievement definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementDefinition {
    /// Unique identifier
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// Description of the goal
    pub description: &'static str,
    /// Category
    pub category: AchievementCategory,
    /// Reward text
    pub reward: Option<&'static str>,
    /// Tracked statistic
    pub metric: StatMetric,
    /// Threshold for unlocking
    pub max_progress: f64,
}

/// Achievement evaluated against a stats snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    /// Definition
    pub definition: &'static AchievementDefinition,
    /// Current value of the tracked statistic
    pub progress: f64,
    /// Whether the threshold is reached
    pub is_unlocked: bool,
}

impl Achievement {
    /// Evaluate a definition against stats.
    pub fn evaluate(definition: &'static AchievementDefinition, stats: &UserStats) -> Self {
        let progress = definition.metric.read(stats);
        Self {
            definition,
            progress,
            is_unlocked: progress >= definition.max_progress,
        }
    }

    /// Identifier of the definition.
    pub fn id(&self) -> &'static str {
        self.definition.id
    }

    /// Progress as a fraction of the threshold, capped at 1.0.
    pub fn progress_ratio(&self) -> f64 {
        (self.progress / self.definition.max_progress).min(1.0)
    }

    /// Progress percentage (0..100), rounded.
    pub fn percentage(&self) -> u32 {
        (self.progress_ratio() * 100.0).round() as u32
    }
}

/// Evaluate every definition against stats, in definition order.
pub fn evaluate(stats: &UserStats) -> Vec<Achievement> {
    definitions::all_achievements()
        .iter()
        .map(|d| Achievement::evaluate(d, stats))
        .collect()
}

/// Achievements unlocked by moving from one snapshot to the next.
pub fn newly_unlocked(before: &UserStats, after: &UserStats) -> Vec<Achievement> {
    evaluate(before)
        .into_iter()
        .zip(evaluate(after))
        .filter(|(old, new)| !old.is_unlocked && new.is_unlocked)
        .map(|(_, new)| new)
        .collect()
}

/// Achievement board with display aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementBoard {
    achievements: Vec<Achievement>,
}

impl AchievementBoard {
    /// Evaluate the board for a stats snapshot.
    pub fn from_stats(stats: &UserStats) -> Self {
        Self {
            achievements: evaluate(stats),
        }
    }

    /// All achievements in definition order.
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Number of unlocked achievements.
    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.is_unlocked).count()
    }

    /// Number of achievements still locked.
    pub fn in_progress_count(&self) -> usize {
        self.achievements.len() - self.unlocked_count()
    }

    /// Points earned.
    pub fn total_points(&self) -> u32 {
        self.unlocked_count() as u32 * POINTS_PER_ACHIEVEMENT
    }

    /// Share of unlocked achievements as a rounded percentage.
    pub fn overall_progress_percent(&self) -> u32 {
        if self.achievements.is_empty() {
            return 0;
        }
        (self.unlocked_count() as f64 / self.achievements.len() as f64 * 100.0).round() as u32
    }

    /// Started but locked achievements, closest to completion first.
    ///
    /// Ties keep definition order.
    pub fn upcoming_goals(&self) -> Vec<&Achievement> {
        let mut upcoming: Vec<&Achievement> = self
            .achievements
            .iter()
            .filter(|a| a.progress > 0.0 && !a.is_unlocked)
            .collect();
        // sort_by is stable
        upcoming.sort_by(|a, b| b.progress_ratio().total_cmp(&a.progress_ratio()));
        upcoming.truncate(UPCOMING_GOALS_LIMIT);
        upcoming
    }
}
