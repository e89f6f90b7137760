//! Unit tests for the achievement engine

use cityscout::achievements::definitions::all_achievements;
use cityscout::achievements::{evaluate, newly_unlocked, StatMetric};
use cityscout::{AchievementBoard, UserStats};

#[test]
fn test_seven_definitions_in_order() {
    let metrics: Vec<_> = all_achievements().iter().map(|a| a.metric).collect();
    assert_eq!(
        metrics,
        vec![
            StatMetric::VisitedPlaces,
            StatMetric::DistanceWalkedKm,
            StatMetric::RestaurantsVisited,
            StatMetric::CategoriesExplored,
            StatMetric::FavoritePlaces,
            StatMetric::DaysActive,
            StatMetric::CollectionComments,
        ]
    );
    let thresholds: Vec<_> = all_achievements().iter().map(|a| a.max_progress).collect();
    assert_eq!(thresholds, vec![5.0, 50.0, 10.0, 5.0, 15.0, 30.0, 10.0]);
}

#[test]
fn test_visit_five_unlocks_exactly_one() {
    let stats = UserStats {
        visited_places: 5,
        distance_walked: 10.0,
        restaurants_visited: 0,
        categories_explored: 1,
        favorite_places: 0,
        days_active: 0,
        collection_comments: 0,
        ..Default::default()
    };
    let unlocked: Vec<_> = evaluate(&stats)
        .into_iter()
        .filter(|a| a.is_unlocked)
        .map(|a| a.id())
        .collect();
    assert_eq!(unlocked, vec!["1"]);
}

#[test]
fn test_all_unlocked_board() {
    let stats = UserStats {
        visited_places: 20,
        distance_walked: 60_000.0,
        restaurants_visited: 10,
        categories_explored: 6,
        favorite_places: 15,
        days_active: 30,
        collection_comments: 10,
        ..Default::default()
    };
    let board = AchievementBoard::from_stats(&stats);
    assert_eq!(board.unlocked_count(), 7);
    assert_eq!(board.total_points(), 700);
    assert_eq!(board.overall_progress_percent(), 100);
    assert!(board.upcoming_goals().is_empty());
}

#[test]
fn test_empty_stats_board() {
    let board = AchievementBoard::from_stats(&UserStats::default());
    assert_eq!(board.unlocked_count(), 0);
    assert_eq!(board.overall_progress_percent(), 0);
    assert!(board.upcoming_goals().is_empty());
}

#[test]
fn test_upcoming_goals_top_three() {
    let stats = UserStats {
        visited_places: 4,        // 0.8
        distance_walked: 45_000.0, // 0.9
        restaurants_visited: 1,   // 0.1
        categories_explored: 1,   // 0.2
        favorite_places: 3,       // 0.2
        ..Default::default()
    };
    let board = AchievementBoard::from_stats(&stats);
    let ids: Vec<_> = board.upcoming_goals().iter().map(|a| a.id()).collect();
    assert_eq!(ids, vec!["2", "1", "4"]);
}

#[test]
fn test_newly_unlocked_reports_transitions_only() {
    let before = UserStats {
        favorite_places: 14,
        days_active: 30,
        ..Default::default()
    };
    let after = UserStats {
        favorite_places: 15,
        ..before.clone()
    };
    let ids: Vec<_> = newly_unlocked(&before, &after).iter().map(|a| a.id()).collect();
    assert_eq!(ids, vec!["5"]);
}
