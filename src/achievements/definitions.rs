//! Achievement definitions.

use super::{AchievementCategory, AchievementDefinition, StatMetric};

/// Get all achievement definitions, in display order
pub fn all_achievements() -> &'static [AchievementDefinition] {
    &ACHIEVEMENTS
}

static ACHIEVEMENTS: [AchievementDefinition; 7] = [
    AchievementDefinition {
        id: "1",
        title: "Первооткрыватель",
        description: "Посетите 5 новых мест",
        category: AchievementCategory::Exploration,
        reward: Some("+50 очков опыта"),
        metric: StatMetric::VisitedPlaces,
        max_progress: 5.0,
    },
    AchievementDefinition {
        id: "2",
        title: "Путешественник",
        description: "Пройдите 50 км по городу",
        category: AchievementCategory::Activity,
        reward: Some("Специальный бейдж"),
        metric: StatMetric::DistanceWalkedKm,
        max_progress: 50.0,
    },
    AchievementDefinition {
        id: "3",
        title: "Гурман",
        description: "Посетите 10 кафе и ресторанов",
        category: AchievementCategory::Specialization,
        reward: Some("Скидки в ресторанах"),
        metric: StatMetric::RestaurantsVisited,
        max_progress: 10.0,
    },
    AchievementDefinition {
        id: "4",
        title: "Исследователь",
        description: "Посетите места разных категорий (кафе, парки, театры и т.д.)",
        category: AchievementCategory::Exploration,
        reward: Some("Эксклюзивные маршруты"),
        metric: StatMetric::CategoriesExplored,
        max_progress: 5.0,
    },
    AchievementDefinition {
        id: "5",
        title: "Социальный",
        description: "Добавьте 15 мест в избранное",
        category: AchievementCategory::Social,
        reward: Some("Персональные рекомендации"),
        metric: StatMetric::FavoritePlaces,
        max_progress: 15.0,
    },
    AchievementDefinition {
        id: "6",
        title: "Активист",
        description: "Используйте приложение 30 дней подряд",
        category: AchievementCategory::Activity,
        reward: Some("Премиум функции"),
        metric: StatMetric::DaysActive,
        max_progress: 30.0,
    },
    AchievementDefinition {
        id: "7",
        title: "Коллекционер",
        description: "Оставьте комментарии ко всем коллекциям",
        category: AchievementCategory::Collections,
        reward: Some("Специальный титул"),
        metric: StatMetric::CollectionComments,
        max_progress: 10.0,
    },
];
