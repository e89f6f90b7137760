//! CityScout - session summary
//!
//! Loads the stored session from the data directory and prints what the
//! client would show: visible places, the current route, statistics and the
//! achievement board.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cityscout::geo::format_distance;
use cityscout::storage::{config, FileBlobStore};
use cityscout::ExplorerSession;

fn main() -> anyhow::Result<()> {
    let config = config::load_config().context("loading configuration")?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.default_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CityScout v{}", env!("CARGO_PKG_VERSION"));

    let store = FileBlobStore::open(&config.data_dir)
        .with_context(|| format!("opening data directory {}", config.data_dir.display()))?;
    let session = ExplorerSession::load_with_clock(
        store,
        config.user_location(),
        Box::new(|| chrono::Local::now().date_naive()),
    );

    let visible = session.visible_places();
    println!("Найдено мест: {}", visible.len());
    for place in &visible {
        let marks = format!(
            "{}{}",
            if place.is_favorite { "♥" } else { " " },
            if place.is_visited { "✓" } else { " " }
        );
        println!("  {} {:<32} {:<16} {}", marks, place.name, place.category, place.distance);
    }

    let route = session.route();
    println!();
    println!("Маршрут: {} мест", route.len());
    for (index, stop) in route.stops().iter().enumerate() {
        println!("  {}. {}", index + 1, stop.name);
    }
    if let Some(plan) = session.start_navigation() {
        println!("  Длина: {}", format_distance(plan.length_meters));
        println!("  {}", plan.url);
    }

    let stats = session.stats();
    println!();
    println!(
        "Посещено: {}  Избранное: {}  Категорий: {}  Пройдено: {}  Дней подряд: {}",
        stats.visited_places,
        stats.favorite_places,
        stats.categories_explored,
        format_distance(stats.distance_walked),
        stats.days_active
    );

    let board = session.achievements();
    println!();
    println!(
        "Достижения: {}/{} ({}%), очков: {}",
        board.unlocked_count(),
        board.achievements().len(),
        board.overall_progress_percent(),
        board.total_points()
    );
    for goal in board.upcoming_goals() {
        println!("  → {} ({}%)", goal.definition.title, goal.percentage());
    }

    Ok(())
}
