//! Integration tests for session state surviving a reload

use chrono::NaiveDate;
use cityscout::filters::RadiusBucket;
use cityscout::geo::DEFAULT_USER_LOCATION;
use cityscout::route::View;
use cityscout::storage::{FileBlobStore, MemoryBlobStore};
use cityscout::{ActionKind, ExplorerSession, FilterSelection};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

#[test]
fn test_state_survives_reload_from_files() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileBlobStore::open(dir.path()).unwrap();
        let mut session = ExplorerSession::load(store, DEFAULT_USER_LOCATION, day(18));
        session.mark_visited("2");
        session.mark_visited("4");
        session.toggle_favorite("7");
        session.add_to_route("7");
        session.add_to_route("3");
        session.add_collection_comment("6", "Вкусно");
    }

    let store = FileBlobStore::open(dir.path()).unwrap();
    let session = ExplorerSession::load(store, DEFAULT_USER_LOCATION, day(19));

    let stats = session.stats();
    assert_eq!(stats.visited_places, 2);
    assert_eq!(stats.restaurants_visited, 2);
    assert_eq!(stats.favorite_places, 1);
    assert_eq!(stats.collection_comments, 1);
    assert_eq!(stats.days_active, 2);

    let ids: Vec<_> = session.route().stops().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["7", "3"]);
    assert!(session.route().stops()[0].is_favorite);
    assert_eq!(session.comments().get("6"), Some("Вкусно"));
}

#[test]
fn test_blob_files_are_named_after_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileBlobStore::open(dir.path()).unwrap();
    let mut session = ExplorerSession::load(store, DEFAULT_USER_LOCATION, day(19));
    session.toggle_favorite("1");
    session.add_to_route("1");

    assert!(dir.path().join("places.json").exists());
    assert!(dir.path().join("currentRoute.json").exists());
    assert!(dir.path().join("activeDays.json").exists());

    let places = std::fs::read_to_string(dir.path().join("places.json")).unwrap();
    assert!(places.contains("\"isFavorite\":true"));
}

#[test]
fn test_explore_flow() {
    let mut session = ExplorerSession::load(MemoryBlobStore::new(), DEFAULT_USER_LOCATION, day(19));

    let mut selection = FilterSelection::default();
    selection.radius.insert(RadiusBucket::Meters500);
    session.set_selection(selection);
    let near: Vec<_> = session.visible_places().iter().map(|p| p.id.clone()).collect();
    assert_eq!(near, vec!["2", "7", "13"]);

    session.toggle_favorite("13");
    session.set_favorites_only(true);
    assert_eq!(session.visible_places().len(), 1);

    session.clear_filters();
    session.set_favorites_only(false);
    assert_eq!(session.visible_places().len(), session.catalog().len());

    let outcome = session.navigate_to("13");
    assert_eq!(outcome.kind, ActionKind::NavigatingTo);
    assert_eq!(session.view(), View::Map);

    let plan = session.start_navigation().unwrap();
    assert!(plan.url.starts_with("https://yandex.ru/maps/?rtext=58.6035,49.668~"));
    assert!(plan.length_meters > 0.0);
}

#[test]
fn test_comment_edit_counts_once_across_reload() {
    let store = MemoryBlobStore::new();
    {
        let mut session = ExplorerSession::load(&store, DEFAULT_USER_LOCATION, day(19));
        assert_eq!(session.add_collection_comment("3", "Первый").kind, ActionKind::CommentSaved);
        session.add_collection_comment("3", "Исправленный");
        assert_eq!(session.stats().collection_comments, 1);
    }

    let mut session = ExplorerSession::load(&store, DEFAULT_USER_LOCATION, day(19));
    assert_eq!(session.stats().collection_comments, 1);
    session.add_collection_comment("3", "Ещё раз");
    assert_eq!(session.stats().collection_comments, 1);
}
