//! Integration tests for recovering from missing or corrupt stored state

use chrono::NaiveDate;
use cityscout::geo::DEFAULT_USER_LOCATION;
use cityscout::places::seed::default_catalog;
use cityscout::storage::{self, BlobStore, FileBlobStore, MemoryBlobStore};
use cityscout::ExplorerSession;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn test_corrupt_files_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("places.json"), "not json at all").unwrap();
    std::fs::write(dir.path().join("currentRoute.json"), "{\"oops\": true}").unwrap();
    std::fs::write(dir.path().join("activeDays.json"), "[\"yesterday\"]").unwrap();

    let store = FileBlobStore::open(dir.path()).unwrap();
    let session = ExplorerSession::load(store, DEFAULT_USER_LOCATION, today());

    assert_eq!(session.catalog(), &default_catalog());
    assert!(session.route().is_empty());
    assert_eq!(session.stats().days_active, 1);
}

#[test]
fn test_stored_catalog_is_preferred_over_seed() {
    let json = r#"[
        {"id":"x1","name":"Тестовое кафе","category":"Кафе","address":"","hours":"",
         "rating":4.0,"priceLevel":"budget","distance":"200 м","latitude":58.6,"longitude":49.6,
         "isVisited":true},
        {"id":"x2","name":"Тестовый парк","category":"Парк","address":"","hours":"",
         "rating":4.0,"priceLevel":"budget","distance":"2 км","latitude":58.6,"longitude":49.6,
         "isFavorite":true}
    ]"#;
    let store = MemoryBlobStore::with_blob(storage::PLACES_BLOB, json);
    let session = ExplorerSession::load(&store, DEFAULT_USER_LOCATION, today());

    assert_eq!(session.catalog().len(), 2);
    let stats = session.stats();
    assert_eq!(stats.visited_places, 1);
    assert_eq!(stats.favorite_places, 1);
    assert_eq!(stats.restaurants_visited, 1);
    assert_eq!(stats.distance_walked, 200.0);
}

#[test]
fn test_route_restored_with_stale_stop() {
    let mut catalog_place = default_catalog().get("5").unwrap().clone();
    catalog_place.id = "retired".to_string();
    let route_json = serde_json::to_string(&vec![catalog_place]).unwrap();

    let store = MemoryBlobStore::with_blob(storage::ROUTE_BLOB, &route_json);
    let session = ExplorerSession::load(&store, DEFAULT_USER_LOCATION, today());
    assert_eq!(session.route().len(), 1);
    assert_eq!(session.route().stops()[0].id, "retired");
}

/// Store whose writes always fail.
struct ReadOnlyStore;

impl BlobStore for ReadOnlyStore {
    fn read(&self, _name: &str) -> Result<Option<String>, storage::StorageError> {
        Ok(None)
    }

    fn write(&self, _name: &str, _contents: &str) -> Result<(), storage::StorageError> {
        Err(storage::StorageError::InvalidName("read-only".to_string()))
    }
}

#[test]
fn test_failed_writes_do_not_block_actions() {
    let mut session = ExplorerSession::load(ReadOnlyStore, DEFAULT_USER_LOCATION, today());
    session.mark_visited("1");
    session.add_to_route("1");
    assert_eq!(session.stats().visited_places, 1);
    assert_eq!(session.route().len(), 1);
}
