//! Unit tests for the filter engine

use cityscout::filters::{CategoryKey, FilterError, RadiusBucket};
use cityscout::places::seed::default_catalog;
use cityscout::{filter_places, FilterSelection, Place, PlaceCatalog, PlaceQuery, PriceLevel};

fn place(id: &str, category: &str, price_level: PriceLevel, distance: &str) -> Place {
    Place {
        id: id.to_string(),
        name: format!("Место {}", id),
        category: category.to_string(),
        address: String::new(),
        hours: String::new(),
        rating: 4.0,
        price_level,
        distance: distance.to_string(),
        image: String::new(),
        latitude: 58.6,
        longitude: 49.6,
        user_comment: None,
        is_visited: false,
        is_favorite: false,
    }
}

fn three_distances() -> PlaceCatalog {
    PlaceCatalog::new(vec![
        place("a", "Кафе", PriceLevel::Budget, "400 м"),
        place("b", "Парк", PriceLevel::Medium, "800 м"),
        place("c", "Музей", PriceLevel::Premium, "6 км"),
    ])
}

fn ids(places: &[&Place]) -> Vec<String> {
    places.iter().map(|p| p.id.clone()).collect()
}

fn query(selection: FilterSelection) -> PlaceQuery {
    PlaceQuery {
        selection,
        ..Default::default()
    }
}

#[test]
fn test_radius_500m_only_nearest() {
    let catalog = three_distances();
    let selection = FilterSelection::from_keys(["500m"], Vec::<&str>::new(), Vec::<&str>::new()).unwrap();
    assert_eq!(ids(&filter_places(&catalog, &query(selection))), vec!["a"]);
}

#[test]
fn test_radius_union_uses_largest_ceiling() {
    let catalog = three_distances();
    let selection =
        FilterSelection::from_keys(["500m", "5km"], Vec::<&str>::new(), Vec::<&str>::new()).unwrap();
    // Buckets are ceilings, not bands: 800 м passes the 5 км bucket
    assert_eq!(ids(&filter_places(&catalog, &query(selection))), vec!["a", "b"]);
}

#[test]
fn test_all_predicates_and_combined() {
    let (catalog, _) = three_distances().toggle_favorite("b");
    let (catalog, _) = catalog.toggle_favorite("c");

    let mut selection = FilterSelection::default();
    selection.categories.insert(CategoryKey::Park);
    selection.categories.insert(CategoryKey::Museum);
    selection.tags.insert(PriceLevel::Premium);

    let q = PlaceQuery {
        selection,
        search_query: "МЕСТО".to_string(),
        favorites_only: true,
    };
    assert_eq!(ids(&filter_places(&catalog, &q)), vec!["c"]);
}

#[test]
fn test_result_keeps_catalog_order() {
    let catalog = default_catalog();
    let mut selection = FilterSelection::default();
    selection.categories.insert(CategoryKey::Park);
    let visible = filter_places(&catalog, &query(selection));
    assert_eq!(ids(&visible), vec!["1", "5", "10"]);
}

#[test]
fn test_unknown_keys_rejected_at_boundary() {
    let err = FilterSelection::from_keys(Vec::<&str>::new(), ["zoo"], Vec::<&str>::new()).unwrap_err();
    assert!(matches!(err, FilterError::UnknownKey { group: "category", .. }));

    let err = FilterSelection::from_keys(Vec::<&str>::new(), Vec::<&str>::new(), ["cheap"]).unwrap_err();
    assert_eq!(err.to_string(), "Unknown price filter key: cheap");
}

#[test]
fn test_clear_resets_selection() {
    let mut selection = FilterSelection::from_keys(["1km"], ["bar"], ["medium"]).unwrap();
    assert!(selection.has_active_filters());
    selection.clear();
    assert!(!selection.has_active_filters());
    assert_eq!(selection, FilterSelection::default());
}

#[test]
fn test_radius_bucket_ceilings() {
    assert_eq!(RadiusBucket::Meters500.ceiling_meters(), 500.0);
    assert_eq!(RadiusBucket::Km1.ceiling_meters(), 1000.0);
    assert_eq!(RadiusBucket::Km5.ceiling_meters(), 5000.0);
}

#[test]
fn test_selection_serializes_with_keys() {
    let selection = FilterSelection::from_keys(["500m"], ["cafe"], ["budget"]).unwrap();
    let json = serde_json::to_string(&selection).unwrap();
    assert_eq!(json, r#"{"radius":["500m"],"categories":["cafe"],"tags":["budget"]}"#);
}
