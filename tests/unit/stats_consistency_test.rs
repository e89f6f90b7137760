//! Incremental statistics must equal a full recompute for every order of
//! visit and favorite operations.

use cityscout::places::seed::default_catalog;
use cityscout::{compute_stats, PlaceCatalog, UserStats};

#[derive(Debug, Clone, Copy)]
enum Op {
    Visit(&'static str),
    Favorite(&'static str),
}

fn apply(catalog: PlaceCatalog, stats: &mut UserStats, op: Op) -> PlaceCatalog {
    match op {
        Op::Visit(id) => {
            let (next, change) = catalog.mark_visited(id);
            if let Some(change) = change {
                stats.apply_visit(&change, &next);
            }
            next
        }
        Op::Favorite(id) => {
            let (next, change) = catalog.toggle_favorite(id);
            if let Some(change) = change {
                stats.apply_favorite_toggle(&change);
            }
            next
        }
    }
}

/// All permutations of `items` (Heap's algorithm).
fn permutations(items: &[Op]) -> Vec<Vec<Op>> {
    fn heap(k: usize, items: &mut Vec<Op>, out: &mut Vec<Vec<Op>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        heap(k - 1, items, out);
        for i in 0..k - 1 {
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
            heap(k - 1, items, out);
        }
    }

    let mut items = items.to_vec();
    let mut out = Vec::new();
    let len = items.len();
    heap(len, &mut items, &mut out);
    out
}

fn assert_stats_eq(incremental: &UserStats, full: &UserStats, ops: &[Op]) {
    assert_eq!(incremental.visited_places, full.visited_places, "{:?}", ops);
    assert_eq!(incremental.favorite_places, full.favorite_places, "{:?}", ops);
    assert_eq!(incremental.categories_explored, full.categories_explored, "{:?}", ops);
    assert_eq!(incremental.restaurants_visited, full.restaurants_visited, "{:?}", ops);
    assert!(
        (incremental.distance_walked - full.distance_walked).abs() < 1e-6,
        "{:?}",
        ops
    );
}

#[test]
fn test_permutations_cover_all_orders() {
    let ops = [Op::Visit("1"), Op::Visit("2"), Op::Favorite("3")];
    assert_eq!(permutations(&ops).len(), 6);
}

#[test]
fn test_incremental_matches_full_for_every_order() {
    // Repeated visits, double toggles, a shared category and an unknown id
    let ops = [
        Op::Visit("2"),
        Op::Visit("8"),
        Op::Visit("4"),
        Op::Visit("2"),
        Op::Favorite("4"),
        Op::Favorite("4"),
        Op::Favorite("16"),
        Op::Visit("missing"),
    ];

    for order in permutations(&ops) {
        let mut catalog = default_catalog();
        let mut stats = compute_stats(&catalog);
        for op in &order {
            catalog = apply(catalog, &mut stats, *op);
        }
        assert_stats_eq(&stats, &compute_stats(&catalog), &order);
    }
}

#[test]
fn test_visited_count_matches_catalog() {
    let mut catalog = default_catalog();
    let mut stats = compute_stats(&catalog);
    for id in ["1", "1", "5", "10", "15", "16", "3"] {
        catalog = apply(catalog, &mut stats, Op::Visit(id));
        assert_eq!(stats.visited_places as usize, catalog.visited().count());
        assert!(stats.categories_explored as usize <= catalog.distinct_categories().len());
    }
    assert_eq!(stats.visited_places, 6);
    // Парк, Музей, Концертный зал
    assert_eq!(stats.categories_explored, 3);
}

#[test]
fn test_visited_is_monotonic() {
    let mut catalog = default_catalog();
    let mut stats = compute_stats(&catalog);
    catalog = apply(catalog, &mut stats, Op::Visit("7"));

    for op in [Op::Favorite("7"), Op::Visit("7"), Op::Favorite("7"), Op::Visit("8")] {
        catalog = apply(catalog, &mut stats, op);
        assert!(catalog.get("7").unwrap().is_visited);
    }
}
