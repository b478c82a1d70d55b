use std::path::PathBuf;

use metromap_lib::{find_route, line_weights, load_map, parse_map};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/boston.txt")
}

#[test]
fn fixture_lines_weigh_10_12_14() {
    let map = load_map(&fixture_path()).expect("fixture loads");
    let weights = line_weights(&map);

    assert_eq!(weights.len(), 3);
    assert_eq!(weights.get("Red"), Some(&10));
    assert_eq!(weights.get("Green"), Some(&12));
    assert_eq!(weights.get("Orange"), Some(&14));
}

#[test]
fn route_starts_at_source_and_ends_at_goal() {
    let map = load_map(&fixture_path()).expect("fixture loads");
    let source = map.station_by_id("1").expect("Alewife");
    let goal = map.station_by_id("12").expect("DowntownCrossing");

    let route = find_route(&map, source, goal).expect("route exists");
    assert_eq!(route.first().copied(), Some(source));
    assert_eq!(route.last().copied(), Some(goal));
    assert!(route.len() >= 2);
}

#[test]
fn shortcut_line_is_preferred_when_cheaper() {
    // A six-station Orange chain with a Blue shortcut between 2 and 5. The
    // cost of a discovered station is the weight of the discovering
    // connection alone, so the search reaches 5 through the Blue shortcut
    // before the Orange chain catches up.
    let map = parse_map(
        "1 Alewife Orange 2 0\n\
         2 Davis Orange 3 1 Blue 5 0\n\
         3 Porter Orange 4 2\n\
         4 Harvard Orange 5 3\n\
         5 Central Orange 6 4 Blue 0 2\n\
         6 Kendall Orange 0 5\n",
    )
    .expect("parses");

    let source = map.station_by_id("1").unwrap();
    let goal = map.station_by_id("6").unwrap();
    let route = find_route(&map, source, goal).expect("route exists");

    let ids: Vec<&str> = route.iter().map(|&idx| map.station(idx).id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "5", "6"]);
}

#[test]
fn unreachable_goal_returns_none_instead_of_looping() {
    // Two disconnected components.
    let map = parse_map(
        "1 Alpha Red 2 0\n\
         2 Beta Red 0 1\n\
         3 Gamma Blue 4 0\n\
         4 Delta Blue 0 3\n",
    )
    .expect("parses");

    let source = map.station_by_id("1").unwrap();
    let goal = map.station_by_id("4").unwrap();
    assert_eq!(find_route(&map, source, goal), None);
}

#[test]
fn one_way_connection_is_not_traversable_backwards() {
    // 1 -> 2 exists but 2 -> 1 is never declared.
    let map = parse_map(
        "1 Alpha Red 2 0\n\
         2 Beta Red 0 0\n",
    )
    .expect("parses");

    let a = map.station_by_id("1").unwrap();
    let b = map.station_by_id("2").unwrap();
    assert!(find_route(&map, a, b).is_some());
    assert_eq!(find_route(&map, b, a), None);
}

#[test]
fn repeated_queries_share_the_map() {
    let map = load_map(&fixture_path()).expect("fixture loads");
    let source = map.station_by_id("1").expect("Alewife");
    let goal = map.station_by_id("10").expect("NorthStation");

    let first = find_route(&map, source, goal).expect("route exists");
    let second = find_route(&map, source, goal).expect("route exists");
    assert_eq!(first, second);

    // The reverse query also works with no state carried over.
    let back = find_route(&map, goal, source).expect("route exists");
    assert_eq!(back.first().copied(), Some(goal));
    assert_eq!(back.last().copied(), Some(source));
}
