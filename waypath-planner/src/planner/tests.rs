//! Tests for `plan` and `GreedyPlanner`.

use super::*;
use rstest::{fixture, rstest};
use waypath_core::test_support::{
    LIMGRAVE_BIRDS, LIMGRAVE_TARGETS, coordinates, limgrave, right_triangle,
};
use waypath_core::{CoordinateMap, Shortcut};

use crate::build;

#[fixture]
fn triangle() -> CoordinateMap {
    right_triangle()
}

fn waypoints(route: &Route) -> Vec<&str> {
    route.waypoints().iter().map(String::as_str).collect()
}

#[rstest]
fn triangle_without_shortcuts_walks_the_legs(triangle: CoordinateMap) {
    let graph = build(&triangle, &["A", "B", "C"], &[]).expect("graph");
    let route = plan(&graph, &["A", "B", "C"]).expect("route");
    assert_eq!(waypoints(&route), ["A", "B", "C"]);
    assert_eq!(graph.route_weight(route.waypoints()).expect("weight"), 20.0);
}

#[rstest]
fn triangle_with_shortcut_starts_at_b(triangle: CoordinateMap) {
    let graph = build(&triangle, &["A", "B", "C"], &[Shortcut::new("A", "C")]).expect("graph");
    let route = plan(&graph, &["A", "B", "C"]).expect("route");
    assert_eq!(waypoints(&route), ["B", "A", "C"]);
    assert_eq!(graph.route_weight(route.waypoints()).expect("weight"), 11.0);
}

#[rstest]
fn repeated_runs_agree(triangle: CoordinateMap) {
    let graph = build(&triangle, &["A", "B", "C"], &[]).expect("graph");
    let first = plan(&graph, &["A", "B", "C"]).expect("first");
    let second = plan(&graph, &["A", "B", "C"]).expect("second");
    assert_eq!(first, second);
}

#[rstest]
#[case::empty(&[], &[])]
#[case::single(&["B"], &["B"])]
#[case::repeated(&["C", "C"], &["C"])]
fn small_target_sets(
    triangle: CoordinateMap,
    #[case] targets: &[&str],
    #[case] expected: &[&str],
) {
    let graph = build(&triangle, &["A", "B", "C"], &[]).expect("graph");
    let route = plan(&graph, targets).expect("route");
    assert_eq!(waypoints(&route), expected);
}

#[rstest]
fn unknown_target_is_reported(triangle: CoordinateMap) {
    let graph = build(&triangle, &["A", "B"], &[]).expect("graph");
    let err = plan(&graph, &["A", "C"]).expect_err("C is not a node");
    assert_eq!(err, PlanError::UnknownWaypoint(UnknownWaypoint::new("C")));
}

#[rstest]
fn planner_fills_response(triangle: CoordinateMap) {
    let planner = GreedyPlanner::new(triangle);
    let request = PlanRequest::new(["A", "B", "C"]).with_shortcut(Shortcut::new("A", "C"));
    let response = planner.plan(&request).expect("plan");
    assert_eq!(response.route.to_string(), "B -> A -> C");
    assert_eq!(response.total_weight, 11.0);
    assert_eq!(response.path, ["B", "A", "C"]);
    assert_eq!(response.diagnostics.candidate_edges, 3);
    assert_eq!(response.diagnostics.shortcuts_used, 1);
}

#[rstest]
fn planner_returns_empty_response_for_no_targets(triangle: CoordinateMap) {
    let planner = GreedyPlanner::new(triangle);
    let response = planner.plan(&PlanRequest::default()).expect("plan");
    assert!(response.route.is_empty());
    assert!(response.path.is_empty());
    assert_eq!(response.total_weight, 0.0);
}

#[rstest]
fn planner_rejects_degenerate_shortcut_first(triangle: CoordinateMap) {
    let planner = GreedyPlanner::new(triangle);
    let request = PlanRequest::new(["Nowhere"]).with_shortcut(Shortcut::new("A", "A"));
    let err = planner.plan(&request).expect_err("degenerate");
    assert_eq!(
        err,
        PlanError::DegenerateShortcut {
            name: "A".to_owned()
        }
    );
}

#[rstest]
fn planner_rejects_unknown_shortcut_endpoint(triangle: CoordinateMap) {
    let planner = GreedyPlanner::new(triangle);
    let request = PlanRequest::new(["A", "B"]).with_shortcut(Shortcut::new("A", "Elsewhere"));
    let err = planner.plan(&request).expect_err("unknown endpoint");
    assert_eq!(
        err,
        PlanError::UnknownWaypoint(UnknownWaypoint::new("Elsewhere"))
    );
}

#[rstest]
fn planner_rejects_invalid_shortcut_weight(triangle: CoordinateMap) {
    let config = GreedyPlannerConfig {
        shortcut_weight: -1.0,
        ..GreedyPlannerConfig::default()
    };
    let planner = GreedyPlanner::with_config(triangle, config);
    let err = planner
        .plan(&PlanRequest::new(["A"]))
        .expect_err("negative weight");
    assert!(matches!(err, PlanError::InvalidShortcutWeight { .. }));
}

#[fixture]
fn detour() -> CoordinateMap {
    // A and B sit next to opposite ends of a shortcut neither of them owns.
    coordinates(&[
        ("A", 0.0, 0.0),
        ("B", 100.0, 0.0),
        ("In", 1.0, 0.0),
        ("Out", 99.0, 0.0),
    ])
}

#[rstest]
fn shortest_path_mode_uses_non_target_shortcuts(detour: CoordinateMap) {
    let request = PlanRequest::new(["A", "B"]).with_shortcut(Shortcut::new("In", "Out"));

    let direct = GreedyPlanner::new(detour.clone())
        .plan(&request)
        .expect("direct plan");
    assert_eq!(direct.total_weight, 100.0);
    assert_eq!(direct.path, ["A", "B"]);
    assert_eq!(direct.diagnostics.shortcuts_used, 0);

    let config = GreedyPlannerConfig {
        mode: PlanningMode::ShortestPath,
        ..GreedyPlannerConfig::default()
    };
    let shortest = GreedyPlanner::with_config(detour, config)
        .plan(&request)
        .expect("shortest-path plan");
    assert_eq!(shortest.route.to_string(), "A -> B");
    assert_eq!(shortest.total_weight, 3.0);
    assert_eq!(shortest.path, ["A", "In", "Out", "B"]);
    assert_eq!(shortest.diagnostics.shortcuts_used, 1);
}

#[rstest]
fn refinement_never_increases_weight() {
    let store = limgrave();
    let request = LIMGRAVE_BIRDS.iter().fold(
        PlanRequest::new(LIMGRAVE_TARGETS),
        |request, &(entry, exit)| request.with_shortcut(Shortcut::new(entry, exit)),
    );
    let plain = GreedyPlanner::new(store.clone())
        .plan(&request)
        .expect("plain");
    let refined = GreedyPlanner::with_config(
        store,
        GreedyPlannerConfig {
            refine: true,
            ..GreedyPlannerConfig::default()
        },
    )
    .plan(&request)
    .expect("refined");
    assert!(refined.total_weight <= plain.total_weight);
    let mut plain_set = plain.route.waypoints().to_vec();
    let mut refined_set = refined.route.waypoints().to_vec();
    plain_set.sort();
    refined_set.sort();
    assert_eq!(plain_set, refined_set);
}

#[cfg(feature = "serde")]
#[rstest]
#[case::direct(PlanningMode::Direct, "\"direct\"")]
#[case::shortest(PlanningMode::ShortestPath, "\"shortest-path\"")]
fn planning_mode_uses_kebab_case(#[case] mode: PlanningMode, #[case] json: &str) {
    assert_eq!(serde_json::to_string(&mode).expect("encode"), json);
    let decoded: PlanningMode = serde_json::from_str(json).expect("decode");
    assert_eq!(decoded, mode);
}

#[rstest]
#[case::direct(PlanningMode::Direct)]
#[case::shortest_path(PlanningMode::ShortestPath)]
fn overflowing_leg_still_joins_targets(#[case] mode: PlanningMode) {
    // Both coordinates are finite but their distance is not.
    let store = coordinates(&[("A", f64::MIN, 0.0), ("B", f64::MAX, 0.0)]);
    let planner = GreedyPlanner::with_config(
        store,
        GreedyPlannerConfig {
            mode,
            ..GreedyPlannerConfig::default()
        },
    );
    let response = planner
        .plan(&PlanRequest::new(["A", "B"]))
        .expect("far-apart targets still form a route");
    assert_eq!(waypoints(&response.route), ["A", "B"]);
    assert_eq!(response.total_weight, f64::INFINITY);
}

#[rstest]
#[case("direct", PlanningMode::Direct)]
#[case("shortest-path", PlanningMode::ShortestPath)]
#[case("Shortest-Path", PlanningMode::ShortestPath)]
fn planning_mode_parses_from_names(#[case] raw: &str, #[case] expected: PlanningMode) {
    let mode: PlanningMode = raw.parse().expect("known mode");
    assert_eq!(mode, expected);
    assert_eq!(mode.to_string(), raw.to_lowercase());
}

#[rstest]
fn planning_mode_rejects_unknown_names() {
    let err = "scenic".parse::<PlanningMode>().expect_err("unknown mode");
    assert!(err.contains("unknown planning mode"));
}
