//! Behavioural tests for `GreedyPlanner` using rstest-bdd.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use waypath_core::test_support::right_triangle;
use waypath_core::{
    CoordinateMap, PlanError, PlanRequest, PlanResponse, Planner, Shortcut, UnknownWaypoint,
};
use waypath_planner::GreedyPlanner;

#[derive(Debug, Default)]
struct PlanningWorld {
    store: RefCell<CoordinateMap>,
    request: RefCell<PlanRequest>,
    outcome: RefCell<Option<Result<PlanResponse, PlanError>>>,
}

impl PlanningWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<PlanResponse, PlanError> {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .expect("outcome should be recorded before assertions")
    }
}

/// Strip the quotes Gherkin leaves around a captured word.
fn unquote(raw: &str) -> &str {
    raw.trim_matches('"')
}

#[fixture]
fn world() -> PlanningWorld {
    PlanningWorld::default()
}

#[given("the right-triangle coordinates")]
fn given_triangle(world: &PlanningWorld) {
    world.store.replace(right_triangle());
}

#[given("the targets {targets:word}")]
fn given_targets(world: &PlanningWorld, targets: String) {
    let names = unquote(&targets).split(',').map(str::trim);
    world.request.borrow_mut().targets = names.map(str::to_owned).collect();
}

#[given("a shortcut from {entry:word} to {exit:word}")]
fn given_shortcut(world: &PlanningWorld, entry: String, exit: String) {
    world
        .request
        .borrow_mut()
        .shortcuts
        .push(Shortcut::new(unquote(&entry), unquote(&exit)));
}

#[when("the greedy planner runs")]
fn when_planner_runs(world: &PlanningWorld) {
    let planner = GreedyPlanner::new(world.store.borrow().clone());
    let outcome = planner.plan(&world.request.borrow());
    world.outcome.replace(Some(outcome));
}

#[then("the route visits {route:word}")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_route_visits(world: &PlanningWorld, route: String) {
    let response = world.expect_outcome().expect("expected planning success");
    let expected: Vec<&str> = unquote(&route).split(',').collect();
    assert_eq!(response.route.waypoints(), expected.as_slice());
}

#[then("the route weight is {weight:f64}")]
#[expect(
    clippy::expect_used,
    clippy::float_arithmetic,
    reason = "behaviour tests use expect and tolerance checks for clarity"
)]
fn then_route_weight(world: &PlanningWorld, weight: f64) {
    let response = world.expect_outcome().expect("expected planning success");
    assert!((response.total_weight - weight).abs() <= 1e-9);
}

#[then("the route has no stops")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_route_empty(world: &PlanningWorld) {
    let response = world.expect_outcome().expect("expected planning success");
    assert!(response.route.is_empty());
    assert!(response.path.is_empty());
}

#[then("planning fails with a degenerate shortcut at {name:word}")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_degenerate(world: &PlanningWorld, name: String) {
    let err = world.expect_outcome().expect_err("expected planning failure");
    assert_eq!(
        err,
        PlanError::DegenerateShortcut {
            name: unquote(&name).to_owned()
        }
    );
}

#[then("planning fails with unknown waypoint {name:word}")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_unknown(world: &PlanningWorld, name: String) {
    let err = world.expect_outcome().expect_err("expected planning failure");
    assert_eq!(
        err,
        PlanError::UnknownWaypoint(UnknownWaypoint::new(unquote(&name)))
    );
}

#[scenario(path = "tests/features/route_planning.feature", index = 0)]
fn triangle_without_shortcuts(world: PlanningWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_planning.feature", index = 1)]
fn triangle_with_shortcut(world: PlanningWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_planning.feature", index = 2)]
fn degenerate_shortcut(world: PlanningWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_planning.feature", index = 3)]
fn unknown_target(world: PlanningWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_planning.feature", index = 4)]
fn empty_target_set(world: PlanningWorld) {
    let _ = world;
}
