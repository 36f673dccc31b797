//! Behavioural tests for the point-picking session.

use std::cell::RefCell;

use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use waypath_core::{AnnotationError, AnnotationSession, Command, Mark, WaypointStore};

#[derive(Debug, Default)]
struct SessionWorld {
    session: RefCell<Option<AnnotationSession>>,
    refusal: RefCell<Option<AnnotationError>>,
}

impl SessionWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn session(&self) -> AnnotationSession {
        self.session
            .borrow()
            .clone()
            .expect("session should be started before commands")
    }

    /// Apply `command`, keeping the old state when it is refused.
    fn apply(&self, command: Command) {
        match self.session().apply(command) {
            Ok(next) => {
                self.session.replace(Some(next));
            }
            Err(err) => {
                self.refusal.replace(Some(err));
            }
        }
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn refusal(&self) -> AnnotationError {
        self.refusal
            .borrow()
            .clone()
            .expect("a command should have been refused")
    }
}

fn unquote(raw: &str) -> &str {
    raw.trim_matches('"')
}

#[fixture]
fn world() -> SessionWorld {
    SessionWorld::default()
}

#[given("a session over {names:word}")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn given_session(world: &SessionWorld, names: String) {
    let session = AnnotationSession::new(unquote(&names).split(',')).expect("unique names");
    world.session.replace(Some(session));
}

#[when("I plot the current waypoint at {x:f64} {y:f64}")]
fn when_plot(world: &SessionWorld, x: f64, y: f64) {
    world.apply(Command::Plot(Coord { x, y }));
}

#[when("I skip the current waypoint")]
fn when_skip(world: &SessionWorld) {
    world.apply(Command::Skip);
}

#[when("I step back")]
fn when_back(world: &SessionWorld) {
    world.apply(Command::Back);
}

#[when("I save the session")]
fn when_save(world: &SessionWorld) {
    world.apply(Command::Save);
}

#[then("the session is saved")]
fn then_saved(world: &SessionWorld) {
    assert!(world.session().is_saved());
    assert!(world.refusal.borrow().is_none());
}

#[then("{name:word} is recorded at {x:f64} {y:f64}")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_recorded(world: &SessionWorld, name: String, x: f64, y: f64) {
    let coords = world.session().coordinates();
    let coord = coords.lookup(unquote(&name)).expect("plotted waypoint");
    assert_eq!(coord, Coord { x, y });
}

#[then("{name:word} is pending")]
fn then_pending(world: &SessionWorld, name: String) {
    assert_eq!(world.session().mark(unquote(&name)), Some(Mark::Pending));
}

#[then("the current waypoint is {name:word}")]
fn then_current(world: &SessionWorld, name: String) {
    assert_eq!(world.session().current(), Some(unquote(&name)));
}

#[then("the command is refused because {count:usize} waypoints are pending")]
fn then_incomplete(world: &SessionWorld, count: usize) {
    match world.refusal() {
        AnnotationError::Incomplete { pending } => assert_eq!(pending.len(), count),
        other => panic!("expected Incomplete, got {other:?}"),
    }
    assert!(!world.session().is_saved());
}

#[then("the command is refused at the start")]
fn then_at_start(world: &SessionWorld) {
    assert_eq!(world.refusal(), AnnotationError::AtStart);
}

#[scenario(path = "tests/features/annotation_session.feature", index = 0)]
fn plot_and_save(world: SessionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/annotation_session.feature", index = 1)]
fn save_with_pending(world: SessionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/annotation_session.feature", index = 2)]
fn step_back(world: SessionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/annotation_session.feature", index = 3)]
fn step_back_at_start(world: SessionWorld) {
    let _ = world;
}
