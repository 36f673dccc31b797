//! Fixtures shared by unit, behaviour and property tests.

use geo::Coord;

use crate::CoordinateMap;

/// Build a [`CoordinateMap`] from `(name, x, y)` triples.
///
/// # Panics
///
/// Panics when a coordinate is non-finite or a name repeats; fixtures are
/// expected to be well formed.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixtures are hand-written and must be valid"
)]
pub fn coordinates(entries: &[(&str, f64, f64)]) -> CoordinateMap {
    CoordinateMap::new(
        entries
            .iter()
            .map(|&(name, x, y)| (name, Coord { x, y })),
    )
    .expect("fixture coordinates must be finite and unique")
}

/// The right-angle triangle `A (0,0)`, `B (10,0)`, `C (10,10)`.
#[must_use]
pub fn right_triangle() -> CoordinateMap {
    coordinates(&[("A", 0.0, 0.0), ("B", 10.0, 0.0), ("C", 10.0, 10.0)])
}

/// A small map in the spirit of the evergaol sweep: seven targets and
/// three bird shortcuts whose ends sit far from the targets.
#[must_use]
pub fn limgrave() -> CoordinateMap {
    coordinates(&[
        ("Northwest of Lake", 310.0, 420.0),
        ("Murkwater Terminus", 720.0, 380.0),
        ("Stormhill", 240.0, 760.0),
        ("Highroad", 860.0, 300.0),
        ("East of Lake", 640.0, 560.0),
        ("Mistwood", 900.0, 700.0),
        ("Northeast Tunnel Entrance", 1010.0, 180.0),
        ("BirdStart1", 260.0, 720.0),
        ("BirdEnd1", 880.0, 680.0),
        ("BirdStart2", 330.0, 440.0),
        ("BirdEnd2", 990.0, 200.0),
        ("BirdStart3", 700.0, 400.0),
        ("BirdEnd3", 250.0, 740.0),
    ])
}

/// Target names of [`limgrave`].
pub const LIMGRAVE_TARGETS: [&str; 7] = [
    "Northwest of Lake",
    "Murkwater Terminus",
    "Stormhill",
    "Highroad",
    "East of Lake",
    "Mistwood",
    "Northeast Tunnel Entrance",
];

/// Bird shortcut pairs of [`limgrave`].
pub const LIMGRAVE_BIRDS: [(&str, &str); 3] = [
    ("BirdStart1", "BirdEnd1"),
    ("BirdStart2", "BirdEnd2"),
    ("BirdStart3", "BirdEnd3"),
];
