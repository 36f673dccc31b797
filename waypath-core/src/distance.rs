//! Straight-line distance between waypoints.

use geo::Coord;

use crate::{UnknownWaypoint, WaypointStore};

/// Euclidean distance between two coordinates.
///
/// # Examples
/// ```rust
/// use geo::Coord;
/// use waypath_core::euclidean;
///
/// let d = euclidean(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 });
/// assert_eq!(d, 5.0);
/// ```
#[must_use]
pub fn euclidean(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let delta = to - from;
    delta.x.hypot(delta.y)
}

/// Euclidean distance between two named waypoints in `store`.
///
/// Symmetric in its arguments and zero when both names share a coordinate.
///
/// # Examples
/// ```rust
/// use geo::Coord;
/// use waypath_core::{CoordinateMap, distance};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = CoordinateMap::new([
///     ("A", Coord { x: 0.0, y: 0.0 }),
///     ("B", Coord { x: 10.0, y: 0.0 }),
/// ])?;
/// assert_eq!(distance(&store, "A", "B")?, 10.0);
/// # Ok(())
/// # }
/// ```
pub fn distance<S>(store: &S, from: &str, to: &str) -> Result<f64, UnknownWaypoint>
where
    S: WaypointStore + ?Sized,
{
    let origin = store.lookup(from)?;
    let destination = store.lookup(to)?;
    Ok(euclidean(origin, destination))
}
