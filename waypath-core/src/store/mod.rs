//! Read-only access to waypoint coordinates.
//!
//! The `WaypointStore` trait is the only view of coordinates the graph
//! builder and planners get. Population happens elsewhere (an annotation
//! session or a JSON file on disk); once built, a store is never mutated
//! while planning runs against it.

use geo::Coord;
use thiserror::Error;

mod coordinate_map;

pub use coordinate_map::{CoordinateMap, CoordinateMapError};

/// A waypoint name had no coordinate entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown waypoint {name:?}")]
pub struct UnknownWaypoint {
    /// The name that failed to resolve.
    pub name: String,
}

impl UnknownWaypoint {
    /// Build the error for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Read-only lookup of waypoint coordinates by name.
///
/// Coordinates live in the map image's pixel space (`x` to the right,
/// `y` downwards).
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use waypath_core::{CoordinateMap, WaypointStore};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = CoordinateMap::new([("Stormhill", Coord { x: 412.0, y: 233.5 })])?;
///
/// assert_eq!(store.lookup("Stormhill")?, Coord { x: 412.0, y: 233.5 });
/// assert!(store.lookup("Mistwood").is_err());
/// # Ok(())
/// # }
/// ```
pub trait WaypointStore {
    /// Return the coordinate recorded for `name`.
    ///
    /// Implementations must return [`UnknownWaypoint`] rather than a
    /// default coordinate when the name is absent.
    fn lookup(&self, name: &str) -> Result<Coord<f64>, UnknownWaypoint>;

    /// Whether `name` resolves in this store.
    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_ok()
    }
}

impl<S> WaypointStore for &S
where
    S: WaypointStore + ?Sized,
{
    fn lookup(&self, name: &str) -> Result<Coord<f64>, UnknownWaypoint> {
        (**self).lookup(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unknown_waypoint_names_the_missing_entry() {
        let err = UnknownWaypoint::new("Highroad");
        assert_eq!(err.to_string(), "unknown waypoint \"Highroad\"");
    }

    #[rstest]
    fn references_delegate_to_the_store() {
        let store = CoordinateMap::new([("Mistwood", Coord { x: 1.0, y: 2.0 })])
            .expect("valid coordinates");
        let by_ref = &store;
        assert!(WaypointStore::contains(&by_ref, "Mistwood"));
        assert!(!WaypointStore::contains(&by_ref, "Highroad"));
    }
}
