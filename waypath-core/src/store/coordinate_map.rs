//! In-memory `WaypointStore` keyed by waypoint name.

use std::collections::{BTreeMap, HashMap};

use geo::Coord;
use thiserror::Error;

use super::{UnknownWaypoint, WaypointStore};

/// Errors returned while building or decoding a [`CoordinateMap`].
#[derive(Debug, Error)]
pub enum CoordinateMapError {
    /// A coordinate component was NaN or infinite.
    #[error("waypoint {name:?} has a non-finite coordinate ({x}, {y})")]
    NonFinite {
        /// Offending waypoint.
        name: String,
        /// Recorded x component.
        x: f64,
        /// Recorded y component.
        y: f64,
    },
    /// The same name was supplied twice.
    #[error("waypoint {name:?} appears more than once")]
    DuplicateName {
        /// Repeated waypoint.
        name: String,
    },
    /// The JSON mapping could not be read or written.
    #[cfg(feature = "serde")]
    #[error("invalid coordinate mapping JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Immutable mapping from waypoint name to pixel coordinate.
///
/// With the `serde` feature the map round-trips through the picking
/// tool's JSON format, an object of `[x, y]` pairs keyed by name.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use waypath_core::{CoordinateMap, WaypointStore};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let map = CoordinateMap::new([
///     ("Mistwood", Coord { x: 120.0, y: 640.5 }),
///     ("Highroad", Coord { x: 300.0, y: 410.0 }),
/// ])?;
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.lookup("Highroad")?, Coord { x: 300.0, y: 410.0 });
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "BTreeMap<String, [f64; 2]>",
        into = "BTreeMap<String, [f64; 2]>"
    )
)]
pub struct CoordinateMap {
    coords: HashMap<String, Coord<f64>>,
}

impl CoordinateMap {
    /// Validate and collect `(name, coordinate)` pairs.
    pub fn new<I, K>(entries: I) -> Result<Self, CoordinateMapError>
    where
        I: IntoIterator<Item = (K, Coord<f64>)>,
        K: Into<String>,
    {
        let mut coords = HashMap::new();
        for (key, coord) in entries {
            let name = key.into();
            if !(coord.x.is_finite() && coord.y.is_finite()) {
                return Err(CoordinateMapError::NonFinite {
                    name,
                    x: coord.x,
                    y: coord.y,
                });
            }
            if coords.contains_key(&name) {
                return Err(CoordinateMapError::DuplicateName { name });
            }
            coords.insert(name, coord);
        }
        Ok(Self { coords })
    }

    /// Collect entries already known to be finite and uniquely named.
    pub(crate) fn from_checked<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Coord<f64>)>,
    {
        Self {
            coords: entries.into_iter().collect(),
        }
    }

    /// Number of waypoints held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether the map holds no waypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Iterate over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Coord<f64>)> + '_ {
        self.coords.iter().map(|(name, coord)| (name.as_str(), *coord))
    }

    /// Waypoint names sorted lexicographically.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.coords.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Decode the picking tool's JSON mapping.
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, CoordinateMapError> {
        let map: Self = serde_json::from_reader(reader)?;
        log::debug!("loaded {} waypoint coordinates", map.len());
        Ok(map)
    }

    /// Encode as pretty JSON with names in sorted order.
    #[cfg(feature = "serde")]
    pub fn to_json_writer<W: std::io::Write>(&self, writer: W) -> Result<(), CoordinateMapError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

impl WaypointStore for CoordinateMap {
    fn lookup(&self, name: &str) -> Result<Coord<f64>, UnknownWaypoint> {
        self.coords
            .get(name)
            .copied()
            .ok_or_else(|| UnknownWaypoint::new(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.coords.contains_key(name)
    }
}

impl TryFrom<BTreeMap<String, [f64; 2]>> for CoordinateMap {
    type Error = CoordinateMapError;

    fn try_from(raw: BTreeMap<String, [f64; 2]>) -> Result<Self, Self::Error> {
        Self::new(
            raw.into_iter()
                .map(|(name, [x, y])| (name, Coord { x, y })),
        )
    }
}

impl From<CoordinateMap> for BTreeMap<String, [f64; 2]> {
    fn from(map: CoordinateMap) -> Self {
        map.coords
            .into_iter()
            .map(|(name, coord)| (name, [coord.x, coord.y]))
            .collect()
    }
}
