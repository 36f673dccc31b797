//! Point-picking session state.
//!
//! Waypoint coordinates are captured by walking an ordered list of names
//! and plotting (or skipping) each one on the map image. The session is a
//! value: [`AnnotationSession::apply`] returns the next state and leaves
//! the current one untouched, so a front end can keep history or discard
//! a failed transition without cleanup.

use std::collections::HashSet;

use geo::Coord;
use thiserror::Error;

use crate::CoordinateMap;

/// Progress of a single waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mark {
    /// Not yet visited.
    Pending,
    /// Plotted at a pixel coordinate.
    Plotted(Coord<f64>),
    /// Deliberately left without a coordinate.
    Skipped,
}

/// Discrete commands a front end can issue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Record a coordinate for the current waypoint and advance.
    Plot(Coord<f64>),
    /// Leave the current waypoint unplotted and advance.
    Skip,
    /// Step back one waypoint and clear it.
    Back,
    /// Clear every waypoint and return to the first.
    Reset,
    /// Finish the session; requires no pending waypoints.
    Save,
}

/// Rejected transitions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnnotationError {
    /// The name list repeats a waypoint.
    #[error("waypoint {name:?} is listed more than once")]
    DuplicateName {
        /// Repeated waypoint.
        name: String,
    },
    /// Every waypoint has already been plotted or skipped.
    #[error("all waypoints have been visited")]
    Exhausted,
    /// `Back` was issued on the first waypoint.
    #[error("already at the first waypoint")]
    AtStart,
    /// `Plot` received a NaN or infinite coordinate.
    #[error("cannot plot non-finite coordinate ({x}, {y})")]
    NonFinite {
        /// Rejected x component.
        x: f64,
        /// Rejected y component.
        y: f64,
    },
    /// `Save` was issued while waypoints were still pending.
    #[error("{} waypoint(s) still pending", pending.len())]
    Incomplete {
        /// Waypoints not yet plotted or skipped, in list order.
        pending: Vec<String>,
    },
}

/// Ordered point-picking session.
///
/// # Examples
/// ```rust
/// use geo::Coord;
/// use waypath_core::{AnnotationSession, Command, WaypointStore};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let session = AnnotationSession::new(["Stormhill", "Mistwood"])?;
/// let session = session
///     .apply(Command::Plot(Coord { x: 412.0, y: 233.5 }))?
///     .apply(Command::Skip)?
///     .apply(Command::Save)?;
///
/// assert!(session.is_saved());
/// let coords = session.coordinates();
/// assert_eq!(coords.lookup("Stormhill")?, Coord { x: 412.0, y: 233.5 });
/// assert!(!coords.contains("Mistwood"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationSession {
    names: Vec<String>,
    marks: Vec<Mark>,
    cursor: usize,
    saved: bool,
}

impl AnnotationSession {
    /// Start a session over `names`, all pending.
    pub fn new<I, T>(waypoints: I) -> Result<Self, AnnotationError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let names: Vec<String> = waypoints.into_iter().map(Into::into).collect();
        let mut seen = HashSet::new();
        if let Some(name) = names.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(AnnotationError::DuplicateName { name: name.clone() });
        }
        let marks = vec![Mark::Pending; names.len()];
        Ok(Self {
            names,
            marks,
            cursor: 0,
            saved: false,
        })
    }

    /// Compute the state after `command`.
    pub fn apply(&self, command: Command) -> Result<Self, AnnotationError> {
        let mut next = self.clone();
        match command {
            Command::Plot(coord) => {
                if !(coord.x.is_finite() && coord.y.is_finite()) {
                    return Err(AnnotationError::NonFinite {
                        x: coord.x,
                        y: coord.y,
                    });
                }
                next.advance(Mark::Plotted(coord))?;
            }
            Command::Skip => next.advance(Mark::Skipped)?,
            Command::Back => {
                let previous = next.cursor.checked_sub(1).ok_or(AnnotationError::AtStart)?;
                if let Some(mark) = next.marks.get_mut(previous) {
                    *mark = Mark::Pending;
                }
                next.cursor = previous;
                next.saved = false;
            }
            Command::Reset => {
                next.marks.fill(Mark::Pending);
                next.cursor = 0;
                next.saved = false;
            }
            Command::Save => {
                let pending = next.pending();
                if !pending.is_empty() {
                    return Err(AnnotationError::Incomplete { pending });
                }
                next.saved = true;
            }
        }
        Ok(next)
    }

    fn advance(&mut self, mark: Mark) -> Result<(), AnnotationError> {
        let slot = self
            .marks
            .get_mut(self.cursor)
            .ok_or(AnnotationError::Exhausted)?;
        *slot = mark;
        self.cursor += 1;
        self.saved = false;
        Ok(())
    }

    /// Waypoint awaiting a command, if any remain.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.names.get(self.cursor).map(String::as_str)
    }

    /// Mark recorded for `name`.
    #[must_use]
    pub fn mark(&self, name: &str) -> Option<Mark> {
        self.names
            .iter()
            .position(|candidate| candidate == name)
            .and_then(|idx| self.marks.get(idx).copied())
    }

    /// Names still pending, in list order.
    #[must_use]
    pub fn pending(&self) -> Vec<String> {
        self.names
            .iter()
            .zip(&self.marks)
            .filter(|(_, mark)| matches!(mark, Mark::Pending))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Whether every waypoint has been plotted or skipped.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.marks.iter().all(|mark| !matches!(mark, Mark::Pending))
    }

    /// Whether the last command was a successful `Save`.
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        self.saved
    }

    /// Plotted waypoints as a coordinate store.
    #[must_use]
    pub fn coordinates(&self) -> CoordinateMap {
        CoordinateMap::from_checked(self.names.iter().zip(&self.marks).filter_map(
            |(name, mark)| match mark {
                Mark::Plotted(coord) => Some((name.clone(), *coord)),
                Mark::Pending | Mark::Skipped => None,
            },
        ))
    }
}
