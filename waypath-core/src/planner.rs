use std::time::Duration;

use thiserror::Error;

use crate::{Route, Shortcut, UnknownWaypoint};

/// Parameters for a planning request.
///
/// `targets` is treated as a set: each name is visited exactly once and a
/// repeated name is ignored after its first occurrence. `shortcuts` lists
/// the fast connections the planner may use.
///
/// # Examples
/// ```rust
/// use waypath_core::{PlanRequest, Shortcut};
///
/// let request = PlanRequest::new(["Stormhill", "Mistwood"])
///     .with_shortcut(Shortcut::new("BirdStart1", "BirdEnd1"));
/// assert_eq!(request.targets.len(), 2);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Waypoints the route must visit.
    pub targets: Vec<String>,
    /// Shortcut pairs available to the planner.
    #[cfg_attr(feature = "serde", serde(default))]
    pub shortcuts: Vec<Shortcut>,
}

impl PlanRequest {
    /// Request a route through `targets` with no shortcuts.
    pub fn new<I, T>(targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            shortcuts: Vec::new(),
        }
    }

    /// Add a shortcut pair.
    #[must_use]
    pub fn with_shortcut(mut self, shortcut: Shortcut) -> Self {
        self.shortcuts.push(shortcut);
        self
    }

    /// Reject shortcuts whose ends coincide.
    ///
    /// Name resolution is left to the planner, which owns the store.
    pub fn validate(&self) -> Result<(), PlanError> {
        match self.shortcuts.iter().find(|s| s.is_degenerate()) {
            Some(shortcut) => Err(PlanError::DegenerateShortcut {
                name: shortcut.entry.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Targets with repeats removed, first occurrence kept.
    #[must_use]
    pub fn unique_targets(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.targets
            .iter()
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

/// Counters describing how a plan was produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent building the graph and planning.
    pub solve_time: Duration,
    /// Candidate edges the heuristic considered.
    pub candidate_edges: u64,
    /// Shortcut edges the final path travels along.
    pub shortcuts_used: u64,
}

/// Result of a successful plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanResponse {
    /// Targets in visiting order.
    pub route: Route,
    /// Sum of the leg weights along `route`.
    pub total_weight: f64,
    /// `route` expanded with any waypoints passed through between targets.
    ///
    /// Identical to `route` unless the planner routes legs through
    /// intermediate shortcut endpoints.
    pub path: Vec<String>,
    /// Planning counters.
    pub diagnostics: Diagnostics,
}

impl PlanResponse {
    /// Response for an empty target set.
    #[must_use]
    pub fn empty(diagnostics: Diagnostics) -> Self {
        Self {
            route: Route::empty(),
            total_weight: 0.0,
            path: Vec::new(),
            diagnostics,
        }
    }
}

/// Errors returned by [`Planner::plan`] and the graph builder.
///
/// An empty target set is not an error: planners return an empty route.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A target or shortcut endpoint has no coordinates.
    #[error(transparent)]
    UnknownWaypoint(#[from] UnknownWaypoint),
    /// A shortcut starts and ends at the same waypoint.
    #[error("shortcut at {name:?} starts and ends at the same waypoint")]
    DegenerateShortcut {
        /// The waypoint named at both ends.
        name: String,
    },
    /// The configured shortcut weight cannot be used as an edge weight.
    #[error("shortcut weight {weight} must be finite and non-negative")]
    InvalidShortcutWeight {
        /// Rejected weight.
        weight: f64,
    },
    /// Some targets could not be joined into a single path.
    ///
    /// Graphs built from resolvable coordinates are complete, so this
    /// signals a defect in graph construction rather than bad input.
    #[error("targets could not be joined into one path: {unreached:?}")]
    DisconnectedTargets {
        /// Targets left outside the path's main fragment.
        unreached: Vec<String>,
    },
}

/// Alias for the planner error type.
pub type Error = PlanError;

/// Produce a visiting order for a request.
///
/// Implementations are pure with respect to their inputs: planning the
/// same request twice yields the same route. Planners must be
/// `Send + Sync` so a shared read-only store can serve concurrent callers.
pub trait Planner: Send + Sync {
    /// Plan a route, or explain why the request cannot be served.
    fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, Error>;
}
