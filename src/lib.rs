//! Facade crate for the Waypath route planner.
//!
//! This crate re-exports the core domain types and exposes the greedy planner
//! behind a feature flag.

#![forbid(unsafe_code)]

pub use waypath_core::{
    AnnotationError, AnnotationSession, Command, CoordinateMap, CoordinateMapError, Diagnostics,
    LabelTable, LabelTableError, Mark, PlanError, PlanRequest, PlanResponse, Planner, Route,
    Shortcut, UnknownWaypoint, WaypointStore, distance, euclidean,
};

#[cfg(feature = "planner-greedy")]
pub use waypath_planner::{
    DEFAULT_SHORTCUT_WEIGHT, Edge, EdgeKind, Graph, GraphBuilder, GreedyPlanner,
    GreedyPlannerConfig, PlanningMode, plan,
};
