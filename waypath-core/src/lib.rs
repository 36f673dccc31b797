//! Core domain types for the Waypath route planner.
//!
//! Waypoints are named pixel coordinates on a map image. A planner visits
//! a set of target waypoints in a short open path, optionally taking
//! shortcuts: declared pairs of waypoints joined at a fixed, near-zero
//! cost. This crate holds the coordinate store, distance function, request
//! and response types and the [`Planner`] trait; graph construction and
//! the heuristic live in `waypath-planner`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod annotation;
mod distance;
pub mod labels;
mod planner;
mod route;
mod shortcut;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use annotation::{AnnotationError, AnnotationSession, Command, Mark};
pub use distance::{distance, euclidean};
pub use labels::{LabelTable, LabelTableError};
pub use planner::{Diagnostics, Error, PlanError, PlanRequest, PlanResponse, Planner};
pub use route::Route;
pub use shortcut::Shortcut;
pub use store::{CoordinateMap, CoordinateMapError, UnknownWaypoint, WaypointStore};
