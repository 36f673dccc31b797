//! Greedy-edge route planner for Waypath.
//!
//! This crate provides [`GreedyPlanner`], the default implementation of the
//! [`Planner`](waypath_core::Planner) trait, together with the graph it plans
//! over. A [`Graph`] joins every pair of waypoints with a straight-line edge
//! and replaces declared shortcut pairs with a fixed weight. Planning then
//! restricts attention to the targets and grows an open path with the
//! multi-fragment greedy heuristic: cheapest edge first, never giving a
//! waypoint more than two neighbours and never closing a loop.
//!
//! Two optional extensions sit on top of the greedy core: planning over
//! shortest-path distances ([`PlanningMode::ShortestPath`]) so that legs
//! may pass through shortcut endpoints that are not targets, and a 2-opt
//! pass ([`GreedyPlannerConfig::refine`]) that removes crossings.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod closure;
mod graph;
mod greedy;
mod planner;
mod refine;

pub use graph::{DEFAULT_SHORTCUT_WEIGHT, Edge, EdgeKind, Graph, GraphBuilder, build};
pub use planner::{GreedyPlanner, GreedyPlannerConfig, PlanningMode, plan};
