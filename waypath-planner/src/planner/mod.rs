//! `GreedyPlanner` and the free [`plan`] function.
//!
//! Both restrict the greedy-edge heuristic to the targets. The planner
//! additionally builds the graph from a request, optionally plans over
//! shortest-path distances and refines the result with 2-opt.

use std::collections::HashSet;
use std::time::Instant;

use waypath_core::{
    Diagnostics, PlanError, PlanRequest, PlanResponse, Planner, Route, UnknownWaypoint,
    WaypointStore,
};

use crate::closure::ShortestPaths;
use crate::graph::sum_legs;
use crate::greedy::{Disconnected, greedy_path};
use crate::refine::two_opt;
use crate::{DEFAULT_SHORTCUT_WEIGHT, EdgeKind, Graph, GraphBuilder};

/// How leg weights between targets are derived from the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum PlanningMode {
    /// Use the edge joining each pair of targets.
    #[default]
    Direct,
    /// Use the cheapest chain of edges through any graph node.
    ShortestPath,
}

impl PlanningMode {
    /// Kebab-case name, as accepted by [`FromStr`](std::str::FromStr).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::ShortestPath => "shortest-path",
        }
    }
}

impl std::fmt::Display for PlanningMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PlanningMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "shortest-path" => Ok(Self::ShortestPath),
            _ => Err(format!(
                "unknown planning mode '{s}' (expected direct or shortest-path)"
            )),
        }
    }
}

/// Configuration for [`GreedyPlanner`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreedyPlannerConfig {
    /// Weight given to every shortcut edge.
    pub shortcut_weight: f64,
    /// Leg weighting.
    pub mode: PlanningMode,
    /// Run 2-opt over the greedy path.
    pub refine: bool,
}

impl Default for GreedyPlannerConfig {
    fn default() -> Self {
        Self {
            shortcut_weight: DEFAULT_SHORTCUT_WEIGHT,
            mode: PlanningMode::Direct,
            refine: false,
        }
    }
}

/// Visiting order over the targets of `graph`.
///
/// Repeated targets are visited once. Returns an empty route for an empty
/// target set.
///
/// # Examples
/// ```rust
/// use waypath_core::test_support::right_triangle;
/// use waypath_planner::{build, plan};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = right_triangle();
/// let graph = build(&store, &["A", "B", "C"], &[])?;
/// let route = plan(&graph, &["A", "B", "C"])?;
/// assert_eq!(route.to_string(), "A -> B -> C");
/// # Ok(())
/// # }
/// ```
pub fn plan<T: AsRef<str>>(graph: &Graph, targets: &[T]) -> Result<Route, PlanError> {
    let names = dedup(targets.iter().map(|target| target.as_ref()));
    let outcome = Search::new(graph, PlanningMode::Direct).run(&names, false)?;
    Ok(outcome.route(graph))
}

fn dedup<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    names.filter(|name| seen.insert(*name)).collect()
}

/// Graph indices of a finished plan.
#[derive(Debug)]
struct Outcome {
    /// Target indices in visiting order.
    order: Vec<usize>,
    /// Every node passed through, targets included.
    path: Vec<usize>,
    total_weight: f64,
    candidates: usize,
}

impl Outcome {
    fn route(&self, graph: &Graph) -> Route {
        Route::new(names(graph, &self.order))
    }

    fn shortcuts_used(&self, graph: &Graph) -> usize {
        self.path
            .windows(2)
            .filter(|pair| match pair {
                [from, to] => graph
                    .edge(*from, *to)
                    .is_some_and(|edge| edge.kind == EdgeKind::Shortcut),
                _ => false,
            })
            .count()
    }
}

fn names(graph: &Graph, indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .filter_map(|&idx| graph.name(idx).map(str::to_owned))
        .collect()
}

/// Leg weights for one planning mode.
struct Search<'g> {
    graph: &'g Graph,
    closure: Option<ShortestPaths>,
}

impl<'g> Search<'g> {
    fn new(graph: &'g Graph, mode: PlanningMode) -> Self {
        let closure = match mode {
            PlanningMode::Direct => None,
            PlanningMode::ShortestPath => Some(ShortestPaths::new(graph)),
        };
        Self { graph, closure }
    }

    fn weight(&self, from: usize, to: usize) -> Option<f64> {
        self.closure.as_ref().map_or_else(
            || self.graph.weight(from, to),
            |paths| paths.distance(from, to),
        )
    }

    fn run(&self, targets: &[&str], refine: bool) -> Result<Outcome, PlanError> {
        let nodes = targets
            .iter()
            .map(|&name| {
                self.graph
                    .index_of(name)
                    .ok_or_else(|| UnknownWaypoint::new(name))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let node = |local: usize| nodes.get(local).copied().unwrap_or_default();

        let greedy = greedy_path(nodes.len(), |i, j| self.weight(node(i), node(j))).map_err(
            |Disconnected { unreached }| PlanError::DisconnectedTargets {
                unreached: unreached
                    .into_iter()
                    .filter_map(|local| targets.get(local).map(|&name| name.to_owned()))
                    .collect(),
            },
        )?;

        let mut order: Vec<usize> = greedy.order.into_iter().map(node).collect();
        if refine {
            let moves = two_opt(&mut order, |a, b| {
                self.weight(a, b).unwrap_or(f64::INFINITY)
            });
            log::debug!("2-opt applied {moves} segment reversals");
        }

        let total_weight = sum_legs(&order, |a, b| self.weight(a, b).unwrap_or(0.0));
        let path = self.expand(&order);
        Ok(Outcome {
            order,
            path,
            total_weight,
            candidates: greedy.candidates,
        })
    }

    /// Expand each leg of `order` into the nodes it passes through.
    fn expand(&self, order: &[usize]) -> Vec<usize> {
        let Some(paths) = &self.closure else {
            return order.to_vec();
        };
        let mut expanded: Vec<usize> = order.first().copied().into_iter().collect();
        for pair in order.windows(2) {
            if let [from, to] = pair {
                let leg = paths.path(*from, *to).unwrap_or_else(|| vec![*from, *to]);
                expanded.extend(leg.into_iter().skip(1));
            }
        }
        expanded
    }
}

/// Greedy-edge planner over a read-only [`WaypointStore`].
///
/// Each call builds a fresh graph from the request, so a single planner can
/// serve concurrent callers.
///
/// # Examples
/// ```rust
/// use waypath_core::test_support::right_triangle;
/// use waypath_core::{PlanRequest, Planner, Shortcut};
/// use waypath_planner::GreedyPlanner;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let planner = GreedyPlanner::new(right_triangle());
/// let request = PlanRequest::new(["A", "B", "C"]).with_shortcut(Shortcut::new("A", "C"));
/// let response = planner.plan(&request)?;
/// assert_eq!(response.route.to_string(), "B -> A -> C");
/// assert_eq!(response.total_weight, 11.0);
/// assert_eq!(response.diagnostics.shortcuts_used, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GreedyPlanner<S> {
    store: S,
    config: GreedyPlannerConfig,
}

impl<S> GreedyPlanner<S>
where
    S: WaypointStore,
{
    /// Construct a planner using default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, GreedyPlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    pub const fn with_config(store: S, config: GreedyPlannerConfig) -> Self {
        Self { store, config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &GreedyPlannerConfig {
        &self.config
    }
}

impl<S> Planner for GreedyPlanner<S>
where
    S: WaypointStore + Send + Sync,
{
    fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, PlanError> {
        request.validate()?;
        let started_at = Instant::now();

        let targets = request.unique_targets();
        let graph = GraphBuilder::new(&self.store)
            .with_shortcut_weight(self.config.shortcut_weight)
            .build(&targets, &request.shortcuts)?;

        if targets.is_empty() {
            return Ok(PlanResponse::empty(Diagnostics {
                solve_time: started_at.elapsed(),
                ..Diagnostics::default()
            }));
        }

        let outcome = Search::new(&graph, self.config.mode).run(&targets, self.config.refine)?;
        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            candidate_edges: u64::try_from(outcome.candidates).unwrap_or(u64::MAX),
            shortcuts_used: u64::try_from(outcome.shortcuts_used(&graph)).unwrap_or(u64::MAX),
        };
        log::debug!(
            "planned {} targets (weight {:.3}, {} shortcuts, {:?} mode) in {:?}",
            targets.len(),
            outcome.total_weight,
            diagnostics.shortcuts_used,
            self.config.mode,
            diagnostics.solve_time
        );

        Ok(PlanResponse {
            route: outcome.route(&graph),
            total_weight: outcome.total_weight,
            path: names(&graph, &outcome.path),
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests;
