//! Weighted waypoint graph with geometric and shortcut edges.
//!
//! Nodes are the targets (first occurrence order) followed by any shortcut
//! endpoints not already present. Every pair of distinct nodes is joined;
//! declared shortcuts replace the straight-line weight of their own pair
//! and nothing else.

use std::collections::HashMap;

use geo::Coord;
use waypath_core::{PlanError, Shortcut, UnknownWaypoint, WaypointStore, euclidean};

/// Weight given to every shortcut edge unless configured otherwise.
pub const DEFAULT_SHORTCUT_WEIGHT: f64 = 1.0;

/// How an edge came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Straight-line distance between the two coordinates.
    Geometric,
    /// A declared shortcut at the fixed shortcut weight.
    Shortcut,
}

/// A weighted, undirected edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Traversal cost.
    pub weight: f64,
    /// Edge class.
    pub kind: EdgeKind,
}

/// Complete undirected graph over a planning run's waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    nodes: Vec<String>,
    index: HashMap<String, usize>,
    locations: Vec<Coord<f64>>,
    // Row-major `n * n`; `None` on the diagonal.
    edges: Vec<Option<Edge>>,
}

impl Graph {
    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node names in index order.
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Index of `name`, if it is a node.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Name of the node at `idx`.
    #[must_use]
    pub fn name(&self, idx: usize) -> Option<&str> {
        self.nodes.get(idx).map(String::as_str)
    }

    /// Coordinate of the node at `idx`.
    #[must_use]
    pub fn location(&self, idx: usize) -> Option<Coord<f64>> {
        self.locations.get(idx).copied()
    }

    /// Edge between two node indices. `None` for self-pairs or
    /// out-of-range indices.
    #[must_use]
    pub fn edge(&self, from: usize, to: usize) -> Option<Edge> {
        let n = self.node_count();
        if from >= n || to >= n {
            return None;
        }
        self.edges.get(from * n + to).copied().flatten()
    }

    /// Weight of the edge between two node indices.
    #[must_use]
    pub fn weight(&self, from: usize, to: usize) -> Option<f64> {
        self.edge(from, to).map(|edge| edge.weight)
    }

    /// Edge between two named nodes.
    #[must_use]
    pub fn edge_between(&self, from: &str, to: &str) -> Option<Edge> {
        self.edge(self.index_of(from)?, self.index_of(to)?)
    }

    /// Every edge once, as `(i, j, edge)` with `i < j`, in enumeration
    /// order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Edge)> + '_ {
        let n = self.node_count();
        (0..n).flat_map(move |i| {
            (i + 1..n).filter_map(move |j| self.edge(i, j).map(|edge| (i, j, edge)))
        })
    }

    /// Total weight of walking `names` in order.
    ///
    /// A name repeated back to back is a leg that stays put and weighs
    /// zero, matching `distance(a, a) == 0`; the graph itself stores no
    /// self-loops. Fails with [`PlanError::UnknownWaypoint`] if a name is
    /// not a node.
    pub fn route_weight<T: AsRef<str>>(&self, names: &[T]) -> Result<f64, PlanError> {
        let indices = names
            .iter()
            .map(|name| {
                let key = name.as_ref();
                self.index_of(key).ok_or_else(|| UnknownWaypoint::new(key))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(sum_legs(&indices, |from, to| {
            if from == to {
                0.0
            } else {
                // Distinct nodes are always joined.
                self.weight(from, to).unwrap_or(f64::INFINITY)
            }
        }))
    }
}

/// Sum `weight(a, b)` over consecutive pairs of `order`.
#[expect(
    clippy::float_arithmetic,
    reason = "route weights are sums of floating-point edge weights"
)]
pub(crate) fn sum_legs(order: &[usize], weight: impl Fn(usize, usize) -> f64) -> f64 {
    order
        .windows(2)
        .filter_map(|pair| match pair {
            [from, to] => Some(weight(*from, *to)),
            _ => None,
        })
        .fold(0.0, |total, leg| total + leg)
}

/// Builds a [`Graph`] from a store, targets and shortcuts.
///
/// # Examples
/// ```rust
/// use geo::Coord;
/// use waypath_core::{CoordinateMap, Shortcut};
/// use waypath_planner::{EdgeKind, GraphBuilder};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = CoordinateMap::new([
///     ("A", Coord { x: 0.0, y: 0.0 }),
///     ("B", Coord { x: 10.0, y: 0.0 }),
///     ("C", Coord { x: 10.0, y: 10.0 }),
/// ])?;
/// let graph = GraphBuilder::new(&store).build(&["A", "B", "C"], &[Shortcut::new("A", "C")])?;
///
/// let jump = graph.edge_between("C", "A").ok_or("missing edge")?;
/// assert_eq!(jump.kind, EdgeKind::Shortcut);
/// assert_eq!(jump.weight, 1.0);
/// assert_eq!(graph.edge_between("A", "B").map(|e| e.weight), Some(10.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder<'a, S: ?Sized> {
    store: &'a S,
    shortcut_weight: f64,
}

impl<'a, S> GraphBuilder<'a, S>
where
    S: WaypointStore + ?Sized,
{
    /// Builder using [`DEFAULT_SHORTCUT_WEIGHT`].
    pub const fn new(store: &'a S) -> Self {
        Self {
            store,
            shortcut_weight: DEFAULT_SHORTCUT_WEIGHT,
        }
    }

    /// Override the fixed shortcut weight.
    #[must_use]
    pub const fn with_shortcut_weight(mut self, weight: f64) -> Self {
        self.shortcut_weight = weight;
        self
    }

    /// Build the graph.
    ///
    /// Degenerate shortcuts and an unusable shortcut weight are rejected
    /// before any name is resolved.
    pub fn build<T: AsRef<str>>(
        &self,
        targets: &[T],
        shortcuts: &[Shortcut],
    ) -> Result<Graph, PlanError> {
        if !(self.shortcut_weight.is_finite() && self.shortcut_weight >= 0.0) {
            return Err(PlanError::InvalidShortcutWeight {
                weight: self.shortcut_weight,
            });
        }
        if let Some(shortcut) = shortcuts.iter().find(|s| s.is_degenerate()) {
            return Err(PlanError::DegenerateShortcut {
                name: shortcut.entry.clone(),
            });
        }

        let mut nodes: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let names = targets
            .iter()
            .map(|target| target.as_ref())
            .chain(shortcuts.iter().flat_map(Shortcut::endpoints));
        for name in names {
            if !index.contains_key(name) {
                index.insert(name.to_owned(), nodes.len());
                nodes.push(name.to_owned());
            }
        }

        let locations = nodes
            .iter()
            .map(|name| self.store.lookup(name))
            .collect::<Result<Vec<_>, _>>()?;

        let n = nodes.len();
        let mut edges = vec![None; n * n];
        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate().skip(i + 1) {
                let edge = Edge {
                    weight: euclidean(*from, *to),
                    kind: EdgeKind::Geometric,
                };
                set_symmetric(&mut edges, n, i, j, edge);
            }
        }

        for shortcut in shortcuts {
            let (Some(&i), Some(&j)) = (index.get(&shortcut.entry), index.get(&shortcut.exit))
            else {
                continue;
            };
            let walking = edges.get(i * n + j).copied().flatten();
            if let Some(existing) = walking
                && existing.kind == EdgeKind::Geometric
                && existing.weight <= self.shortcut_weight
            {
                log::warn!(
                    "shortcut {} -> {} costs {} but walking costs {}",
                    shortcut.entry,
                    shortcut.exit,
                    self.shortcut_weight,
                    existing.weight
                );
            }
            let edge = Edge {
                weight: self.shortcut_weight,
                kind: EdgeKind::Shortcut,
            };
            set_symmetric(&mut edges, n, i, j, edge);
        }

        log::debug!(
            "built waypoint graph: {} nodes ({} targets), {} shortcuts",
            n,
            targets.len(),
            shortcuts.len()
        );

        Ok(Graph {
            nodes,
            index,
            locations,
            edges,
        })
    }
}

fn set_symmetric(edges: &mut [Option<Edge>], n: usize, i: usize, j: usize, edge: Edge) {
    for slot in [i * n + j, j * n + i] {
        if let Some(cell) = edges.get_mut(slot) {
            *cell = Some(edge);
        }
    }
}

/// Build a graph with the default shortcut weight.
pub fn build<S, T>(store: &S, targets: &[T], shortcuts: &[Shortcut]) -> Result<Graph, PlanError>
where
    S: WaypointStore + ?Sized,
    T: AsRef<str>,
{
    GraphBuilder::new(store).build(targets, shortcuts)
}
