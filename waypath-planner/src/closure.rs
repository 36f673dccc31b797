//! All-pairs shortest paths over a [`Graph`].
//!
//! Used by [`PlanningMode::ShortestPath`](crate::PlanningMode::ShortestPath):
//! target-to-target costs become the cheapest chain of edges through any
//! node, shortcut endpoints included, and each leg can be expanded back
//! into the nodes it passes through.

use crate::Graph;

/// Distances and next hops for every ordered node pair.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ShortestPaths {
    n: usize,
    dist: Vec<f64>,
    next: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Floyd–Warshall over every edge of `graph`.
    #[expect(
        clippy::float_arithmetic,
        reason = "path costs are sums of edge weights"
    )]
    pub(crate) fn new(graph: &Graph) -> Self {
        let n = graph.node_count();
        let mut dist = vec![f64::INFINITY; n * n];
        let mut next = vec![None; n * n];
        for i in 0..n {
            if let Some(cell) = dist.get_mut(i * n + i) {
                *cell = 0.0;
            }
            if let Some(cell) = next.get_mut(i * n + i) {
                *cell = Some(i);
            }
        }
        for (i, j, edge) in graph.edges() {
            for (from, to) in [(i, j), (j, i)] {
                if let Some(cell) = dist.get_mut(from * n + to) {
                    *cell = edge.weight;
                }
                if let Some(cell) = next.get_mut(from * n + to) {
                    *cell = Some(to);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let Some(&via_k) = dist.get(i * n + k) else {
                    continue;
                };
                if !via_k.is_finite() {
                    continue;
                }
                let first_hop = next.get(i * n + k).copied().flatten();
                for j in 0..n {
                    let candidate = via_k + dist.get(k * n + j).copied().unwrap_or(f64::INFINITY);
                    if let Some(cell) = dist.get_mut(i * n + j)
                        && candidate < *cell
                    {
                        *cell = candidate;
                        if let Some(hop) = next.get_mut(i * n + j) {
                            *hop = first_hop;
                        }
                    }
                }
            }
        }

        Self { n, dist, next }
    }

    /// Cheapest cost from `from` to `to`, if reachable.
    ///
    /// Reachability follows the next-hop table, so a leg whose cost
    /// overflows to infinity is still reported.
    pub(crate) fn distance(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.n || to >= self.n {
            return None;
        }
        let idx = from * self.n + to;
        self.next.get(idx).copied().flatten()?;
        self.dist.get(idx).copied().filter(|d| !d.is_nan())
    }

    /// Nodes visited from `from` to `to`, both ends included.
    pub(crate) fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        self.distance(from, to)?;
        let mut nodes = vec![from];
        let mut current = from;
        while current != to {
            current = self.next.get(current * self.n + to).copied().flatten()?;
            nodes.push(current);
            if nodes.len() > self.n {
                return None;
            }
        }
        Some(nodes)
    }
}
