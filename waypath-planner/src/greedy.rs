//! Greedy-edge (multi-fragment) construction of an open path.
//!
//! Candidate edges are taken cheapest first. An edge is accepted when both
//! ends still have degree below two and the ends belong to different path
//! fragments. Fragments are tracked through their endpoints: each endpoint
//! stores the opposite end of its fragment, so the cycle check is a single
//! comparison.

/// Outcome of a greedy construction over `n` local indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GreedyPath {
    /// Local indices in visiting order.
    pub(crate) order: Vec<usize>,
    /// Number of candidate edges considered.
    pub(crate) candidates: usize,
}

/// Fragments could not be merged into one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Disconnected {
    /// Local indices outside the fragment containing index 0.
    pub(crate) unreached: Vec<usize>,
}

struct Fragments {
    degree: Vec<u8>,
    other_end: Vec<usize>,
    adjacency: Vec<Vec<usize>>,
}

impl Fragments {
    fn new(n: usize) -> Self {
        Self {
            degree: vec![0; n],
            other_end: (0..n).collect(),
            adjacency: vec![Vec::new(); n],
        }
    }

    fn degree(&self, node: usize) -> u8 {
        self.degree.get(node).copied().unwrap_or(u8::MAX)
    }

    fn other_end(&self, node: usize) -> usize {
        self.other_end.get(node).copied().unwrap_or(node)
    }

    fn can_join(&self, a: usize, b: usize) -> bool {
        self.degree(a) < 2 && self.degree(b) < 2 && self.other_end(a) != b
    }

    fn join(&mut self, a: usize, b: usize) {
        let end_a = self.other_end(a);
        let end_b = self.other_end(b);
        if let Some(slot) = self.other_end.get_mut(end_a) {
            *slot = end_b;
        }
        if let Some(slot) = self.other_end.get_mut(end_b) {
            *slot = end_a;
        }
        for (node, neighbour) in [(a, b), (b, a)] {
            if let Some(degree) = self.degree.get_mut(node) {
                *degree += 1;
            }
            if let Some(list) = self.adjacency.get_mut(node) {
                list.push(neighbour);
            }
        }
    }

    fn neighbours(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    /// Follow the path from `start` until it ends.
    fn walk_from(&self, start: usize) -> Vec<usize> {
        let mut order = vec![start];
        let mut previous = None;
        let mut current = start;
        while let Some(&next) = self
            .neighbours(current)
            .iter()
            .find(|&&candidate| Some(candidate) != previous)
        {
            order.push(next);
            previous = Some(current);
            current = next;
        }
        order
    }
}

/// Build an open path over `0..n` using `weight(i, j)` for `i < j`.
///
/// Pairs with no weight or a NaN weight are not candidates; infinite
/// weights sort last but still join fragments. Ties
/// keep enumeration order (`i` ascending, then `j`). The walk starts at the
/// path end with the smaller index.
pub(crate) fn greedy_path<F>(n: usize, weight: F) -> Result<GreedyPath, Disconnected>
where
    F: Fn(usize, usize) -> Option<f64>,
{
    let mut candidates: Vec<(usize, usize, f64)> = (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .filter_map(|(i, j)| {
            weight(i, j)
                .filter(|w| !w.is_nan())
                .map(|w| (i, j, w))
        })
        .collect();
    // `sort_by` is stable, which provides the enumeration-order tie-break.
    candidates.sort_by(|lhs, rhs| lhs.2.total_cmp(&rhs.2));

    let needed = n.saturating_sub(1);
    let mut fragments = Fragments::new(n);
    let mut accepted = 0_usize;
    for &(i, j, _) in &candidates {
        if accepted == needed {
            break;
        }
        if fragments.can_join(i, j) {
            fragments.join(i, j);
            accepted += 1;
        }
    }

    if n == 0 {
        return Ok(GreedyPath {
            order: Vec::new(),
            candidates: candidates.len(),
        });
    }

    if accepted < needed {
        let reached = fragments.walk_from(path_start(&fragments, 0));
        let unreached = (0..n).filter(|idx| !reached.contains(idx)).collect();
        return Err(Disconnected { unreached });
    }

    let start = (0..n)
        .find(|&node| fragments.degree(node) < 2)
        .unwrap_or_default();
    Ok(GreedyPath {
        order: fragments.walk_from(start),
        candidates: candidates.len(),
    })
}

/// End of the fragment containing `node` with the smaller index.
fn path_start(fragments: &Fragments, node: usize) -> usize {
    if fragments.degree(node) < 2 {
        node.min(fragments.other_end(node))
    } else {
        // Interior node: follow either neighbour to an end.
        let walked = fragments.walk_from(node);
        let end = walked.last().copied().unwrap_or(node);
        end.min(fragments.other_end(end))
    }
}
