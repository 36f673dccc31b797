//! 2-opt improvement for open paths.
//!
//! Reversing `order[i..=j]` only changes the edge entering position `i` and
//! the edge leaving position `j`; either may be absent when the segment
//! touches an end of the path. Moves are applied first-improvement until a
//! full pass finds nothing or the pass limit is hit.

/// Improvements smaller than this are treated as noise.
const EPSILON: f64 = 1e-9;

/// Upper bound on full passes over the path.
pub(crate) const MAX_PASSES: usize = 64;

/// Apply improving segment reversals to `order` in place.
///
/// Returns the number of reversals applied. `weight` must be symmetric.
#[expect(
    clippy::float_arithmetic,
    reason = "move gains are differences of edge weights"
)]
pub(crate) fn two_opt<F>(order: &mut [usize], weight: F) -> usize
where
    F: Fn(usize, usize) -> f64,
{
    let len = order.len();
    if len < 3 {
        return 0;
    }
    let at = |order: &[usize], pos: usize| order.get(pos).copied();
    let leg = |a: Option<usize>, b: Option<usize>| match (a, b) {
        (Some(a), Some(b)) => weight(a, b),
        _ => 0.0,
    };

    let mut moves = 0;
    for _ in 0..MAX_PASSES {
        let mut improved = false;
        for i in 0..len - 1 {
            for j in i + 1..len {
                if i == 0 && j == len - 1 {
                    continue;
                }
                let before = i.checked_sub(1).and_then(|pos| at(order, pos));
                let first = at(order, i);
                let last = at(order, j);
                let after = at(order, j + 1);
                let delta = leg(before, last) + leg(first, after)
                    - leg(before, first)
                    - leg(last, after);
                if delta < -EPSILON
                    && let Some(segment) = order.get_mut(i..=j)
                {
                    segment.reverse();
                    moves += 1;
                    improved = true;
                }
            }
        }
        if !improved {
            break;
        }
    }
    moves
}
