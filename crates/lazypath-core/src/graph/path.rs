//! Path reconstruction from predecessor links

use crate::graph::types::PredecessorTable;
use crate::graph::Vertex;

/// Walk predecessor links back from `target` to `start`.
///
/// Returns the path in start-to-target order, `[start]` when both are the
/// same vertex, and an empty vector when the chain ends (or loops) without
/// reaching `start`. Vertices missing from `prev` count as having no
/// predecessor.
pub fn reconstruct_path<V: Vertex>(
    prev: &PredecessorTable<V>,
    start: &V,
    target: &V,
) -> Vec<V> {
    let mut path = vec![target.clone()];
    let mut current = target;

    // A well-formed table never needs more steps than it has entries
    let mut remaining = prev.len();

    while current != start {
        let Some(pred) = prev.get(current).and_then(Option::as_ref) else {
            return Vec::new();
        };
        if remaining == 0 {
            tracing::warn!(start = %start, target = %target, "predecessor cycle, no path");
            return Vec::new();
        }
        remaining -= 1;

        path.push(pred.clone());
        current = pred;
    }

    path.reverse();
    path
}
