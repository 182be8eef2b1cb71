//! Edge-count target selection and simple-graph capacity checks.

use rand::Rng;

use crate::error::{GenerationError, Result};

/// Maximum number of edges a simple graph over `nodes` vertices can hold.
///
/// Self-loops and parallel edges in the same direction are excluded, giving
/// `k(k-1)` for directed graphs and `k(k-1)/2` otherwise.
#[must_use]
pub fn max_edge_count(nodes: usize, directed: bool) -> usize {
    let ordered = nodes.saturating_mul(nodes.saturating_sub(1));
    if directed { ordered } else { ordered / 2 }
}

/// Draws an edge target from `min..=max` and checks it fits `nodes`.
pub(super) fn draw_edge_target<R: Rng + ?Sized>(
    min: usize,
    max: usize,
    nodes: usize,
    directed: bool,
    rng: &mut R,
) -> Result<usize> {
    let requested = rng.gen_range(min..=max);
    let capacity = max_edge_count(nodes, directed);
    if requested > capacity {
        return Err(GenerationError::EdgeCapacityExceeded {
            requested,
            capacity,
            nodes,
            directed,
        });
    }
    Ok(requested)
}
