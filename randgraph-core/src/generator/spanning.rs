//! Randomised spanning backbone that guarantees connectivity.

use std::hash::Hash;

use rand::{Rng, seq::SliceRandom};

use crate::store::{GraphStore, Node};

/// Chance that a directed spanning edge also receives its reverse edge.
pub const RECIPROCAL_PROBABILITY: f64 = 0.25;

/// Summary of the spanning phase.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) struct SpanningOutcome {
    /// Edges added to attach each node to the growing component.
    pub(super) spanning_edges: usize,
    /// Reverse edges added alongside directed spanning edges.
    pub(super) reciprocal_edges: usize,
    /// Edge budget left after reciprocal edges were charged against it.
    pub(super) budget: usize,
}

/// Connects every node in `nodes` to a single component.
///
/// The node order is shuffled, the first node seeds the connected set, and
/// each remaining node is attached to a uniformly chosen connected node. In
/// directed graphs the edge runs from the connected node to the newcomer;
/// while `budget > 1` each such edge gets its reverse with probability
/// [`RECIPROCAL_PROBABILITY`], and every reverse edge is charged against
/// `budget`.
pub(super) fn connect_spanning<L, R>(
    graph: &mut GraphStore<L>,
    nodes: &[Node<L>],
    budget: usize,
    rng: &mut R,
) -> SpanningOutcome
where
    L: Clone + Eq + Hash,
    R: Rng + ?Sized,
{
    let mut outcome = SpanningOutcome {
        budget,
        ..SpanningOutcome::default()
    };
    let mut remaining = nodes.to_vec();
    remaining.shuffle(rng);
    if remaining.is_empty() {
        return outcome;
    }
    let mut connected = vec![remaining.remove(0)];
    connected.reserve(remaining.len());

    while !remaining.is_empty() {
        let Some(anchor) = connected.choose(rng).cloned() else {
            break;
        };
        let newcomer = remaining.swap_remove(rng.gen_range(0..remaining.len()));
        graph.add_edge(anchor.clone(), newcomer.clone());
        outcome.spanning_edges += 1;

        if graph.is_directed() && outcome.budget > 1 && rng.gen_bool(RECIPROCAL_PROBABILITY) {
            graph.add_edge(newcomer.clone(), anchor);
            outcome.reciprocal_edges += 1;
            outcome.budget -= 1;
        }
        connected.push(newcomer);
    }
    outcome
}
