//! Selection of extra edges beyond the spanning backbone.

use std::hash::Hash;

use rand::{Rng, seq::SliceRandom};
use tracing::warn;

use crate::store::{GraphStore, Node};

/// Lists index pairs into `nodes` that are not yet joined by an edge.
///
/// Directed graphs consider every ordered pair; undirected graphs consider
/// each unordered pair once and skip it when either orientation exists.
/// Self-pairs are never candidates.
pub(super) fn candidate_pairs<L>(graph: &GraphStore<L>, nodes: &[Node<L>]) -> Vec<(usize, usize)>
where
    L: Eq + Hash,
{
    let mut pairs = Vec::new();
    for (source_index, source) in nodes.iter().enumerate() {
        for (target_index, target) in nodes.iter().enumerate() {
            let open = if graph.is_directed() {
                source_index != target_index && !graph.contains_edge(source, target)
            } else {
                source_index < target_index
                    && !graph.contains_edge(source, target)
                    && !graph.contains_edge(target, source)
            };
            if open {
                pairs.push((source_index, target_index));
            }
        }
    }
    pairs
}

/// Adds up to `budget` uniformly chosen candidate edges with the default
/// weight and returns how many were added.
///
/// When fewer candidates exist than `budget`, every candidate is added and
/// the shortfall is logged rather than reported as an error.
pub(super) fn add_extra_edges<L, R>(
    graph: &mut GraphStore<L>,
    nodes: &[Node<L>],
    budget: usize,
    rng: &mut R,
) -> usize
where
    L: Clone + Eq + Hash,
    R: Rng + ?Sized,
{
    let candidates = candidate_pairs(graph, nodes);
    let amount = budget.min(candidates.len());
    if amount < budget {
        warn!(
            requested = budget,
            available = candidates.len(),
            "not enough free node pairs, returning fewer edges than requested"
        );
    }
    let chosen: Vec<(usize, usize)> = candidates.choose_multiple(rng, amount).copied().collect();
    let mut added = 0;
    for (source_index, target_index) in chosen {
        if let (Some(source), Some(target)) = (nodes.get(source_index), nodes.get(target_index)) {
            graph.add_edge(source.clone(), target.clone());
            added += 1;
        }
    }
    added
}
