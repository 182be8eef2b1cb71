//! Node-count draw and label sampling.

use std::{collections::HashSet, hash::Hash};

use rand::{Rng, seq::SliceRandom};

use crate::store::Node;

/// Draws a node count from `min..=max` and samples that many labels without
/// replacement.
///
/// Equal labels collapse into one node, so the result may be shorter than the
/// drawn count when the pool holds duplicates. Sample order is preserved
/// otherwise, which keeps seeded runs reproducible. Callers validate the
/// bounds against the pool first.
pub(super) fn sample_nodes<L, R>(labels: &[L], min: usize, max: usize, rng: &mut R) -> Vec<Node<L>>
where
    L: Clone + Eq + Hash,
    R: Rng + ?Sized,
{
    let count = rng.gen_range(min..=max);
    let mut seen: HashSet<&L> = HashSet::with_capacity(count);
    labels
        .choose_multiple(rng, count)
        .filter(|label| seen.insert(*label))
        .map(|label| Node::new(label.clone()))
        .collect()
}
