//! Connectivity checks over plain edge lists.
//!
//! Kept independent of the core crate's types so any test can feed in
//! `(source, target)` pairs extracted from a graph.

use std::{
    collections::{HashMap, HashSet, VecDeque},
    hash::Hash,
};

/// Returns the nodes reachable from `start` when every edge is followed in
/// both directions.
///
/// `start` is always part of the result, even when no edge touches it.
///
/// # Examples
/// ```
/// use randgraph_test_support::reachability::undirected_reach;
///
/// let reach = undirected_reach(&1, &[(1, 2), (3, 2), (4, 5)]);
/// assert_eq!(reach.len(), 3);
/// assert!(!reach.contains(&4));
/// ```
#[must_use]
pub fn undirected_reach<N>(start: &N, edges: &[(N, N)]) -> HashSet<N>
where
    N: Clone + Eq + Hash,
{
    let mut adjacency: HashMap<&N, Vec<&N>> = HashMap::new();
    for (source, target) in edges {
        adjacency.entry(source).or_default().push(target);
        adjacency.entry(target).or_default().push(source);
    }

    let mut visited: HashSet<N> = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for &next in adjacency.get(node).into_iter().flatten() {
            if visited.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }
    visited
}

/// Reports whether every node in `nodes` lies in one undirected component.
///
/// Empty and single-node inputs are trivially connected.
///
/// # Examples
/// ```
/// use randgraph_test_support::reachability::is_weakly_connected;
///
/// assert!(is_weakly_connected(&["a", "b", "c"], &[("a", "b"), ("c", "b")]));
/// assert!(!is_weakly_connected(&["a", "b", "c"], &[("a", "b")]));
/// ```
#[must_use]
pub fn is_weakly_connected<N>(nodes: &[N], edges: &[(N, N)]) -> bool
where
    N: Clone + Eq + Hash,
{
    let Some(start) = nodes.first() else {
        return true;
    };
    let reach = undirected_reach(start, edges);
    nodes.iter().all(|node| reach.contains(node))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty(&[], &[], true)]
    #[case::single(&[0], &[], true)]
    #[case::isolated(&[0, 1], &[], false)]
    #[case::reversed_chain(&[0, 1, 2], &[(1, 0), (2, 1)], true)]
    #[case::split(&[0, 1, 2, 3], &[(0, 1), (2, 3)], false)]
    fn detects_weak_connectivity(
        #[case] nodes: &[u8],
        #[case] edges: &[(u8, u8)],
        #[case] expected: bool,
    ) {
        assert_eq!(is_weakly_connected(nodes, edges), expected);
    }

    #[rstest]
    fn start_is_reachable_without_edges() {
        let reach = undirected_reach(&7, &[(1, 2)]);
        assert_eq!(reach, HashSet::from([7]));
    }
}
