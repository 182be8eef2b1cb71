//! Read-only view over a node's outgoing adjacency.

use std::{
    collections::{HashMap, hash_map},
    hash::Hash,
};

use super::Node;

/// Borrowed neighbour-to-weight mapping for a single node.
///
/// Unknown nodes and nodes without edges both yield an empty view, so
/// callers cannot use this accessor to test whether a node exists; use
/// [`crate::GraphStore::contains_node`] for that.
#[derive(Debug)]
pub struct Neighbours<'a, L, W> {
    inner: Option<&'a HashMap<Node<L>, W>>,
}

impl<L, W> Clone for Neighbours<'_, L, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, W> Copy for Neighbours<'_, L, W> {}

impl<'a, L: Eq + Hash, W> Neighbours<'a, L, W> {
    pub(super) const fn new(inner: Option<&'a HashMap<Node<L>, W>>) -> Self {
        Self { inner }
    }

    /// Returns the weight recorded towards `target`, if any.
    #[must_use]
    pub fn get(&self, target: &Node<L>) -> Option<&'a W> {
        self.inner.and_then(|map| map.get(target))
    }

    /// Reports whether an edge towards `target` is recorded.
    #[must_use]
    pub fn contains(&self, target: &Node<L>) -> bool {
        self.inner.is_some_and(|map| map.contains_key(target))
    }

    /// Number of neighbours.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.map_or(0, HashMap::len)
    }

    /// Reports whether the view holds no neighbours.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over `(neighbour, weight)` pairs in unspecified order.
    pub fn iter(&self) -> NeighbourIter<'a, L, W> {
        NeighbourIter {
            inner: self.inner.map(HashMap::iter),
        }
    }
}

impl<'a, L: Eq + Hash, W> IntoIterator for Neighbours<'a, L, W> {
    type Item = (&'a Node<L>, &'a W);
    type IntoIter = NeighbourIter<'a, L, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`Neighbours::iter`].
#[derive(Debug)]
pub struct NeighbourIter<'a, L, W> {
    inner: Option<hash_map::Iter<'a, Node<L>, W>>,
}

impl<'a, L, W> Iterator for NeighbourIter<'a, L, W> {
    type Item = (&'a Node<L>, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut().and_then(Iterator::next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}
