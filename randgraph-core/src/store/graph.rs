//! Weighted adjacency container backing every generated graph.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    hash::Hash,
};

use super::{Neighbours, Node};

/// Weight assigned by [`GraphStore::add_edge`] when the caller does not pick one.
pub const DEFAULT_WEIGHT: u8 = 1;

/// Mutable set of nodes plus a weighted adjacency relation.
///
/// Node membership is the key set of the adjacency map, so every node named
/// by an edge is also a member of the store. Undirected stores mirror every
/// edge in both directions and add or remove the two entries together.
/// Directed stores only record the stated direction.
///
/// Mutations never fail: adding an existing node, or removing an absent
/// node or edge, is a no-op.
///
/// # Examples
/// ```
/// use randgraph_core::{GraphStore, Node};
///
/// let mut graph: GraphStore<&str> = GraphStore::undirected();
/// graph.add_edge(Node::new("a"), Node::new("b"));
/// graph.add_weighted_edge(Node::new("b"), Node::new("c"), 7);
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.weight(&Node::new("b"), &Node::new("a")), Some(&1));
/// assert_eq!(graph.weight(&Node::new("c"), &Node::new("b")), Some(&7));
/// ```
#[derive(Clone, Debug)]
pub struct GraphStore<L, W = u32> {
    directed: bool,
    adjacency: HashMap<Node<L>, HashMap<Node<L>, W>>,
}

/// A single edge borrowed from a [`GraphStore`].
#[derive(Debug, PartialEq, Eq)]
pub struct Edge<'a, L, W> {
    /// Node the edge leaves.
    pub source: &'a Node<L>,
    /// Node the edge enters.
    pub target: &'a Node<L>,
    /// Weight recorded for `source → target`.
    pub weight: &'a W,
}

impl<L: Eq + Hash, W: PartialEq> PartialEq for GraphStore<L, W> {
    fn eq(&self, other: &Self) -> bool {
        self.directed == other.directed && self.adjacency == other.adjacency
    }
}

impl<L: Eq + Hash, W: Eq> Eq for GraphStore<L, W> {}

impl<L: Eq + Hash, W> Default for GraphStore<L, W> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<L: Eq + Hash, W> GraphStore<L, W> {
    /// Creates an empty store. `directed` is fixed for the store's lifetime.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            adjacency: HashMap::new(),
        }
    }

    /// Creates an empty directed store.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected store.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Reports whether edges are recorded in one direction only.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Inserts `node` with no edges.
    ///
    /// Returns `false` and leaves the store untouched when the node is
    /// already present.
    pub fn add_node(&mut self, node: Node<L>) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, HashMap::new());
        true
    }

    /// Removes `node` together with every edge touching it.
    ///
    /// Returns whether the node was present.
    pub fn remove_node(&mut self, node: &Node<L>) -> bool {
        if self.adjacency.remove(node).is_none() {
            return false;
        }
        for targets in self.adjacency.values_mut() {
            targets.remove(node);
        }
        true
    }

    /// Removes the edge `source → target` and, for undirected stores, its
    /// mirror.
    ///
    /// Returns the weight that was recorded for `source → target`, or `None`
    /// when no such edge existed.
    pub fn remove_edge(&mut self, source: &Node<L>, target: &Node<L>) -> Option<W> {
        let removed = self
            .adjacency
            .get_mut(source)
            .and_then(|targets| targets.remove(target));
        if !self.directed {
            if let Some(reverse) = self.adjacency.get_mut(target) {
                reverse.remove(source);
            }
        }
        removed
    }

    /// Reports whether `node` is a member of the store.
    #[must_use]
    pub fn contains_node(&self, node: &Node<L>) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Reports whether the edge `source → target` is recorded.
    #[must_use]
    pub fn contains_edge(&self, source: &Node<L>, target: &Node<L>) -> bool {
        self.neighbours(source).contains(target)
    }

    /// Returns the weight of `source → target`, if the edge exists.
    #[must_use]
    pub fn weight(&self, source: &Node<L>, target: &Node<L>) -> Option<&W> {
        self.neighbours(source).get(target)
    }

    /// Returns the neighbour-to-weight view for `node`.
    ///
    /// The view is empty both for isolated nodes and for nodes the store has
    /// never seen.
    #[must_use]
    pub fn neighbours(&self, node: &Node<L>) -> Neighbours<'_, L, W> {
        Neighbours::new(self.adjacency.get(node))
    }

    /// Iterates over the member nodes in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<L>> + '_ {
        self.adjacency.keys()
    }

    /// Number of member nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Reports whether the store holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of edges. Mirrored undirected entries count once, as do
    /// self-loops.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.values().map(HashMap::len).sum();
        if self.directed {
            return entries;
        }
        let loops = self
            .adjacency
            .iter()
            .filter(|(node, targets)| targets.contains_key(*node))
            .count();
        (entries - loops) / 2 + loops
    }

    /// Lists every edge once.
    ///
    /// Directed stores yield each recorded direction. Undirected stores
    /// yield one orientation per mirrored pair.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge<'_, L, W>> {
        let mut emitted: HashSet<&Node<L>> = HashSet::new();
        let mut edges = Vec::new();
        for (source, targets) in &self.adjacency {
            for (target, weight) in targets {
                if self.directed || !emitted.contains(target) {
                    edges.push(Edge {
                        source,
                        target,
                        weight,
                    });
                }
            }
            if !self.directed {
                emitted.insert(source);
            }
        }
        edges
    }
}

impl<L: Clone + Eq + Hash, W: Clone> GraphStore<L, W> {
    /// Records `source → target` with `weight`, inserting either endpoint
    /// when missing.
    ///
    /// Any previous weight for the ordered pair is overwritten. Undirected
    /// stores also write `target → source`.
    pub fn add_weighted_edge(&mut self, source: Node<L>, target: Node<L>, weight: W) {
        let reverse = self.adjacency.entry(target.clone()).or_default();
        if !self.directed {
            reverse.insert(source.clone(), weight.clone());
        }
        self.adjacency
            .entry(source)
            .or_default()
            .insert(target, weight);
    }

    /// Records `source → target` with [`DEFAULT_WEIGHT`].
    pub fn add_edge(&mut self, source: Node<L>, target: Node<L>)
    where
        W: From<u8>,
    {
        self.add_weighted_edge(source, target, W::from(DEFAULT_WEIGHT));
    }
}

impl<L, W> fmt::Display for GraphStore<L, W>
where
    L: Eq + Hash + fmt::Display,
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (node, targets)) in self.adjacency.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{node}: {{")?;
            for (position, (target, weight)) in targets.iter().enumerate() {
                if position > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{target}: {weight}")?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}
