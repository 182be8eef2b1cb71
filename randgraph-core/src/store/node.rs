//! Label-backed node identity.

use std::fmt;

/// A graph vertex identified solely by the label it wraps.
///
/// Equality, hashing and ordering all delegate to the label, so two nodes
/// built from equal labels are the same vertex. The label cannot be changed
/// after construction.
///
/// # Examples
/// ```
/// use randgraph_core::Node;
///
/// let a = Node::new("a");
/// assert_eq!(a, Node::new("a"));
/// assert_eq!(*a.label(), "a");
/// assert_eq!(a.to_string(), "a");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Node<L>(L);

impl<L> Node<L> {
    /// Wraps `label` as a node.
    #[must_use]
    pub const fn new(label: L) -> Self {
        Self(label)
    }

    /// Returns the wrapped label.
    #[must_use]
    pub const fn label(&self) -> &L {
        &self.0
    }

    /// Consumes the node and returns its label.
    #[must_use]
    pub fn into_label(self) -> L {
        self.0
    }
}

impl<L> From<L> for Node<L> {
    fn from(label: L) -> Self {
        Self::new(label)
    }
}

impl<L: fmt::Display> fmt::Display for Node<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn equal_labels_collapse_in_sets() {
        let nodes: HashSet<Node<&str>> = ["a", "b", "a"].into_iter().map(Node::new).collect();
        assert_eq!(nodes.len(), 2);
        assert!(nodes.contains(&Node::new("a")));
    }

    #[rstest]
    fn ordering_follows_label() {
        let mut nodes = vec![Node::new(3), Node::new(1), Node::new(2)];
        nodes.sort();
        let labels: Vec<i32> = nodes.into_iter().map(Node::into_label).collect();
        assert_eq!(labels, vec![1, 2, 3]);
    }
}
