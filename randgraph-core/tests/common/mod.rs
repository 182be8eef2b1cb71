use std::hash::Hash;

use randgraph_core::{GraphStore, Node};

/// Ordered list of the graph's nodes.
pub fn node_list<L: Clone + Eq + Hash>(graph: &GraphStore<L>) -> Vec<Node<L>> {
    graph.nodes().cloned().collect()
}

/// Every edge as an owned `(source, target)` pair.
pub fn edge_pairs<L: Clone + Eq + Hash>(graph: &GraphStore<L>) -> Vec<(Node<L>, Node<L>)> {
    graph
        .edges()
        .into_iter()
        .map(|edge| (edge.source.clone(), edge.target.clone()))
        .collect()
}

/// Lowercase ASCII labels `a`, `b`, ... of the requested length.
pub fn alphabet(len: usize) -> Vec<String> {
    ('a'..='z')
        .cycle()
        .enumerate()
        .take(len)
        .map(|(index, letter)| {
            if index < 26 {
                letter.to_string()
            } else {
                format!("{letter}{index}")
            }
        })
        .collect()
}
