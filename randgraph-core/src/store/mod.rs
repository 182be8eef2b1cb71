//! Graph storage primitives.
//!
//! [`GraphStore`] owns a set of [`Node`]s and a weighted adjacency relation.
//! It carries no randomness and is the only surface the generator writes
//! through, so any renderer can consume a finished graph via [`GraphStore::nodes`]
//! and [`GraphStore::neighbours`].

mod graph;
mod neighbours;
mod node;

pub use graph::{DEFAULT_WEIGHT, Edge, GraphStore};
pub use neighbours::{NeighbourIter, Neighbours};
pub use node::Node;
