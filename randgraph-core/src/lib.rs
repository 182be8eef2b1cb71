//! Weighted graph storage and randomised connected-graph generation.
//!
//! [`GraphStore`] is a plain weighted adjacency container. With the default
//! `generator` feature, [`RandomGraphBuilder`] produces a single random graph
//! whose node and edge counts fall within caller-supplied bounds and whose
//! nodes are all connected through a random spanning backbone.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
#[cfg(feature = "generator")]
#[cfg_attr(docsrs, doc(cfg(feature = "generator")))]
mod generator;
mod store;

pub use crate::{
    error::{GenerationError, GenerationErrorCode, Result},
    store::{DEFAULT_WEIGHT, Edge, GraphStore, NeighbourIter, Neighbours, Node},
};

#[cfg(feature = "generator")]
pub use crate::generator::{
    RECIPROCAL_PROBABILITY, RandomGraphBuilder, generate_graph, max_edge_count,
};
