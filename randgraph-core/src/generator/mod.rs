//! Randomised connected-graph generation.
//!
//! [`RandomGraphBuilder`] samples nodes from a label pool, draws an edge
//! target, grows a random spanning backbone so the result is connected, and
//! then tops the graph up with uniformly chosen extra edges. All randomness
//! comes from the caller-supplied [`Rng`], so seeded runs are reproducible.

mod capacity;
mod pairing;
mod sampling;
mod spanning;


use std::{hash::Hash, ops::RangeInclusive};

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, info, instrument};

use crate::{
    error::{GenerationError, Result},
    store::GraphStore,
};

pub use capacity::max_edge_count;
pub use spanning::RECIPROCAL_PROBABILITY;

/// Configures and runs random connected-graph generation.
///
/// Defaults to using every label exactly once, no edges beyond the spanning
/// backbone, and an undirected graph.
///
/// # Examples
/// ```
/// use randgraph_core::RandomGraphBuilder;
///
/// let graph = RandomGraphBuilder::new(["a", "b", "c", "d"])
///     .with_node_range(4, 4)
///     .with_edge_range(3, 3)
///     .generate_seeded(7)
///     .expect("four nodes hold three edges");
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.edge_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct RandomGraphBuilder<L> {
    labels: Vec<L>,
    min_nodes: usize,
    max_nodes: usize,
    min_edges: usize,
    max_edges: usize,
    directed: bool,
}

impl<L> RandomGraphBuilder<L> {
    /// Creates a builder drawing node labels from `labels`.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::RandomGraphBuilder;
    ///
    /// let builder = RandomGraphBuilder::new(["x", "y", "z"]);
    /// assert_eq!(builder.node_range(), 3..=3);
    /// assert_eq!(builder.edge_range(), 0..=0);
    /// assert!(!builder.is_directed());
    /// ```
    #[must_use]
    pub fn new(labels: impl IntoIterator<Item = L>) -> Self {
        let labels: Vec<L> = labels.into_iter().collect();
        let pool = labels.len();
        Self {
            labels,
            min_nodes: pool,
            max_nodes: pool,
            min_edges: 0,
            max_edges: 0,
            directed: false,
        }
    }

    /// Sets the inclusive bounds for the number of sampled nodes.
    #[must_use]
    pub fn with_node_range(mut self, min: usize, max: usize) -> Self {
        self.min_nodes = min;
        self.max_nodes = max;
        self
    }

    /// Sets the inclusive bounds for the target edge count.
    #[must_use]
    pub fn with_edge_range(mut self, min: usize, max: usize) -> Self {
        self.min_edges = min;
        self.max_edges = max;
        self
    }

    /// Chooses between a directed and an undirected graph.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::RandomGraphBuilder;
    ///
    /// let builder = RandomGraphBuilder::new([1, 2]).with_directed(true);
    /// assert!(builder.is_directed());
    /// ```
    #[must_use]
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Returns the candidate label pool.
    #[must_use]
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Returns the configured node-count bounds.
    #[must_use]
    pub fn node_range(&self) -> RangeInclusive<usize> {
        self.min_nodes..=self.max_nodes
    }

    /// Returns the configured edge-count bounds.
    #[must_use]
    pub fn edge_range(&self) -> RangeInclusive<usize> {
        self.min_edges..=self.max_edges
    }

    /// Reports whether generated graphs are directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Checks the bounds without drawing anything.
    ///
    /// # Errors
    /// Returns [`GenerationError::NodeRangeExceedsPool`] when either node
    /// bound exceeds the pool size, and [`GenerationError::InvalidNodeRange`]
    /// or [`GenerationError::InvalidEdgeRange`] when a lower bound exceeds
    /// its upper bound.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::{GenerationError, RandomGraphBuilder};
    ///
    /// let err = RandomGraphBuilder::new(["a", "b", "c"])
    ///     .with_node_range(5, 5)
    ///     .validate()
    ///     .expect_err("three labels cannot back five nodes");
    /// assert_eq!(err, GenerationError::NodeRangeExceedsPool { min: 5, max: 5, pool: 3 });
    /// ```
    pub fn validate(&self) -> Result<()> {
        let pool = self.labels.len();
        if self.min_nodes > pool || self.max_nodes > pool {
            return Err(GenerationError::NodeRangeExceedsPool {
                min: self.min_nodes,
                max: self.max_nodes,
                pool,
            });
        }
        if self.min_nodes > self.max_nodes {
            return Err(GenerationError::InvalidNodeRange {
                min: self.min_nodes,
                max: self.max_nodes,
            });
        }
        if self.min_edges > self.max_edges {
            return Err(GenerationError::InvalidEdgeRange {
                min: self.min_edges,
                max: self.max_edges,
            });
        }
        Ok(())
    }
}

impl<L: Clone + Eq + Hash> RandomGraphBuilder<L> {
    /// Generates one connected graph using `rng` for every random choice.
    ///
    /// # Errors
    /// Returns the errors documented on [`Self::validate`], and
    /// [`GenerationError::EdgeCapacityExceeded`] when the drawn edge target
    /// exceeds the simple-graph capacity of the sampled nodes. No graph is
    /// produced on failure.
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::SmallRng};
    /// use randgraph_core::RandomGraphBuilder;
    ///
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// let graph = RandomGraphBuilder::new(0..10)
    ///     .with_node_range(4, 5)
    ///     .with_edge_range(10, 10)
    ///     .with_directed(true)
    ///     .generate(&mut rng)?;
    /// assert!((4..=5).contains(&graph.node_count()));
    /// assert_eq!(graph.edge_count(), 10);
    /// # Ok::<(), randgraph_core::GenerationError>(())
    /// ```
    #[instrument(
        name = "generator.generate",
        err,
        skip(self, rng),
        fields(
            min_nodes = self.min_nodes,
            max_nodes = self.max_nodes,
            min_edges = self.min_edges,
            max_edges = self.max_edges,
            pool = self.labels.len(),
            directed = self.directed,
        ),
    )]
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GraphStore<L>> {
        self.validate()?;

        let nodes = sampling::sample_nodes(&self.labels, self.min_nodes, self.max_nodes, rng);
        let target = capacity::draw_edge_target(
            self.min_edges,
            self.max_edges,
            nodes.len(),
            self.directed,
            rng,
        )?;
        debug!(nodes = nodes.len(), target, "sampled nodes and edge target");

        let mut graph = GraphStore::new(self.directed);
        for node in &nodes {
            graph.add_node(node.clone());
        }

        let spanning = spanning::connect_spanning(&mut graph, &nodes, target, rng);
        debug!(
            spanning_edges = spanning.spanning_edges,
            reciprocal_edges = spanning.reciprocal_edges,
            budget = spanning.budget,
            "spanning backbone built"
        );

        let remaining = spanning
            .budget
            .saturating_sub(nodes.len().saturating_sub(1));
        if remaining > 0 {
            let extra = pairing::add_extra_edges(&mut graph, &nodes, remaining, rng);
            debug!(requested = remaining, added = extra, "extra edges added");
        }

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph generation completed"
        );
        Ok(graph)
    }

    /// Generates one graph from a [`SmallRng`] seeded with `seed`.
    ///
    /// Equal seeds and equal builder settings yield equal graphs.
    ///
    /// # Errors
    /// Same as [`Self::generate`].
    pub fn generate_seeded(&self, seed: u64) -> Result<GraphStore<L>> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

/// Generates one connected graph in a single call.
///
/// Shorthand for configuring a [`RandomGraphBuilder`] and calling
/// [`RandomGraphBuilder::generate`].
///
/// # Errors
/// Same as [`RandomGraphBuilder::generate`].
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randgraph_core::{GenerationErrorCode, generate_graph};
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let err = generate_graph(3, 3, 4, 4, &["a", "b", "c"], false, &mut rng)
///     .expect_err("three undirected nodes hold at most three edges");
/// assert_eq!(err.code(), GenerationErrorCode::EdgeCapacityExceeded);
/// ```
pub fn generate_graph<L, R>(
    min_nodes: usize,
    max_nodes: usize,
    min_edges: usize,
    max_edges: usize,
    labels: &[L],
    directed: bool,
    rng: &mut R,
) -> Result<GraphStore<L>>
where
    L: Clone + Eq + Hash,
    R: Rng + ?Sized,
{
    RandomGraphBuilder::new(labels.iter().cloned())
        .with_node_range(min_nodes, max_nodes)
        .with_edge_range(min_edges, max_edges)
        .with_directed(directed)
        .generate(rng)
}
