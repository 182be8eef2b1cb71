//! Benchmark parameter types.

use std::fmt;

use randgraph_core::{RandomGraphBuilder, max_edge_count};

/// Parameters for a single generation benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GenerationBenchParams {
    /// Exact number of nodes to sample.
    pub node_count: usize,
    /// Share of the simple-graph capacity to request as edges, in percent.
    pub density_percent: usize,
    /// Whether the generated graph is directed.
    pub directed: bool,
}

impl GenerationBenchParams {
    /// Edge target implied by the node count and density.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let capacity = max_edge_count(self.node_count, self.directed);
        let target = capacity.saturating_mul(self.density_percent) / 100;
        target.max(self.node_count.saturating_sub(1)).min(capacity)
    }

    /// Builder configured for exactly these parameters, drawing labels from
    /// `0..node_count`.
    #[must_use]
    pub fn builder(&self) -> RandomGraphBuilder<usize> {
        let edges = self.edge_count();
        RandomGraphBuilder::new(0..self.node_count)
            .with_node_range(self.node_count, self.node_count)
            .with_edge_range(edges, edges)
            .with_directed(self.directed)
    }
}

impl fmt::Display for GenerationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.directed { "directed" } else { "undirected" };
        write!(
            f,
            "n={},density={}%,{kind}",
            self.node_count, self.density_percent
        )
    }
}
