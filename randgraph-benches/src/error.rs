//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of using
//! `.expect()`.

use randgraph_core::GenerationError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A warm-up generation rejected the benchmark parameters.
    #[error("graph generation failed: {0}")]
    Generation(#[from] GenerationError),
}
