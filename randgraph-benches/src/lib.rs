//! Benchmark support crate for randgraph.
//!
//! Provides parameter types and a setup error used by the Criterion
//! generation benchmarks.

pub mod error;
pub mod params;
