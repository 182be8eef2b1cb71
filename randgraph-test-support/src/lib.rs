//! Shared test utilities used across randgraph crates.

pub mod reachability;
pub mod tracing;
