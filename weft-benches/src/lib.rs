//! Benchmark support crate for Weft.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for the shortest-path and spanning-tree engines.

pub mod error;
pub mod params;
pub mod source;
