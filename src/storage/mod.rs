//! Graph storage layer
//!
//! Provides the adjacency-list representations consumed by all algorithms.

pub mod adjacency;

pub use adjacency::{Graph, Node, WeightedGraph};
