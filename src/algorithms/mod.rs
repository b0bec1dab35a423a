//! Graph algorithms (traversal, shortest paths, spanning trees)
//!
//! Every algorithm consumes the graph by shared reference, runs to
//! completion, and returns a freshly allocated result owned by the caller.
//! Nothing here mutates the graph or keeps state between invocations.

use thiserror::Error;

pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;

pub use shortest_path::{dijkstra, shortest_path};
pub use spanning_tree::{minimum_spanning_tree, SpanningTree, TreeEdge};
pub use traversal::{bfs, dfs};

/// Input-contract violations shared across the algorithms
///
/// Expected outcomes are not errors: an unreachable target is reported as
/// `None` by [`shortest_path`], and a disconnected input to
/// [`minimum_spanning_tree`] yields the start component's tree.
#[derive(Debug, Error)]
pub enum AlgorithmError {
    /// Start node is not present in the graph
    ///
    /// Running any algorithm from an unknown node would return a degenerate
    /// single-node result with a misleadingly trivial visited/distance map,
    /// so the contract violation is reported instead.
    #[error("start node {0} is not present in the graph")]
    UndefinedStart(String),

    /// Negative edge weight where non-negative weights are required
    #[error("negative weight {weight} on edge {src} -> {target}")]
    NegativeWeight {
        /// Edge source node (debug-rendered)
        src: String,
        /// Edge target node (debug-rendered)
        target: String,
        /// The offending weight
        weight: f32,
    },
}
