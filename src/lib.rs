//! arbor-graph: embedded in-memory graph algorithms
//!
//! # Overview
//!
//! arbor-graph is a small building block for routing, network analysis, and
//! dependency resolution: adjacency-list graphs over any hashable node type,
//! plus the four classic algorithms over them. Graphs are plain values that
//! fit in working memory; every algorithm reads the graph through a shared
//! reference and returns an owned result.
//!
//! # Quick Start
//!
//! ```
//! use arbor_graph::{bfs, shortest_path, Graph};
//!
//! # fn main() -> arbor_graph::Result<()> {
//! let mut graph = Graph::new();
//! graph.add_undirected_edge("frankfurt", "mannheim");
//! graph.add_undirected_edge("frankfurt", "kassel");
//! graph.add_undirected_edge("mannheim", "karlsruhe");
//!
//! // Layer-ordered traversal
//! let order = bfs(&graph, &"frankfurt")?;
//! assert_eq!(order[0], "frankfurt");
//! assert_eq!(order.len(), 4);
//!
//! // Fewest-hops route
//! let route = shortest_path(&graph, &"kassel", &"karlsruhe")?;
//! assert_eq!(
//!     route,
//!     Some(vec!["kassel", "frankfurt", "mannheim", "karlsruhe"])
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Storage**: adjacency-list maps ([`Graph`], [`WeightedGraph`]) keyed by
//!   any `Eq + Hash + Clone + Debug` node type
//! - **Traversal**: [`bfs`] (layer order), [`dfs`] (explicit stack)
//! - **Shortest paths**: [`shortest_path`] (unweighted, BFS-based),
//!   [`dijkstra`] (non-negative weights, lazy-deletion heap)
//! - **Spanning trees**: [`minimum_spanning_tree`] (Prim, lazy deletion)
//!
//! All algorithms are synchronous, single-threaded pure computations; a
//! graph shared immutably between threads can serve concurrent calls.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod storage;

// Re-export core types
pub use algorithms::{
    bfs, dfs, dijkstra, minimum_spanning_tree, shortest_path, AlgorithmError, SpanningTree,
    TreeEdge,
};
pub use storage::{Graph, Node, WeightedGraph};

// Error type
pub use anyhow::{Error, Result};
