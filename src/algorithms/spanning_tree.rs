//! Minimum spanning tree construction (Prim's algorithm)
//!
//! Lazy-deletion Prim: the frontier is a binary heap of candidate edges, and
//! entries whose far endpoint was claimed by a cheaper edge are discarded on
//! pop, the same superseded-entry pattern Dijkstra applies to distances.

use crate::algorithms::AlgorithmError;
use crate::storage::{Node, WeightedGraph};
use anyhow::Result;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

/// An edge accepted into a spanning tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEdge<N> {
    /// Endpoint already inside the tree when the edge was accepted
    pub source: N,
    /// Endpoint the edge brought into the tree
    pub target: N,
    /// Edge weight
    pub weight: f32,
}

/// Spanning tree result
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<N> {
    /// Accepted edges, in acceptance order
    pub edges: Vec<TreeEdge<N>>,

    /// Sum of the accepted edges' weights
    pub total_weight: f32,
}

impl<N> SpanningTree<N> {
    /// Number of nodes the tree spans (tree edges + the start node)
    ///
    /// Zero for the empty tree produced from an empty graph.
    #[must_use]
    pub fn num_spanned_nodes(&self) -> usize {
        if self.edges.is_empty() {
            0
        } else {
            self.edges.len() + 1
        }
    }
}

/// Candidate edge in Prim's priority queue
struct EdgeState<N> {
    weight: f32,
    source: N,
    target: N,
}

impl<N: PartialEq> PartialEq for EdgeState<N> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.source == other.source && self.target == other.target
    }
}

impl<N: Eq> Eq for EdgeState<N> {}

impl<N: Eq> Ord for EdgeState<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
    }
}

impl<N: Eq> PartialOrd for EdgeState<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build a minimum spanning tree with Prim's algorithm
///
/// Grows a tree greedily from `start` over a connected weighted graph with
/// undirected semantics (each edge present from both endpoints, as
/// [`WeightedGraph::add_undirected_edge`] inserts them). The frontier holds
/// every candidate edge leaving the tree; the minimum-weight candidate whose
/// far endpoint is still outside the tree is accepted, and the new node's
/// outgoing edges join the frontier. Candidates whose far endpoint was
/// already claimed are stale and skipped on pop.
///
/// If the graph is disconnected, the result covers only `start`'s component:
/// a spanning tree of that component, not of the whole graph. Callers that
/// need full coverage of disconnected inputs want Kruskal's algorithm with a
/// union-find over components instead; this implementation does not signal
/// the shortfall. [`SpanningTree::num_spanned_nodes`] tells how far the tree
/// reached.
///
/// # Arguments
///
/// * `graph` - Weighted graph with undirected edge semantics
/// * `start` - Node to grow the tree from
///
/// # Returns
///
/// The accepted edges in acceptance order and their total weight. An empty
/// graph yields an empty tree with weight 0.
///
/// # Errors
///
/// Returns [`AlgorithmError::UndefinedStart`] if the graph is non-empty and
/// `start` is not in it.
///
/// # Example
///
/// ```
/// use arbor_graph::{minimum_spanning_tree, WeightedGraph};
///
/// let mut graph = WeightedGraph::new();
/// graph.add_undirected_edge("a", "b", 4.0);
/// graph.add_undirected_edge("a", "c", 2.0);
/// graph.add_undirected_edge("b", "c", 5.0);
///
/// let tree = minimum_spanning_tree(&graph, &"a").unwrap();
/// assert_eq!(tree.edges.len(), 2);
/// assert_eq!(tree.total_weight, 6.0); // a-c (2) + a-b (4)
/// ```
pub fn minimum_spanning_tree<N: Node>(
    graph: &WeightedGraph<N>,
    start: &N,
) -> Result<SpanningTree<N>> {
    if graph.num_nodes() == 0 {
        return Ok(SpanningTree {
            edges: Vec::new(),
            total_weight: 0.0,
        });
    }
    if !graph.contains(start) {
        return Err(AlgorithmError::UndefinedStart(format!("{start:?}")).into());
    }

    let mut visited = HashSet::new();
    visited.insert(start.clone());

    let mut frontier = BinaryHeap::new();
    for (neighbor, weight) in graph.neighbors(start) {
        frontier.push(EdgeState {
            weight: *weight,
            source: start.clone(),
            target: neighbor.clone(),
        });
    }

    let mut edges = Vec::new();
    let mut total_weight = 0.0;

    while let Some(EdgeState {
        weight,
        source,
        target,
    }) = frontier.pop()
    {
        // Stale candidate: endpoint claimed by a cheaper edge
        if visited.contains(&target) {
            continue;
        }
        visited.insert(target.clone());

        for (next, next_weight) in graph.neighbors(&target) {
            if !visited.contains(next) {
                frontier.push(EdgeState {
                    weight: *next_weight,
                    source: target.clone(),
                    target: next.clone(),
                });
            }
        }

        total_weight += weight;
        edges.push(TreeEdge {
            source,
            target,
            weight,
        });
    }

    Ok(SpanningTree {
        edges,
        total_weight,
    })
}
