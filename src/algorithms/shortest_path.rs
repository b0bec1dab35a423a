//! Shortest path algorithms: BFS path reconstruction and Dijkstra
//!
//! Provides shortest path computation for both graph flavors:
//! - `shortest_path`: Fewest-hops path in an unweighted graph
//! - `dijkstra`: Single-source shortest distances with non-negative weights
//!
//! # Example
//!
//! ```
//! use arbor_graph::{dijkstra, WeightedGraph};
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_edge("a", "b", 1.0);
//! graph.add_edge("b", "c", 2.0);
//! graph.add_edge("a", "c", 5.0);
//!
//! let distances = dijkstra(&graph, &"a").unwrap();
//! assert_eq!(distances[&"a"], 0.0);
//! assert_eq!(distances[&"b"], 1.0);
//! assert_eq!(distances[&"c"], 3.0); // a→b→c beats the direct 5.0 edge
//! ```

use crate::algorithms::AlgorithmError;
use crate::storage::{Graph, Node, WeightedGraph};
use anyhow::Result;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

/// State for Dijkstra's priority queue
struct State<N> {
    cost: f32,
    node: N,
}

impl<N: PartialEq> PartialEq for State<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.node == other.node
    }
}

impl<N: Eq> Eq for State<N> {}

impl<N: Eq> Ord for State<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other.cost.partial_cmp(&self.cost).unwrap_or(Ordering::Equal)
    }
}

impl<N: Eq> PartialOrd for State<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the fewest-hops path between two nodes of an unweighted graph
///
/// Runs a breadth-first exploration that records a parent pointer for each
/// newly discovered node and stops the instant `target` is first discovered.
/// Because BFS discovers nodes in non-decreasing hop-distance order, that
/// first discovery is a shortest path; it is reconstructed by walking the
/// parent chain back to `source` and reversing.
///
/// # Arguments
///
/// * `graph` - Adjacency-list graph
/// * `source` - Path start
/// * `target` - Path end
///
/// # Returns
///
/// * `Some(path)` from `source` to `target` inclusive; `vec![source]` when
///   the two are equal
/// * `None` if `target` is unreachable from `source`
///
/// # Errors
///
/// Returns [`AlgorithmError::UndefinedStart`] if `source` is not in the
/// graph. An absent `target` is simply unreachable, not an error.
///
/// # Example
///
/// ```
/// use arbor_graph::{shortest_path, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_undirected_edge("a", "b");
/// graph.add_undirected_edge("b", "c");
///
/// let path = shortest_path(&graph, &"a", &"c").unwrap();
/// assert_eq!(path, Some(vec!["a", "b", "c"]));
///
/// let missing = shortest_path(&graph, &"a", &"z").unwrap();
/// assert_eq!(missing, None);
/// ```
pub fn shortest_path<N: Node>(graph: &Graph<N>, source: &N, target: &N) -> Result<Option<Vec<N>>> {
    if !graph.contains(source) {
        return Err(AlgorithmError::UndefinedStart(format!("{source:?}")).into());
    }

    if source == target {
        return Ok(Some(vec![source.clone()]));
    }

    let mut visited = HashSet::new();
    let mut parent: HashMap<N, N> = HashMap::new();
    let mut queue = VecDeque::new();

    visited.insert(source.clone());
    queue.push_back(source.clone());

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(&current) {
            if !visited.contains(neighbor) {
                visited.insert(neighbor.clone());
                parent.insert(neighbor.clone(), current.clone());

                // First discovery of the target is the shortest path
                if neighbor == target {
                    return Ok(Some(reconstruct_path(&parent, target)));
                }
                queue.push_back(neighbor.clone());
            }
        }
    }

    Ok(None)
}

/// Walk parent pointers from `target` back to the source, then reverse
fn reconstruct_path<N: Node>(parent: &HashMap<N, N>, target: &N) -> Vec<N> {
    let mut path = vec![target.clone()];
    let mut current = target;
    while let Some(previous) = parent.get(current) {
        path.push(previous.clone());
        current = previous;
    }
    path.reverse();
    path
}

/// Compute single-source shortest distances using Dijkstra's algorithm
///
/// Distances start at `f32::INFINITY` for every node and 0 for `start`. The
/// frontier is a binary heap of `(cost, node)` entries; a popped entry whose
/// cost exceeds the authoritative distance has been superseded and is
/// discarded without relaxation. That lazy deletion lets the heap hold
/// multiple entries per node instead of requiring a decrease-key operation.
/// Each relaxation that improves a distance pushes a fresh entry.
///
/// # Arguments
///
/// * `graph` - Weighted adjacency-list graph, all weights non-negative
/// * `start` - The source node
///
/// # Returns
///
/// A map from every node of the graph to its shortest distance from `start`;
/// nodes never reached keep the `f32::INFINITY` sentinel.
///
/// # Errors
///
/// * [`AlgorithmError::UndefinedStart`] if `start` is not in the graph
/// * [`AlgorithmError::NegativeWeight`] if any edge weight is negative; the
///   greedy finalization argument only holds for non-negative weights, so
///   the input is rejected instead of computing a silently wrong answer
///
/// # Complexity
///
/// O((V + E) log V) with the binary heap.
///
/// # Example
///
/// ```
/// use arbor_graph::{dijkstra, WeightedGraph};
///
/// let mut graph = WeightedGraph::new();
/// graph.add_edge("a", "b", 4.0);
/// graph.add_edge("a", "c", 1.0);
/// graph.add_edge("c", "b", 2.0);
///
/// let distances = dijkstra(&graph, &"a").unwrap();
/// // Shortest to b: a→c→b = 3.0 (not a→b = 4.0)
/// assert_eq!(distances[&"b"], 3.0);
/// ```
pub fn dijkstra<N: Node>(graph: &WeightedGraph<N>, start: &N) -> Result<HashMap<N, f32>> {
    if !graph.contains(start) {
        return Err(AlgorithmError::UndefinedStart(format!("{start:?}")).into());
    }

    for (source, edges) in graph.iter_adjacency() {
        for (target, weight) in edges {
            if *weight < 0.0 {
                return Err(AlgorithmError::NegativeWeight {
                    src: format!("{source:?}"),
                    target: format!("{target:?}"),
                    weight: *weight,
                }
                .into());
            }
        }
    }

    let mut distances: HashMap<N, f32> = graph
        .nodes()
        .map(|node| (node.clone(), f32::INFINITY))
        .collect();
    distances.insert(start.clone(), 0.0);

    let mut heap = BinaryHeap::new();
    heap.push(State {
        cost: 0.0,
        node: start.clone(),
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Stale entry, superseded by an earlier relaxation
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for (neighbor, weight) in graph.neighbors(&node) {
            let candidate = cost + weight;

            let is_shorter = distances
                .get(neighbor)
                .map_or(true, |&current| candidate < current);

            if is_shorter {
                distances.insert(neighbor.clone(), candidate);
                heap.push(State {
                    cost: candidate,
                    node: neighbor.clone(),
                });
            }
        }
    }

    Ok(distances)
}
