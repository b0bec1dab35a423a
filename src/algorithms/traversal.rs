//! Graph traversal algorithms (BFS, DFS)
//!
//! Both traversals use an explicit frontier (queue or stack) with a
//! call-local visited set, so stack usage stays flat regardless of graph
//! depth and cyclic graphs terminate.

use crate::algorithms::AlgorithmError;
use crate::storage::{Graph, Node};
use anyhow::Result;
use std::collections::{HashSet, VecDeque};

/// Breadth-first traversal from a start node
///
/// Explores the graph layer by layer: every node at hop-distance `i` from
/// `start` is emitted before any node at distance `i + 1`. A node is marked
/// visited the moment it is enqueued, so each node enters the queue at most
/// once and cycles cannot loop the traversal. Within a layer, nodes follow
/// the adjacency-list order of their discoverers.
///
/// Nodes unreachable from `start` are simply absent from the result; a
/// disconnected graph is not an error.
///
/// # Arguments
///
/// * `graph` - Adjacency-list graph
/// * `start` - Node to start the traversal from
///
/// # Returns
///
/// Nodes in visitation order, beginning with `start`.
///
/// # Errors
///
/// Returns [`AlgorithmError::UndefinedStart`] if `start` is not in the graph.
///
/// # Example
///
/// ```
/// use arbor_graph::{bfs, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_undirected_edge("a", "b");
/// graph.add_undirected_edge("a", "c");
/// graph.add_undirected_edge("b", "d");
///
/// let order = bfs(&graph, &"a").unwrap();
/// assert_eq!(order, vec!["a", "b", "c", "d"]);
/// ```
pub fn bfs<N: Node>(graph: &Graph<N>, start: &N) -> Result<Vec<N>> {
    if !graph.contains(start) {
        return Err(AlgorithmError::UndefinedStart(format!("{start:?}")).into());
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    queue.push_back(start.clone());
    visited.insert(start.clone());

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(&current) {
            if !visited.contains(neighbor) {
                visited.insert(neighbor.clone());
                queue.push_back(neighbor.clone());
            }
        }
        order.push(current);
    }

    Ok(order)
}

/// Depth-first traversal from a start node
///
/// Uses an explicit stack instead of recursion, so arbitrarily deep graphs
/// cannot overflow the call stack. A node may be pushed once per incoming
/// edge seen before its first pop; it is recorded and expanded only on that
/// first pop, and later duplicate pops are skipped.
///
/// Neighbors of a popped node are pushed in reverse adjacency order so the
/// visitation order matches what the recursive formulation would produce
/// (left-to-right over each neighbor list). That ordering is a determinism
/// choice, not a correctness requirement.
///
/// # Arguments
///
/// * `graph` - Adjacency-list graph
/// * `start` - Node to start the traversal from
///
/// # Returns
///
/// Nodes in visitation order, beginning with `start`.
///
/// # Errors
///
/// Returns [`AlgorithmError::UndefinedStart`] if `start` is not in the graph.
///
/// # Example
///
/// ```
/// use arbor_graph::{dfs, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_edge("a", "b");
/// graph.add_edge("a", "c");
/// graph.add_edge("b", "d");
///
/// let order = dfs(&graph, &"a").unwrap();
/// assert_eq!(order, vec!["a", "b", "d", "c"]);
/// ```
pub fn dfs<N: Node>(graph: &Graph<N>, start: &N) -> Result<Vec<N>> {
    if !graph.contains(start) {
        return Err(AlgorithmError::UndefinedStart(format!("{start:?}")).into());
    }

    let mut visited = HashSet::new();
    let mut stack = vec![start.clone()];
    let mut order = Vec::new();

    while let Some(current) = stack.pop() {
        // Duplicate pop: already expanded via an earlier edge
        if visited.contains(&current) {
            continue;
        }
        visited.insert(current.clone());

        for neighbor in graph.neighbors(&current).iter().rev() {
            if !visited.contains(neighbor) {
                stack.push(neighbor.clone());
            }
        }
        order.push(current);
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn letter_graph() -> Graph<&'static str> {
        Graph::from_adjacency(HashMap::from([
            ("A", vec!["B", "C"]),
            ("B", vec!["A", "D", "E"]),
            ("C", vec!["A", "F"]),
            ("D", vec!["B"]),
            ("E", vec!["B", "F"]),
            ("F", vec!["C", "E"]),
        ]))
    }

    #[test]
    fn test_bfs_layer_order() {
        let graph = letter_graph();

        let order = bfs(&graph, &"A").unwrap();
        assert_eq!(order, vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_bfs_visits_each_node_once() {
        // Cycle: a → b → c → a
        let mut graph = Graph::new();
        graph.add_edge("a", "b");
        graph.add_edge("b", "c");
        graph.add_edge("c", "a");

        let order = bfs(&graph, &"a").unwrap();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_bfs_disconnected_component_absent() {
        let graph = Graph::from_adjacency(HashMap::from([
            ("1", vec!["2"]),
            ("2", vec!["1", "3"]),
            ("3", vec!["2"]),
            ("4", vec!["5"]),
            ("5", vec!["4"]),
        ]));

        let order = bfs(&graph, &"1").unwrap();
        assert_eq!(order, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_bfs_single_node() {
        let graph = Graph::from_adjacency(HashMap::from([("solo", vec![])]));

        let order = bfs(&graph, &"solo").unwrap();
        assert_eq!(order, vec!["solo"]);
    }

    #[test]
    fn test_bfs_undefined_start() {
        let graph = letter_graph();

        let err = bfs(&graph, &"Z").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AlgorithmError>(),
            Some(AlgorithmError::UndefinedStart(_))
        ));
    }

    #[test]
    fn test_dfs_matches_recursive_order() {
        // DAG where iterative order must equal the recursive formulation
        let graph = Graph::from_adjacency(HashMap::from([
            ("A", vec!["B", "C"]),
            ("B", vec!["D", "E"]),
            ("C", vec!["F"]),
            ("D", vec![]),
            ("E", vec!["F"]),
            ("F", vec![]),
        ]));

        let order = dfs(&graph, &"A").unwrap();
        assert_eq!(order, vec!["A", "B", "D", "E", "F", "C"]);
    }

    #[test]
    fn test_dfs_handles_cycles() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b");
        graph.add_edge("b", "c");
        graph.add_edge("c", "a");

        let order = dfs(&graph, &"a").unwrap();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dfs_duplicate_pushes_recorded_once() {
        // d is pushed by a and again by b before its first pop; the second
        // pop must be skipped
        let graph = Graph::from_adjacency(HashMap::from([
            ("a", vec!["b", "d"]),
            ("b", vec!["d"]),
            ("d", vec![]),
        ]));

        let order = dfs(&graph, &"a").unwrap();
        assert_eq!(order, vec!["a", "b", "d"]);
    }

    #[test]
    fn test_dfs_undefined_start() {
        let graph = letter_graph();

        let err = dfs(&graph, &"Z").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AlgorithmError>(),
            Some(AlgorithmError::UndefinedStart(_))
        ));
    }
}
