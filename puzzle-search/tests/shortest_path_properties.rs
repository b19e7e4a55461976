//! Property-based tests for the uninformed shortest-path engine
//!
//! On graphs small enough to enumerate every simple path, the engine must
//! agree exactly with exhaustive enumeration, and multi-start seeding
//! must behave like a virtual super-source.

use proptest::prelude::*;
use puzzle_search::shortest_path::{bfs_steps_to, dijkstra_cost_to, dijkstra_distances};
use puzzle_search::{SearchError, StateGraph, WeightedGraph};

/// Adjacency-list graph over nodes `0..n`.
#[derive(Debug, Clone)]
struct AdjGraph(Vec<Vec<(usize, u64)>>);

impl WeightedGraph for AdjGraph {
    type State = usize;
    type Cost = u64;

    fn successors(&self, node: &usize) -> Vec<(usize, u64)> {
        self.0[*node].clone()
    }
}

impl StateGraph for AdjGraph {
    type State = usize;

    fn neighbors(&self, node: &usize) -> Vec<usize> {
        self.0[*node].iter().map(|(next, _)| *next).collect()
    }
}

/// Exhaustive minimum over every simple path from `node` to `goal`.
///
/// With non-negative edge costs an optimal path never repeats a node, so
/// restricting to simple paths is lossless.
fn exhaustive_min(
    edges: &AdjGraph,
    node: usize,
    goal: usize,
    visited: &mut Vec<bool>,
    cost: u64,
    best: &mut Option<u64>,
) {
    if node == goal {
        *best = Some(best.map_or(cost, |b: u64| b.min(cost)));
        return;
    }
    for &(next, edge) in &edges.0[node] {
        if !visited[next] {
            visited[next] = true;
            exhaustive_min(edges, next, goal, visited, cost + edge, best);
            visited[next] = false;
        }
    }
}

fn brute_force(graph: &AdjGraph, start: usize, goal: usize) -> Option<u64> {
    let mut visited = vec![false; graph.0.len()];
    visited[start] = true;
    let mut best = None;
    exhaustive_min(graph, start, goal, &mut visited, 0, &mut best);
    best
}

fn arb_graph() -> impl Strategy<Value = AdjGraph> {
    (2usize..=8).prop_flat_map(|n| {
        proptest::collection::vec(
            proptest::collection::vec((0..n, 1u64..10), 0..=3),
            n,
        )
        .prop_map(AdjGraph)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// *For any* graph of at most 8 nodes and any goal, the engine's
    /// answer equals exhaustive enumeration of all simple paths.
    #[test]
    fn prop_dijkstra_matches_exhaustive_enumeration(graph in arb_graph(), goal_pick in 0usize..8) {
        let goal = goal_pick % graph.0.len();
        let engine = dijkstra_cost_to(&graph, [0usize], |&n| n == goal);
        match brute_force(&graph, 0, goal) {
            Some(expected) => prop_assert_eq!(engine, Ok(expected)),
            None => prop_assert_eq!(engine, Err(SearchError::NoPath)),
        }
    }

    /// *For any* graph, the full distance table agrees with per-node
    /// exhaustive enumeration, and unreachable nodes have no entry.
    #[test]
    fn prop_distance_table_matches_exhaustive_enumeration(graph in arb_graph()) {
        let table = dijkstra_distances(&graph, [0usize]);
        for node in 0..graph.0.len() {
            prop_assert_eq!(
                table.cost(&node),
                brute_force(&graph, 0, node),
                "table disagrees at node {}", node
            );
        }
    }

    /// *For any* graph and any pair of seeds, seeding both at cost zero
    /// equals taking the better of two single-seed runs (the virtual
    /// super-source construction).
    #[test]
    fn prop_multi_start_is_a_super_source(graph in arb_graph(), seed_pick in 0usize..8, goal_pick in 0usize..8) {
        let n = graph.0.len();
        let (second, goal) = (seed_pick % n, goal_pick % n);
        let joint = dijkstra_cost_to(&graph, [0, second], |&v| v == goal).ok();
        let from_first = dijkstra_cost_to(&graph, [0usize], |&v| v == goal).ok();
        let from_second = dijkstra_cost_to(&graph, [second], |&v| v == goal).ok();
        let best_single = match (from_first, from_second) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        prop_assert_eq!(joint, best_single);
    }

    /// *For any* graph, plain BFS over the unweighted view equals
    /// Dijkstra on the same graph with every edge forced to cost 1.
    #[test]
    fn prop_bfs_agrees_with_unit_cost_dijkstra(graph in arb_graph(), goal_pick in 0usize..8) {
        let goal = goal_pick % graph.0.len();
        let unit = AdjGraph(
            graph
                .0
                .iter()
                .map(|row| row.iter().map(|&(next, _)| (next, 1)).collect())
                .collect(),
        );
        let steps = bfs_steps_to(&graph, [0usize], |&n| n == goal);
        let cost = dijkstra_cost_to(&unit, [0usize], |&n| n == goal);
        prop_assert_eq!(steps.map(|s| s as u64), cost);
    }
}
