#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};

use nodeweave_core::{EdgeId, Graph};
use proptest::prelude::*;

pub const MAX_NODES: u32 = 12;

/// A mutation applied to a graph under test.
#[derive(Debug, Clone)]
pub enum Op {
    Insert(u32),
    AddEdge(u32, u32, u64),
    RemoveEdge(u32, u32),
    RemoveNode(u32),
}

pub fn arb_op() -> impl Strategy<Value = Op> + Clone {
    prop_oneof![
        (0..MAX_NODES).prop_map(Op::Insert),
        (0..MAX_NODES, 0..MAX_NODES, 1u64..4).prop_map(|(a, b, c)| Op::AddEdge(a, b, c)),
        (0..MAX_NODES, 0..MAX_NODES).prop_map(|(a, b)| Op::RemoveEdge(a, b)),
        (0..MAX_NODES).prop_map(Op::RemoveNode),
    ]
}

pub fn apply(graph: &mut Graph<u32, u32>, op: &Op) {
    match *op {
        Op::Insert(id) => {
            graph.insert(id);
        }
        Op::AddEdge(a, b, count) => {
            let _ = graph.add_edge_with_count(a, b, count);
        }
        Op::RemoveEdge(a, b) => {
            graph.remove_edge_between(&a, &b);
        }
        Op::RemoveNode(id) => {
            graph.remove_node(&id);
        }
    }
}

/// Any directed graph over up to `MAX_NODES` nodes, self-loops included.
pub fn arb_graph() -> impl Strategy<Value = Graph<u32, u32>> + Clone {
    (1..=MAX_NODES)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n, 0..n), 0..(n as usize * 3)),
            )
        })
        .prop_map(|(n, edges)| Graph::from_values(0..n, edges))
}

/// A DAG: every edge runs from a lower to a higher node ID.
pub fn arb_dag() -> impl Strategy<Value = Graph<u32, u32>> + Clone {
    (2..=MAX_NODES)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n, 0..n), 0..(n as usize * 3)),
            )
        })
        .prop_map(|(n, pairs)| {
            let edges = pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (a.min(b), a.max(b)));
            Graph::from_values(0..n, edges)
        })
}

/// Every node reachable from `start` by a path of length >= 1.
pub fn reachable_from(graph: &Graph<u32, u32>, start: u32) -> HashSet<u32> {
    let mut seen = HashSet::new();
    let mut queue: VecDeque<u32> = graph
        .node(&start)
        .map(|node| node.descendant_ids().iter().copied().collect())
        .unwrap_or_default();

    while let Some(current) = queue.pop_front() {
        if seen.insert(current) {
            if let Some(node) = graph.node(&current) {
                queue.extend(node.descendant_ids().iter().copied());
            }
        }
    }
    seen
}

/// Full reachability relation of `graph`.
pub fn closure(graph: &Graph<u32, u32>) -> HashMap<u32, HashSet<u32>> {
    graph
        .node_ids()
        .map(|&id| (id, reachable_from(graph, id)))
        .collect()
}

pub fn edge_set(graph: &Graph<u32, u32>) -> HashSet<EdgeId<u32>> {
    graph.edge_ids().copied().collect()
}
