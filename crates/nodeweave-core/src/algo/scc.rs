//! Tarjan's strongly connected components.
//!
//! # Algorithm Overview
//!
//! A single depth-first traversal assigns each node two values:
//! - `index`: discovery order (0, 1, 2, ...)
//! - `low_link`: smallest index reachable from the node through the DFS tree
//!   plus at most one edge to a node still on the component stack
//!
//! Following an edge to an undiscovered node descends into it and, once that
//! node is finished, folds its `low_link` into the parent's. An edge to a node
//! still on the stack folds in that node's `index`. An edge to a discovered
//! node that is off the stack points into a component that is already closed
//! and is ignored.
//!
//! A node whose `low_link` equals its `index` roots a component: the stack is
//! popped down to and including it, and the popped nodes form one SCC.
//!
//! The traversal uses an explicit frame stack instead of recursion, so chain
//! depth is bounded by heap, not by the call stack.
//!
//! # Complexity
//!
//! - Time: O(V + E)
//! - Space: O(V) for markings, the component stack and the frame stack

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument, trace};

use crate::graph::{Graph, NodeId};

/// Per-node DFS bookkeeping.
#[derive(Debug, Clone, Copy)]
struct Marking {
    index: usize,
    low_link: usize,
    on_stack: bool,
}

/// A node whose descendants are still being explored.
struct Frame<N> {
    node: N,
    pending: Vec<N>,
}

/// Scratch state for one run of the algorithm.
struct TarjanState<N> {
    next_index: usize,
    markings: HashMap<N, Marking>,
    stack: Vec<N>,
}

impl<N: NodeId> TarjanState<N> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            next_index: 0,
            markings: HashMap::with_capacity(capacity),
            stack: Vec::new(),
        }
    }

    /// Discover `node`: assign its index, push it and return its frame.
    fn open<V>(&mut self, graph: &Graph<N, V>, node: N) -> Frame<N> {
        let index = self.next_index;
        self.next_index += 1;

        self.markings.insert(
            node.clone(),
            Marking {
                index,
                low_link: index,
                on_stack: true,
            },
        );
        self.stack.push(node.clone());

        let pending = graph
            .node(&node)
            .map(|n| n.descendant_ids.iter().cloned().collect())
            .unwrap_or_default();

        Frame { node, pending }
    }

    fn marking(&self, node: &N) -> Marking {
        *self
            .markings
            .get(node)
            .expect("every opened node carries a marking")
    }

    fn lower(&mut self, node: &N, candidate: usize) {
        if let Some(marking) = self.markings.get_mut(node) {
            marking.low_link = marking.low_link.min(candidate);
        }
    }

    /// Pop the stack down to and including `root`.
    fn close(&mut self, root: &N) -> HashSet<N> {
        let mut component = HashSet::new();

        while let Some(member) = self.stack.pop() {
            if let Some(marking) = self.markings.get_mut(&member) {
                marking.on_stack = false;
            }
            let reached_root = member == *root;
            component.insert(member);
            if reached_root {
                break;
            }
        }

        component
    }
}

impl<N: NodeId, V> Graph<N, V> {
    /// Partition the nodes into strongly connected components.
    ///
    /// Every node lands in exactly one component; nodes on no cycle form
    /// singletons, and a self-loop alone does not enlarge a component. The
    /// empty graph yields no components. The order of components is
    /// unspecified.
    ///
    /// # Panics
    ///
    /// Panics only if the traversal's own bookkeeping is inconsistent, which
    /// indicates a bug in this module.
    #[instrument(skip_all, fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn find_strongly_connected_components(&self) -> Vec<HashSet<N>> {
        let mut state = TarjanState::with_capacity(self.nodes.len());
        let mut components = Vec::new();

        for root in self.nodes.keys() {
            if state.markings.contains_key(root) {
                continue;
            }

            let mut frames = vec![state.open(self, root.clone())];

            while let Some(frame) = frames.last_mut() {
                if let Some(descendant) = frame.pending.pop() {
                    let seen = state
                        .markings
                        .get(&descendant)
                        .map(|m| (m.on_stack, m.index));

                    match seen {
                        None => {
                            let child = state.open(self, descendant);
                            frames.push(child);
                        }
                        Some((true, index)) => state.lower(&frame.node, index),
                        Some((false, _)) => {}
                    }
                    continue;
                }

                let Some(done) = frames.pop() else {
                    break;
                };
                let marking = state.marking(&done.node);

                if marking.low_link == marking.index {
                    let component = state.close(&done.node);
                    trace!(root = ?done.node, size = component.len(), "closed component");
                    components.push(component);
                }

                if let Some(parent) = frames.last() {
                    state.lower(&parent.node, marking.low_link);
                }
            }
        }

        debug!(components = components.len(), "found strongly connected components");
        components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(components: Vec<HashSet<u32>>) -> Vec<Vec<u32>> {
        let mut out: Vec<Vec<u32>> = components
            .into_iter()
            .map(|c| {
                let mut v: Vec<u32> = c.into_iter().collect();
                v.sort_unstable();
                v
            })
            .collect();
        out.sort();
        out
    }

    #[test]
    fn empty_graph() {
        let graph: Graph<u32, u32> = Graph::new();
        assert!(graph.find_strongly_connected_components().is_empty());
    }

    #[test]
    fn graph_without_edges() {
        let graph = Graph::from_values([1, 2, 3], []);
        assert_eq!(
            sorted(graph.find_strongly_connected_components()),
            vec![vec![1], vec![2], vec![3]]
        );
    }

    #[test]
    fn chain_is_all_singletons() {
        let graph = Graph::from_values([1, 2, 3], [(1, 2), (2, 3)]);
        assert_eq!(
            sorted(graph.find_strongly_connected_components()),
            vec![vec![1], vec![2], vec![3]]
        );
    }

    #[test]
    fn one_big_cycle() {
        let graph = Graph::from_values([1, 2, 3, 4, 5], [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)]);
        assert_eq!(
            sorted(graph.find_strongly_connected_components()),
            vec![vec![1, 2, 3, 4, 5]]
        );
    }

    #[test]
    fn two_cycles_and_isolated_node() {
        let graph = Graph::from_values(
            [1, 2, 3, 4, 5, 6],
            [(2, 3), (3, 2), (4, 5), (5, 6), (6, 4)],
        );
        assert_eq!(
            sorted(graph.find_strongly_connected_components()),
            vec![vec![1], vec![2, 3], vec![4, 5, 6]]
        );
    }

    #[test]
    fn bridged_cycles_stay_separate() {
        let graph = Graph::from_values(
            [1, 2, 3, 4, 5, 6],
            [(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 6), (6, 4)],
        );
        assert_eq!(
            sorted(graph.find_strongly_connected_components()),
            vec![vec![1, 2, 3], vec![4, 5, 6]]
        );
    }

    #[test]
    fn self_loop_is_singleton() {
        let graph = Graph::from_values([1, 2], [(1, 1), (1, 2)]);
        assert_eq!(
            sorted(graph.find_strongly_connected_components()),
            vec![vec![1], vec![2]]
        );
    }

    #[test]
    fn cross_edge_into_closed_component_is_ignored() {
        // {1,2} is a cycle; 3 → 1 reaches it after it has been closed when
        // traversal starts at 1, and before it is opened when starting at 3.
        let graph = Graph::from_values([1, 2, 3], [(1, 2), (2, 1), (3, 1)]);
        assert_eq!(
            sorted(graph.find_strongly_connected_components()),
            vec![vec![1, 2], vec![3]]
        );
    }

    #[test]
    fn nested_cycles_merge() {
        // 1 → 2 → 3 → 1 and 3 → 4 → 2 share nodes: one component.
        let graph = Graph::from_values([1, 2, 3, 4], [(1, 2), (2, 3), (3, 1), (3, 4), (4, 2)]);
        assert_eq!(
            sorted(graph.find_strongly_connected_components()),
            vec![vec![1, 2, 3, 4]]
        );
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let n = 100_000u32;
        let graph = Graph::from_values(0..n, (1..n).map(|i| (i - 1, i)));
        let components = graph.find_strongly_connected_components();
        assert_eq!(components.len(), n as usize);
    }

    #[test]
    fn long_cycle_is_one_component() {
        let n = 50_000u32;
        let graph = Graph::from_values(0..n, (0..n).map(|i| (i, (i + 1) % n)));
        let components = graph.find_strongly_connected_components();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), n as usize);
    }
}
