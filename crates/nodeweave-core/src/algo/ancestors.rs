//! Ancestor counts.
//!
//! Two flavours:
//!
//! - [`Graph::find_number_of_node_ancestors`]: the weighted recursive count.
//!   For a node `n`, the sum over every direct ancestor `a` of
//!   `count(a → n) + ancestors(a)`. Paths that converge are counted once per
//!   path, so the value grows with the number of weighted routes into `n`.
//!   Useful as a proxy for topological depth.
//! - [`Graph::count_reachable_ancestors`]: the number of distinct nodes from
//!   which `n` can be reached.
//!
//! # Cycles
//!
//! The weighted count is exact only on acyclic graphs. While a node is being
//! counted it is marked in progress; an ancestor that is still in progress
//! contributes its edge weight but no recursive count, so cyclic graphs
//! produce a finite but approximate result.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, instrument};

use crate::graph::{EdgeId, Graph, NodeId};

/// A node whose direct ancestors are still being summed.
struct Frame<'g, N> {
    node: &'g N,
    pending: Vec<&'g N>,
    total: u64,
}

impl<N: NodeId, V> Graph<N, V> {
    /// Weighted recursive ancestor count for every node.
    ///
    /// Sources map to 0. Counts saturate at `u64::MAX`. Exact on acyclic
    /// graphs only, see the module docs.
    #[instrument(skip_all, fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn find_number_of_node_ancestors(&self) -> HashMap<N, u64> {
        let mut counts: HashMap<&N, u64> = HashMap::with_capacity(self.nodes.len());
        let mut in_progress: HashSet<&N> = HashSet::new();

        let sinks = self.sinks().map(|node| &node.id);
        let roots: Vec<&N> = sinks.chain(self.nodes.keys()).collect();

        for root in roots {
            if counts.contains_key(root) {
                continue;
            }

            in_progress.insert(root);
            let mut frames = vec![self.open_frame(root)];

            while let Some(frame) = frames.last_mut() {
                if let Some(ancestor) = frame.pending.pop() {
                    let weight = self
                        .edges
                        .get(&EdgeId::new(ancestor.clone(), frame.node.clone()))
                        .map_or(0, |edge| edge.count);
                    frame.total = frame.total.saturating_add(weight);

                    if let Some(known) = counts.get(ancestor) {
                        frame.total = frame.total.saturating_add(*known);
                    } else if in_progress.insert(ancestor) {
                        frames.push(self.open_frame(ancestor));
                    }
                    continue;
                }

                let Some(done) = frames.pop() else {
                    break;
                };
                in_progress.remove(done.node);
                counts.insert(done.node, done.total);

                if let Some(parent) = frames.last_mut() {
                    parent.total = parent.total.saturating_add(done.total);
                }
            }
        }

        debug!(counted = counts.len(), "computed weighted ancestor counts");
        counts
            .into_iter()
            .map(|(id, count)| (id.clone(), count))
            .collect()
    }

    fn open_frame<'g>(&'g self, id: &'g N) -> Frame<'g, N> {
        let pending = self
            .nodes
            .get(id)
            .map(|node| node.ancestor_ids.iter().collect())
            .unwrap_or_default();
        Frame {
            node: id,
            pending,
            total: 0,
        }
    }

    /// Number of distinct nodes from which each node is reachable.
    ///
    /// A node counts itself only if it lies on a cycle (including a
    /// self-loop). Runs one backwards traversal per node, so it is
    /// O(V · (V + E)).
    #[instrument(skip_all, fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn count_reachable_ancestors(&self) -> HashMap<N, usize> {
        self.nodes
            .iter()
            .map(|(id, node)| {
                let mut seen: HashSet<&N> = HashSet::new();
                let mut queue: VecDeque<&N> = node.ancestor_ids.iter().collect();

                while let Some(current) = queue.pop_front() {
                    if !seen.insert(current) {
                        continue;
                    }
                    if let Some(ancestor) = self.nodes.get(current) {
                        queue.extend(ancestor.ancestor_ids.iter());
                    }
                }

                (id.clone(), seen.len())
            })
            .collect()
    }
}
