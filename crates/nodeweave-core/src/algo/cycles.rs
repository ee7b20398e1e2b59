//! Cycle detection on top of the SCC partition.
//!
//! A graph is acyclic exactly when every SCC is a singleton and no node has a
//! self-loop. The transitive-reduction algorithms require that, so their
//! checked variants call [`Graph::ensure_acyclic`] first.

#![allow(clippy::module_name_repetitions)]

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, instrument};

use crate::error::GraphError;
use crate::graph::{EdgeId, Graph, NodeId};

impl<N: NodeId, V> Graph<N, V> {
    /// Find every cycle currently present.
    ///
    /// Each entry is the member set of one SCC with more than one node, or a
    /// single node carrying a self-loop.
    #[instrument(skip_all, fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn find_cycles(&self) -> Vec<HashSet<N>> {
        let cycles: Vec<HashSet<N>> = self
            .find_strongly_connected_components()
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || component
                        .iter()
                        .next()
                        .and_then(|id| self.node(id))
                        .is_some_and(|node| node.has_self_loop())
            })
            .collect();

        debug!(cycles = cycles.len(), "found cycles");
        cycles
    }

    /// `true` if the graph contains no cycle (self-loops count as cycles).
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        if self.nodes.values().any(|node| node.has_self_loop()) {
            return false;
        }
        self.find_strongly_connected_components()
            .iter()
            .all(|component| component.len() == 1)
    }

    /// Fail with the members of one cycle if the graph is not acyclic.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CyclicGraph`] listing the (sorted, `Debug`
    /// rendered) members of the first cycle found.
    pub fn ensure_acyclic(&self) -> Result<(), GraphError> {
        match self.find_cycles().into_iter().next() {
            None => Ok(()),
            Some(cycle) => {
                let mut members: Vec<String> = cycle.iter().map(|id| format!("{id:?}")).collect();
                members.sort_unstable();
                Err(GraphError::CyclicGraph { cycle: members })
            }
        }
    }

    /// Check whether adding `origin_id → destination_id` would introduce a
    /// cycle.
    ///
    /// Returns the closing path `origin → destination → … → origin` when it
    /// would. Returns `None` if the edge already exists (no *new* cycle) or
    /// if either node is unknown.
    #[must_use]
    pub fn would_create_cycle(&self, origin_id: &N, destination_id: &N) -> Option<Vec<N>> {
        if !self.contains(origin_id) || !self.contains(destination_id) {
            return None;
        }

        if self.contains_edge(&EdgeId::new(origin_id.clone(), destination_id.clone())) {
            return None;
        }

        if origin_id == destination_id {
            return Some(vec![origin_id.clone(), origin_id.clone()]);
        }

        // BFS from destination looking for origin.
        let mut queue: VecDeque<&N> = VecDeque::from([destination_id]);
        let mut visited: HashSet<&N> = HashSet::from([destination_id]);
        let mut parent: HashMap<&N, &N> = HashMap::new();

        while let Some(current) = queue.pop_front() {
            if current == origin_id {
                return Some(closing_path(origin_id, destination_id, &parent));
            }

            let Some(node) = self.nodes.get(current) else {
                continue;
            };
            for next in &node.descendant_ids {
                if visited.insert(next) {
                    parent.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        None
    }
}

/// Rebuild `origin → destination → … → origin` from BFS parent links, which
/// describe the path `destination → … → origin`.
fn closing_path<N: NodeId>(origin: &N, destination: &N, parent: &HashMap<&N, &N>) -> Vec<N> {
    let mut backwards: Vec<N> = vec![origin.clone()];
    let mut cursor = origin;

    while cursor != destination {
        let Some(next) = parent.get(cursor) else {
            break;
        };
        cursor = *next;
        backwards.push(cursor.clone());
    }

    backwards.reverse();

    let mut path = Vec::with_capacity(backwards.len() + 1);
    path.push(origin.clone());
    path.extend(backwards);
    path
}
