//! Weakly connected components.
//!
//! Edge direction is ignored: two nodes share a component if a chain of
//! edges, followed either way, joins them. Each component is discovered by a
//! flood fill from an unvisited node over `neighbour_ids`, so the total work
//! is O(V + E) whatever cycles the graph contains.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::graph::{Graph, NodeId};

impl<N: NodeId, V> Graph<N, V> {
    /// Partition the nodes into weakly connected components.
    ///
    /// Every node appears in exactly one returned set. The order of the
    /// components, and of members inside each set, is unspecified.
    #[instrument(skip_all, fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn find_components(&self) -> Vec<HashSet<N>> {
        let mut visited: HashSet<&N> = HashSet::with_capacity(self.nodes.len());
        let mut components = Vec::new();

        for start in self.nodes.keys() {
            if !visited.insert(start) {
                continue;
            }

            let mut component = HashSet::new();
            let mut frontier = vec![start];

            while let Some(current) = frontier.pop() {
                component.insert(current.clone());
                let Some(node) = self.nodes.get(current) else {
                    continue;
                };
                for neighbour in node.ancestor_ids.iter().chain(&node.descendant_ids) {
                    if visited.insert(neighbour) {
                        frontier.push(neighbour);
                    }
                }
            }

            components.push(component);
        }

        debug!(components = components.len(), "found weak components");
        components
    }
}
