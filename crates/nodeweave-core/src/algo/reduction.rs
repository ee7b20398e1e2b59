//! Transitive reduction (minimum equivalent graph) of an acyclic graph.
//!
//! # Algorithm Overview
//!
//! Ancestors are propagated downwards from every source. Each work item is a
//! node plus the set of ancestors that reached it along one path. At a node:
//!
//! 1. Drop the ancestors that were already propagated through this node.
//!    If something reached the node but nothing is new, stop: everything
//!    below has already seen these ancestors.
//! 2. Remember the new ancestors as considered for this node.
//! 3. For every descendant `d` and every new ancestor `a`, the edge `a → d`
//!    (if present) is implied by `a → … → node → d` and is transitive.
//! 4. Push every descendant with the new ancestors plus this node.
//!
//! The per-node considered set only grows, so every node is expanded at most
//! once per ancestor and the traversal terminates even on cyclic input.
//!
//! # Precondition
//!
//! The graph must be acyclic. On cyclic input the unchecked methods still
//! terminate but may over- or under-reduce; use the `checked_*` variants or
//! reduce the condensation graph instead.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument};

use crate::error::GraphError;
use crate::graph::{EdgeId, Graph, Node, NodeId};

impl<N: NodeId, V> Graph<N, V> {
    /// The edges implied by some longer path, i.e. the edges *not* in the
    /// transitive reduction.
    ///
    /// Only meaningful on acyclic graphs, see the module docs.
    #[instrument(skip_all, fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn find_transitive_edges(&self) -> HashSet<EdgeId<N>> {
        let mut transitive: HashSet<EdgeId<N>> = HashSet::new();
        let mut considered: HashMap<&N, HashSet<&N>> = HashMap::with_capacity(self.nodes.len());
        let mut work: Vec<(&Node<N, V>, HashSet<&N>)> =
            self.sources().map(|source| (source, HashSet::new())).collect();

        while let Some((node, reached)) = work.pop() {
            let reached_anything = !reached.is_empty();
            let seen = considered.entry(&node.id).or_default();
            let fresh: HashSet<&N> = reached
                .into_iter()
                .filter(|ancestor| !seen.contains(ancestor))
                .collect();

            if reached_anything && fresh.is_empty() {
                continue;
            }
            seen.extend(fresh.iter().copied());

            for descendant_id in &node.descendant_ids {
                for ancestor_id in &fresh {
                    let shortcut = EdgeId::new((*ancestor_id).clone(), descendant_id.clone());
                    if self.edges.contains_key(&shortcut) {
                        transitive.insert(shortcut);
                    }
                }
            }

            for descendant_id in &node.descendant_ids {
                if let Some(descendant) = self.nodes.get(descendant_id) {
                    let mut onward = fresh.clone();
                    onward.insert(&node.id);
                    work.push((descendant, onward));
                }
            }
        }

        debug!(transitive = transitive.len(), "found transitive edges");
        transitive
    }

    /// [`Graph::find_transitive_edges`], refusing cyclic input.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CyclicGraph`] if the graph has a cycle or a
    /// self-loop.
    pub fn checked_transitive_edges(&self) -> Result<HashSet<EdgeId<N>>, GraphError> {
        self.ensure_acyclic()?;
        Ok(self.find_transitive_edges())
    }

    /// Remove every transitive edge in place. Returns how many were removed.
    ///
    /// Only meaningful on acyclic graphs, see the module docs.
    pub fn filter_transitive_reduction(&mut self) -> usize {
        let transitive = self.find_transitive_edges();
        self.remove_edges(&transitive)
    }
}

impl<N: NodeId, V: Clone> Graph<N, V> {
    /// A copy with every transitive edge removed.
    ///
    /// On an acyclic graph the result has the same reachability relation as
    /// `self` and no edge can be dropped without changing it. Surviving
    /// edges keep their counts.
    #[must_use]
    pub fn make_minimum_equivalent_graph(&self) -> Self {
        let mut reduced = self.clone();
        reduced.filter_transitive_reduction();
        reduced
    }

    /// Alias for [`Graph::make_minimum_equivalent_graph`].
    #[must_use]
    pub fn filtered_transitive_reduction(&self) -> Self {
        self.make_minimum_equivalent_graph()
    }

    /// [`Graph::make_minimum_equivalent_graph`], refusing cyclic input.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CyclicGraph`] if the graph has a cycle or a
    /// self-loop.
    pub fn checked_minimum_equivalent_graph(&self) -> Result<Self, GraphError> {
        self.ensure_acyclic()?;
        Ok(self.make_minimum_equivalent_graph())
    }
}
