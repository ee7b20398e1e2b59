//! Subgraphs, filtered copies and value mapping.
//!
//! The `filtered*` methods return a fresh graph and leave `self` untouched;
//! the `filter*` methods mutate `self` in place. Both go through the store's
//! mutators, so node removal always cascades to edges.

use std::collections::HashSet;

use super::{Edge, EdgeId, Graph, Node, NodeId};

impl<N: NodeId, V: Clone> Graph<N, V> {
    /// A new graph with the given nodes and every edge running between two
    /// of them. Unknown IDs are ignored; edge counts are preserved.
    #[must_use]
    pub fn subgraph(&self, node_ids: &HashSet<N>) -> Self {
        let mut sub = Self::default();

        for id in node_ids {
            if let Some(node) = self.nodes.get(id) {
                sub.update(id.clone(), node.value.clone());
            }
        }

        for edge in self.edges.values() {
            if node_ids.contains(edge.origin_id()) && node_ids.contains(edge.destination_id()) {
                let _ = sub.add_edge_with_count(
                    edge.origin_id().clone(),
                    edge.destination_id().clone(),
                    edge.count,
                );
            }
        }

        sub
    }

    /// Copy keeping only the listed edges.
    #[must_use]
    pub fn filtered_edges(&self, keep: &HashSet<EdgeId<N>>) -> Self {
        self.filtered_edges_by(|edge| keep.contains(edge.id()))
    }

    /// Copy keeping only edges for which `keep` returns `true`.
    #[must_use]
    pub fn filtered_edges_by(&self, keep: impl FnMut(&Edge<N>) -> bool) -> Self {
        let mut result = self.clone();
        result.filter_edges_by(keep);
        result
    }

    /// Copy keeping only the listed nodes (and edges between them).
    #[must_use]
    pub fn filtered_nodes(&self, keep: &HashSet<N>) -> Self {
        self.filtered_nodes_by(|node| keep.contains(node.id()))
    }

    /// Copy keeping only nodes for which `keep` returns `true`.
    #[must_use]
    pub fn filtered_nodes_by(&self, keep: impl FnMut(&Node<N, V>) -> bool) -> Self {
        let mut result = self.clone();
        result.filter_nodes_by(keep);
        result
    }

    /// Copy keeping only nodes whose value satisfies `keep`.
    #[must_use]
    pub fn filtered(&self, mut keep: impl FnMut(&V) -> bool) -> Self {
        self.filtered_nodes_by(|node| keep(node.value()))
    }
}

impl<N: NodeId, V> Graph<N, V> {
    /// Remove every edge not listed in `keep`.
    pub fn filter_edges(&mut self, keep: &HashSet<EdgeId<N>>) {
        self.filter_edges_by(|edge| keep.contains(edge.id()));
    }

    /// Remove every edge for which `keep` returns `false`.
    pub fn filter_edges_by(&mut self, mut keep: impl FnMut(&Edge<N>) -> bool) {
        let doomed: Vec<EdgeId<N>> = self
            .edges
            .values()
            .filter(|edge| !keep(edge))
            .map(|edge| edge.id.clone())
            .collect();
        self.remove_edges(&doomed);
    }

    /// Remove every node not listed in `keep`, with its edges.
    pub fn filter_nodes(&mut self, keep: &HashSet<N>) {
        self.filter_nodes_by(|node| keep.contains(node.id()));
    }

    /// Remove every node for which `keep` returns `false`, with its edges.
    pub fn filter_nodes_by(&mut self, mut keep: impl FnMut(&Node<N, V>) -> bool) {
        let doomed: Vec<N> = self
            .nodes
            .values()
            .filter(|node| !keep(node))
            .map(|node| node.id.clone())
            .collect();
        for id in &doomed {
            self.remove_node(id);
        }
    }

    /// Remove every node whose value fails `keep`, with its edges.
    pub fn filter(&mut self, mut keep: impl FnMut(&V) -> bool) {
        self.filter_nodes_by(|node| keep(node.value()));
    }

    /// Same node IDs and edges, with every value passed through `transform`.
    pub fn map_values<W>(&self, mut transform: impl FnMut(&V) -> W) -> Graph<N, W> {
        let nodes = self
            .nodes
            .iter()
            .map(|(id, node)| {
                let mapped = Node {
                    id: node.id.clone(),
                    value: transform(&node.value),
                    ancestor_ids: node.ancestor_ids.clone(),
                    descendant_ids: node.descendant_ids.clone(),
                };
                (id.clone(), mapped)
            })
            .collect();

        Graph {
            nodes,
            edges: self.edges.clone(),
        }
    }
}
