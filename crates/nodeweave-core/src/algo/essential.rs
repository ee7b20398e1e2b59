//! Essential-edge classification for arbitrary (possibly cyclic) graphs.
//!
//! The graph is condensed and the condensation reduced. An original edge is
//! then essential if:
//!
//! - both endpoints lie in the same SCC (the edge sits on a cycle), or
//! - the condensation edge between their SCCs survives the reduction.
//!
//! Cycle-internal edges are never classified as redundant. Picking which of
//! them could go is the minimum feedback arc set problem, which is NP-hard
//! and out of scope here.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::graph::{EdgeId, Graph, NodeId};

/// Which side of the classification a caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keep {
    Essential,
    NonEssential,
}

impl<N: NodeId, V> Graph<N, V> {
    /// Edges that lie on a cycle or whose condensation edge is part of the
    /// condensation's transitive reduction.
    ///
    /// # Panics
    ///
    /// Panics if the condensation does not cover an edge endpoint, see
    /// [`Graph::make_condensation`].
    #[instrument(skip_all, fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn find_essential_edges(&self) -> HashSet<EdgeId<N>> {
        self.classify_edges(Keep::Essential)
    }

    /// The complement of [`Graph::find_essential_edges`]: edges between
    /// different SCCs whose condensation edge is transitive.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Graph::find_essential_edges`].
    #[instrument(skip_all, fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn find_non_essential_edges(&self) -> HashSet<EdgeId<N>> {
        self.classify_edges(Keep::NonEssential)
    }

    /// Remove every non-essential edge in place. Returns how many were
    /// removed.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Graph::find_essential_edges`].
    pub fn filter_essential_edges(&mut self) -> usize {
        let doomed = self.find_non_essential_edges();
        self.remove_edges(&doomed)
    }

    fn classify_edges(&self, keep: Keep) -> HashSet<EdgeId<N>> {
        let condensation = self.make_condensation();
        let transitive = condensation.graph.find_transitive_edges();

        let selected: HashSet<EdgeId<N>> = self
            .edges
            .keys()
            .filter(|id| {
                let origin = condensation.expect_scc_of(&id.origin_id);
                let destination = condensation.expect_scc_of(&id.destination_id);
                let essential = origin == destination
                    || !transitive.contains(&EdgeId::new(origin, destination));
                essential == (keep == Keep::Essential)
            })
            .cloned()
            .collect();

        debug!(
            kind = ?keep,
            selected = selected.len(),
            sccs = condensation.scc_count(),
            "classified edges"
        );
        selected
    }
}

impl<N: NodeId, V: Clone> Graph<N, V> {
    /// A copy keeping only the essential edges.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Graph::find_essential_edges`].
    #[must_use]
    pub fn filtered_essential_edges(&self) -> Self {
        let mut result = self.clone();
        result.filter_essential_edges();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph() {
        let graph: Graph<u32, u32> = Graph::new();
        assert!(graph.find_essential_edges().is_empty());
        assert!(graph.find_non_essential_edges().is_empty());
    }

    #[test]
    fn transitive_edge_is_non_essential() {
        let graph = Graph::from_values([1, 2, 3], [(1, 2), (2, 3), (1, 3)]);
        assert_eq!(
            graph.find_essential_edges(),
            HashSet::from([EdgeId::new(1, 2), EdgeId::new(2, 3)])
        );
        assert_eq!(graph.find_non_essential_edges(), HashSet::from([EdgeId::new(1, 3)]));
    }

    #[test]
    fn cycle_edges_are_all_essential() {
        let graph = Graph::from_values([1, 2, 3, 4], [(1, 2), (2, 3), (3, 4), (4, 1)]);
        assert_eq!(graph.find_essential_edges().len(), 4);
        assert!(graph.find_non_essential_edges().is_empty());
    }

    #[test]
    fn chord_inside_cycle_stays_essential() {
        // 1 → 3 is a shortcut, but all three nodes share one SCC.
        let graph = Graph::from_values([1, 2, 3], [(1, 2), (2, 3), (3, 1), (1, 3)]);
        assert!(graph.find_non_essential_edges().is_empty());
    }

    #[test]
    fn shortcut_between_cycles_is_non_essential() {
        // {1,2} → {3,4} → 5, plus 2 → 5 skipping the middle cycle.
        let graph = Graph::from_values(
            [1, 2, 3, 4, 5],
            [(1, 2), (2, 1), (2, 3), (3, 4), (4, 3), (4, 5), (2, 5)],
        );
        assert_eq!(graph.find_non_essential_edges(), HashSet::from([EdgeId::new(2, 5)]));
    }

    #[test]
    fn parallel_crossing_edges_share_classification() {
        // Both 1 → 3 and 2 → 3 map onto the single condensation edge {1,2} → {3}.
        let graph = Graph::from_values([1, 2, 3], [(1, 2), (2, 1), (1, 3), (2, 3)]);
        assert_eq!(graph.find_essential_edges().len(), 4);
    }

    #[test]
    fn self_loop_is_essential() {
        let graph = Graph::from_values([1, 2], [(1, 1), (1, 2)]);
        assert!(graph.find_essential_edges().contains(&EdgeId::new(1, 1)));
    }

    #[test]
    fn filtered_copy_drops_non_essential() {
        let graph = Graph::from_values([1, 2, 3], [(1, 2), (2, 3), (1, 3)]);
        let essential = graph.filtered_essential_edges();
        assert_eq!(essential.edge_count(), 2);
        assert!(essential.edge(&1, &3).is_none());
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn in_place_filter_reports_removed() {
        let mut graph = Graph::from_values([1, 2, 3], [(1, 2), (2, 3), (1, 3)]);
        assert_eq!(graph.filter_essential_edges(), 1);
        assert!(graph.adjacency_is_consistent());
    }
}
