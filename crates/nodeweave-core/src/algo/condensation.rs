//! SCC condensation.
//!
//! # Overview
//!
//! A graph may contain cycles. Collapsing every strongly connected component
//! into a single node yields the *condensation graph*, which is acyclic by
//! construction:
//!
//! 1. Run Tarjan's algorithm to partition the nodes into SCCs.
//! 2. Map every original node ID to the SCC containing it.
//! 3. Create one condensation node per SCC.
//! 4. For every original edge `(a, b)` with `scc(a) != scc(b)`, add the
//!    condensation edge `scc(a) → scc(b)`, or bump its count if present.
//!    Edges inside one SCC (including self-loops) are dropped.
//!
//! # Output
//!
//! [`Condensation`] keeps the condensation graph together with the node → SCC
//! mapping, so callers can project results back onto the original graph.

#![allow(clippy::module_name_repetitions)]

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use crate::graph::{Graph, Keyed, NodeId};

// ---------------------------------------------------------------------------
// StronglyConnectedComponent
// ---------------------------------------------------------------------------

/// ID of a node in a [`CondensationGraph`].
///
/// Assigned fresh per condensation run; IDs are not stable across runs or
/// across graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SccId(pub usize);

impl fmt::Display for SccId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scc-{}", self.0)
    }
}

/// An immutable set of node IDs forming one strongly connected component.
///
/// Two components compare equal when they contain the same node IDs,
/// regardless of the [`SccId`] they were assigned.
#[derive(Debug, Clone)]
pub struct StronglyConnectedComponent<N> {
    id: SccId,
    node_ids: HashSet<N>,
}

impl<N: NodeId> StronglyConnectedComponent<N> {
    #[must_use]
    pub const fn id(&self) -> SccId {
        self.id
    }

    /// The member node IDs.
    #[must_use]
    pub const fn node_ids(&self) -> &HashSet<N> {
        &self.node_ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    /// Components produced by condensation are never empty; this exists for
    /// API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &N) -> bool {
        self.node_ids.contains(id)
    }

    /// Return `true` if this component contains more than one node.
    ///
    /// A lone node with a self-loop is not reported here; see
    /// [`Graph::find_cycles`] for that.
    #[must_use]
    pub fn is_cycle(&self) -> bool {
        self.node_ids.len() > 1
    }
}

impl<N: NodeId> PartialEq for StronglyConnectedComponent<N> {
    fn eq(&self, other: &Self) -> bool {
        self.node_ids == other.node_ids
    }
}

impl<N: NodeId> Eq for StronglyConnectedComponent<N> {}

impl<N> Keyed<SccId> for StronglyConnectedComponent<N> {
    fn node_id(&self) -> SccId {
        self.id
    }
}

/// A graph whose nodes are the SCCs of another graph.
pub type CondensationGraph<N> = Graph<SccId, StronglyConnectedComponent<N>>;

// ---------------------------------------------------------------------------
// Condensation
// ---------------------------------------------------------------------------

/// The condensation graph plus the mapping from original node to SCC.
#[derive(Debug, Clone)]
pub struct Condensation<N> {
    /// Acyclic graph of SCCs.
    pub graph: CondensationGraph<N>,
    /// Original node ID → containing SCC.
    pub scc_of: HashMap<N, SccId>,
}

impl<N: NodeId> Condensation<N> {
    /// Number of SCCs (= condensation nodes).
    #[must_use]
    pub fn scc_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of SCCs with more than one member.
    #[must_use]
    pub fn cycle_count(&self) -> usize {
        self.graph.values().filter(|scc| scc.is_cycle()).count()
    }

    /// All original nodes that belong to a multi-node SCC.
    #[must_use]
    pub fn cyclic_node_ids(&self) -> HashSet<N> {
        self.graph
            .values()
            .filter(|scc| scc.is_cycle())
            .flat_map(|scc| scc.node_ids.iter().cloned())
            .collect()
    }

    /// The SCC containing the given original node.
    #[must_use]
    pub fn scc_of(&self, id: &N) -> Option<SccId> {
        self.scc_of.get(id).copied()
    }

    /// The component stored under `id`.
    #[must_use]
    pub fn component(&self, id: SccId) -> Option<&StronglyConnectedComponent<N>> {
        self.graph.value(&id)
    }

    /// The SCC containing `id`, treating absence as a broken invariant.
    ///
    /// # Panics
    ///
    /// Panics if `id` has no SCC. Condensation covers every node of the
    /// graph it was built from, so this only fires on internal bugs or when
    /// queried with a node from a different graph.
    pub(crate) fn expect_scc_of(&self, id: &N) -> SccId {
        self.scc_of(id).unwrap_or_else(|| {
            error!(node = ?id, "node has no strongly connected component");
            panic!("condensation is missing an SCC for node {id:?}")
        })
    }
}

impl<N: NodeId, V> Graph<N, V> {
    /// Collapse SCCs into single nodes, keeping the node → SCC mapping.
    ///
    /// The condensation edge `X → Y` carries a count equal to the number of
    /// original edges crossing from `X` to `Y`.
    ///
    /// # Panics
    ///
    /// Panics if an edge endpoint has no SCC, which means the SCC partition
    /// or the store's adjacency invariant is broken.
    #[instrument(skip_all, fields(nodes = self.node_count(), edges = self.edge_count()))]
    pub fn make_condensation(&self) -> Condensation<N> {
        let components = self.find_strongly_connected_components();

        let mut scc_of: HashMap<N, SccId> = HashMap::with_capacity(self.nodes.len());
        let mut graph: CondensationGraph<N> = Graph::default();

        for (position, node_ids) in components.into_iter().enumerate() {
            let id = SccId(position);
            for member in &node_ids {
                scc_of.insert(member.clone(), id);
            }
            graph.insert(StronglyConnectedComponent { id, node_ids });
        }

        let mut condensation = Condensation { graph, scc_of };

        for edge_id in self.edges.keys() {
            let origin = condensation.expect_scc_of(&edge_id.origin_id);
            let destination = condensation.expect_scc_of(&edge_id.destination_id);

            if origin != destination {
                if let Err(err) = condensation.graph.add_edge(origin, destination) {
                    error!(%err, "condensation node missing for a known SCC");
                    panic!("condensation graph is missing SCC node: {err}");
                }
            }
        }

        debug!(
            sccs = condensation.scc_count(),
            cycles = condensation.cycle_count(),
            condensed_edges = condensation.graph.edge_count(),
            "built condensation"
        );
        condensation
    }

    /// The acyclic condensation graph, see [`Graph::make_condensation`].
    ///
    /// # Panics
    ///
    /// Same conditions as [`Graph::make_condensation`].
    #[must_use]
    pub fn make_condensation_graph(&self) -> CondensationGraph<N> {
        self.make_condensation().graph
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // SCC condensation
    // -----------------------------------------------------------------------

    #[test]
    fn linear_chain_each_node_is_own_scc() {
        // A → B → C (no cycles)
        let graph = Graph::from_values(["A", "B", "C"], [("A", "B"), ("B", "C")]);
        let condensation = graph.make_condensation();

        assert_eq!(condensation.scc_count(), 3, "3 SCCs for acyclic chain");
        assert_eq!(condensation.cycle_count(), 0, "no cycles");
        assert_eq!(condensation.graph.edge_count(), 2);
    }

    #[test]
    fn simple_cycle_condensed_to_one_scc() {
        // A → B → A (cycle)
        let graph = Graph::from_values(["A", "B"], [("A", "B"), ("B", "A")]);
        let condensation = graph.make_condensation();

        assert_eq!(condensation.scc_count(), 1, "cycle condensed to 1 SCC");
        assert_eq!(condensation.cycle_count(), 1, "one cycle SCC");
        assert_eq!(condensation.graph.edge_count(), 0, "internal edges dropped");

        let cyclic = condensation.cyclic_node_ids();
        assert!(cyclic.contains("A"), "A in cyclic nodes");
        assert!(cyclic.contains("B"), "B in cyclic nodes");
    }

    #[test]
    fn mixed_cycle_and_acyclic() {
        // A → B → A → C (A and B cycle; C is downstream)
        let graph = Graph::from_values(["A", "B", "C"], [("A", "B"), ("B", "A"), ("A", "C")]);
        let condensation = graph.make_condensation();

        // SCCs: {A, B} and {C}
        assert_eq!(condensation.scc_count(), 2, "2 SCCs: the cycle and C");
        assert_eq!(condensation.cycle_count(), 1);

        let cyclic = condensation.cyclic_node_ids();
        assert!(cyclic.contains("A"));
        assert!(cyclic.contains("B"));
        assert!(!cyclic.contains("C"));
    }

    #[test]
    fn scc_mapping_correct() {
        let graph = Graph::from_values(["A", "B", "C"], [("A", "B"), ("B", "A"), ("A", "C")]);
        let condensation = graph.make_condensation();

        let scc_a = condensation.scc_of(&"A");
        let scc_b = condensation.scc_of(&"B");
        let scc_c = condensation.scc_of(&"C");

        assert!(scc_a.is_some(), "A has SCC");
        assert!(scc_c.is_some(), "C has SCC");
        assert_eq!(scc_a, scc_b, "A and B in same SCC");
        assert_ne!(scc_a, scc_c, "C in different SCC from A");
        assert!(condensation.scc_of(&"Z").is_none());

        let (Some(from), Some(to)) = (scc_a, scc_c) else {
            unreachable!("checked above");
        };
        assert!(condensation.graph.edge(&from, &to).is_some(), "AB → C edge");
    }

    #[test]
    fn crossing_edges_accumulate_count() {
        // Both 1 → 3 and 2 → 3 leave the {1,2} cycle towards 3.
        let graph = Graph::from_values([1, 2, 3], [(1, 2), (2, 1), (1, 3), (2, 3)]);
        let condensation = graph.make_condensation();

        let cycle = condensation.expect_scc_of(&1);
        let sink = condensation.expect_scc_of(&3);
        let edge = condensation.graph.edge(&cycle, &sink).expect("crossing edge");
        assert_eq!(edge.count(), 2);
    }

    #[test]
    fn single_cycle_has_no_condensation_edges() {
        let graph = Graph::from_values([1, 2, 3, 4], [(1, 2), (2, 3), (3, 4), (4, 1)]);
        let condensed = graph.make_condensation_graph();

        assert_eq!(condensed.node_count(), 1);
        assert_eq!(condensed.edge_count(), 0);
        let only = condensed.values().next().expect("one SCC");
        assert_eq!(only.len(), 4);
        assert!(only.is_cycle());
    }

    #[test]
    fn self_loop_dropped_from_condensation() {
        let graph = Graph::from_values([1, 2], [(1, 1), (1, 2)]);
        let condensed = graph.make_condensation_graph();
        assert_eq!(condensed.node_count(), 2);
        assert_eq!(condensed.edge_count(), 1);
        assert!(condensed.is_acyclic());
    }

    #[test]
    fn components_compare_by_content() {
        let left = StronglyConnectedComponent {
            id: SccId(0),
            node_ids: HashSet::from([1, 2]),
        };
        let right = StronglyConnectedComponent {
            id: SccId(7),
            node_ids: HashSet::from([2, 1]),
        };
        assert_eq!(left, right);
        assert_eq!(SccId(7).to_string(), "scc-7");
    }

    #[test]
    fn condensation_is_independent_copy() {
        let graph = Graph::from_values([1, 2], [(1, 2)]);
        let mut condensed = graph.make_condensation_graph();
        let ids: Vec<SccId> = condensed.node_ids().copied().collect();
        for id in &ids {
            condensed.remove_node(id);
        }
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }
}
