//! Summary statistics for a [`Graph`].
//!
//! # Statistics Provided
//!
//! - **node_count** / **edge_count**: size of the original graph.
//! - **density**: `edge_count / (node_count * (node_count - 1))`. Self-loops
//!   are counted as edges, so the value can exceed 1.0 on tiny graphs full of
//!   them. An empty or single-node graph has density 0.0.
//! - **scc_count**: strongly connected components (= condensation nodes).
//!   Equals `node_count` on an acyclic graph.
//! - **cycle_count**: SCCs with more than one member.
//! - **self_loop_count**: edges whose origin is their destination.
//! - **weakly_connected_component_count**: disjoint subgraphs.
//! - **isolated_node_count**: nodes without any edge.
//! - **source_count** / **sink_count**: nodes without ancestors / descendants.
//! - **max_in_degree** / **max_out_degree**: over distinct neighbours.
//! - **condensed_edge_count**: edges of the condensation graph.
//! - **reduced_edge_count**: edges of the condensation after transitive
//!   reduction. The difference to `edge_count` is the number of edges the
//!   essential-edge analysis could drop or fold.

use serde::Serialize;
use tracing::instrument;

use crate::graph::{Graph, NodeId};

// ---------------------------------------------------------------------------
// GraphStats
// ---------------------------------------------------------------------------

/// Summary statistics for a graph.
///
/// All counts refer to the original graph unless noted otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// Zero for graphs with 0 or 1 node.
    pub density: f64,
    pub scc_count: usize,
    pub cycle_count: usize,
    pub self_loop_count: usize,
    pub weakly_connected_component_count: usize,
    pub isolated_node_count: usize,
    pub source_count: usize,
    pub sink_count: usize,
    pub max_in_degree: usize,
    pub max_out_degree: usize,
    /// Nodes of the condensation graph. Equals `scc_count`.
    pub condensed_node_count: usize,
    pub condensed_edge_count: usize,
    /// Edges of the condensation's minimum equivalent graph.
    pub reduced_edge_count: usize,
}

impl GraphStats {
    /// Compute statistics for `graph`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Graph::make_condensation`].
    #[must_use]
    #[instrument(skip_all, fields(nodes = graph.node_count(), edges = graph.edge_count()))]
    pub fn from_graph<N: NodeId, V>(graph: &Graph<N, V>) -> Self {
        let node_count = graph.node_count();
        let edge_count = graph.edge_count();

        let condensation = graph.make_condensation();
        let condensed_edge_count = condensation.graph.edge_count();
        let reduced_edge_count =
            condensed_edge_count - condensation.graph.find_transitive_edges().len();

        let isolated_node_count = graph
            .nodes()
            .filter(|node| node.is_source() && node.is_sink())
            .count();

        let max_in_degree = graph
            .nodes()
            .map(|node| node.ancestor_ids().len())
            .max()
            .unwrap_or(0);

        let max_out_degree = graph
            .nodes()
            .map(|node| node.descendant_ids().len())
            .max()
            .unwrap_or(0);

        Self {
            node_count,
            edge_count,
            density: compute_density(node_count, edge_count),
            scc_count: condensation.scc_count(),
            cycle_count: condensation.cycle_count(),
            self_loop_count: graph.edge_ids().filter(|id| id.is_self_loop()).count(),
            weakly_connected_component_count: graph.find_components().len(),
            isolated_node_count,
            source_count: graph.sources().count(),
            sink_count: graph.sinks().count(),
            max_in_degree,
            max_out_degree,
            condensed_node_count: condensation.graph.node_count(),
            condensed_edge_count,
            reduced_edge_count,
        }
    }

    /// Return `true` if the graph has no edges.
    #[must_use]
    pub const fn is_flat(&self) -> bool {
        self.edge_count == 0
    }

    /// Return `true` if the graph contains a multi-node cycle or a self-loop.
    #[must_use]
    pub const fn has_cycles(&self) -> bool {
        self.cycle_count > 0 || self.self_loop_count > 0
    }

    /// Share of condensation edges removed by transitive reduction.
    ///
    /// Returns 0.0 if the condensation has no edges.
    #[must_use]
    pub fn reduction_ratio(&self) -> f64 {
        compute_ratio(self.condensed_edge_count, self.reduced_edge_count)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers (cast precision suppressed at function scope)
// ---------------------------------------------------------------------------

#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0_f64;
    }
    let max_edges = (node_count * (node_count - 1)) as f64;
    edge_count as f64 / max_edges
}

#[allow(clippy::cast_precision_loss)]
fn compute_ratio(raw: usize, reduced: usize) -> f64 {
    if raw == 0 {
        return 0.0_f64;
    }
    raw.saturating_sub(reduced) as f64 / raw as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
