//! Directed graph store with cached adjacency.
//!
//! # Overview
//!
//! A [`Graph`] owns its nodes in a map keyed by [`NodeId`] and its edges in a
//! map keyed by [`EdgeId`] (the ordered `(origin, destination)` pair). Every
//! [`Node`] caches the IDs of its ancestors and descendants so algorithms can
//! walk the graph in either direction without scanning the edge map.
//!
//! ## Invariant
//!
//! After every mutation, for each edge `(a, b)`:
//!
//! - `b` is in `node(a).descendant_ids()`
//! - `a` is in `node(b).ancestor_ids()`
//!
//! and every ID in a node's caches corresponds to an existing edge. Only the
//! mutators in [`store`] touch the caches, so the invariant cannot be broken
//! from outside the crate.
//!
//! ## Derived graphs
//!
//! Subgraphs, filtered copies, condensations and minimum equivalent graphs are
//! fresh, independently owned [`Graph`] values. Mutating one never affects
//! the graph it was derived from.
//!
//! ```text
//! Graph (possibly cyclic)
//!        ↓  make_condensation_graph()
//! CondensationGraph (SCCs collapsed, acyclic)
//!        ↓  make_minimum_equivalent_graph()
//! reduced condensation (minimum edges)
//!        ↓  find_essential_edges()
//! EdgeId set on the original graph
//! ```

use std::fmt::Debug;
use std::hash::Hash;

pub mod derive;
pub mod edge;
pub mod node;
pub mod store;

pub use edge::{Edge, EdgeId};
pub use node::Node;
pub use store::Graph;

/// Requirements on node identifiers.
///
/// Blanket-implemented for every `Clone + Eq + Hash + Debug` type, so plain
/// integers, strings and `&'static str` all work out of the box.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> NodeId for T {}

/// Values that derive their own node ID.
///
/// [`Graph::insert`] uses this to key a new node. Every [`NodeId`] type is
/// its own key, so `Graph<u32, u32>` and `Graph<&str, &str>` need no extra
/// code; richer values implement it for the ID type they are stored under.
///
/// ```rust
/// use nodeweave_core::graph::{Graph, Keyed};
///
/// struct Task {
///     slug: &'static str,
///     title: &'static str,
/// }
///
/// impl Keyed<&'static str> for Task {
///     fn node_id(&self) -> &'static str {
///         self.slug
///     }
/// }
///
/// let mut graph: Graph<&str, Task> = Graph::default();
/// graph.insert(Task { slug: "build", title: "Build the thing" });
/// assert_eq!(graph.value(&"build").map(|t| t.title), Some("Build the thing"));
/// ```
pub trait Keyed<N> {
    /// The ID of the node that stores this value.
    fn node_id(&self) -> N;
}

impl<T: NodeId> Keyed<T> for T {
    fn node_id(&self) -> T {
        self.clone()
    }
}
