//! The [`Graph`] container and its mutators.
//!
//! All cache maintenance lives here: `link`/`unlink` are the only places that
//! write a node's `ancestor_ids` or `descendant_ids`, and they are called
//! exactly when an edge enters or leaves the edge map.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::{debug, trace};

use super::{Edge, EdgeId, Keyed, Node, NodeId};
use crate::error::GraphError;

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A directed graph of uniquely identified nodes holding values of type `V`.
///
/// Edges are unique per ordered `(origin, destination)` pair. Adding an edge
/// that already exists increases its count instead of duplicating it.
/// Self-loops are ordinary edges.
///
/// The graph is not synchronized; wrap it in a lock if it is shared between
/// a mutator and other threads.
#[derive(Debug, Clone)]
pub struct Graph<N, V> {
    pub(crate) nodes: HashMap<N, Node<N, V>>,
    pub(crate) edges: HashMap<EdgeId<N>, Edge<N>>,
}

impl<N, V> Default for Graph<N, V> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
        }
    }
}

impl<N: NodeId, V: PartialEq> PartialEq for Graph<N, V> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl<N: NodeId, V: Eq> Eq for Graph<N, V> {}

impl<N: NodeId> Graph<N, N> {
    /// Create an empty graph whose node values are their own IDs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from values and `(origin, destination)` pairs.
    ///
    /// Edges that reference a value not in `values` are skipped; the store
    /// logs each rejected edge at `debug` level.
    pub fn from_values(
        values: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = (N, N)>,
    ) -> Self {
        Self::from_pairs(values.into_iter().map(|v| (v.clone(), v)), edges)
    }
}

impl<N: NodeId, V> Graph<N, V> {
    /// Build a graph from explicit `(id, value)` pairs and edge endpoints.
    ///
    /// Later pairs with a repeated ID replace the earlier value. Edges with an
    /// unknown endpoint are skipped.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (N, V)>,
        edges: impl IntoIterator<Item = (N, N)>,
    ) -> Self {
        let mut graph = Self::default();
        for (id, value) in pairs {
            graph.update(id, value);
        }
        for (origin_id, destination_id) in edges {
            // Rejections are already logged by add_edge.
            let _ = graph.add_edge(origin_id, destination_id);
        }
        graph
    }

    // -----------------------------------------------------------------------
    // Node mutation
    // -----------------------------------------------------------------------

    /// Insert a value under the ID it derives via [`Keyed`].
    ///
    /// Returns the existing node unchanged if one already has that ID;
    /// otherwise creates a node without edges. Never creates a duplicate ID.
    pub fn insert(&mut self, value: V) -> &Node<N, V>
    where
        V: Keyed<N>,
    {
        let id = value.node_id();
        match self.nodes.entry(id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let id = entry.key().clone();
                entry.insert(Node::new(id, value))
            }
        }
    }

    /// Store `value` under `id`, replacing any previous value.
    ///
    /// Edges of an existing node are kept.
    pub fn update(&mut self, id: N, value: V) -> &Node<N, V> {
        match self.nodes.entry(id) {
            Entry::Occupied(entry) => {
                let node = entry.into_mut();
                node.value = value;
                node
            }
            Entry::Vacant(entry) => {
                let id = entry.key().clone();
                entry.insert(Node::new(id, value))
            }
        }
    }

    /// Remove a node and every edge that starts or ends at it.
    ///
    /// The former neighbours' caches are updated. The returned node still
    /// carries the adjacency it had at the moment of removal.
    pub fn remove_node(&mut self, id: &N) -> Option<Node<N, V>> {
        let node = self.nodes.remove(id)?;

        for ancestor_id in &node.ancestor_ids {
            self.edges
                .remove(&EdgeId::new(ancestor_id.clone(), id.clone()));
            if let Some(ancestor) = self.nodes.get_mut(ancestor_id) {
                ancestor.descendant_ids.remove(id);
            }
        }

        for descendant_id in &node.descendant_ids {
            self.edges
                .remove(&EdgeId::new(id.clone(), descendant_id.clone()));
            if let Some(descendant) = self.nodes.get_mut(descendant_id) {
                descendant.ancestor_ids.remove(id);
            }
        }

        trace!(
            node = ?id,
            ancestors = node.ancestor_ids.len(),
            descendants = node.descendant_ids.len(),
            "removed node"
        );
        Some(node)
    }

    // -----------------------------------------------------------------------
    // Edge mutation
    // -----------------------------------------------------------------------

    /// Add the edge `origin_id → destination_id` with count 1.
    ///
    /// See [`Graph::add_edge_with_count`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is missing.
    pub fn add_edge(&mut self, origin_id: N, destination_id: N) -> Result<Edge<N>, GraphError> {
        self.add_edge_with_count(origin_id, destination_id, 1)
    }

    /// Add `count` to the edge `origin_id → destination_id`.
    ///
    /// Creates the edge (and updates both endpoints' caches) if it does not
    /// exist yet; otherwise increases the existing count, saturating at
    /// `u64::MAX`. Returns a copy of the resulting edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is missing.
    /// Nothing is created in that case.
    pub fn add_edge_with_count(
        &mut self,
        origin_id: N,
        destination_id: N,
        count: u64,
    ) -> Result<Edge<N>, GraphError> {
        for endpoint in [&origin_id, &destination_id] {
            if !self.nodes.contains_key(endpoint) {
                debug!(
                    origin = ?origin_id,
                    destination = ?destination_id,
                    "rejected edge between unknown node IDs"
                );
                return Err(GraphError::node_not_found(endpoint));
            }
        }

        let id = EdgeId::new(origin_id, destination_id);

        if let Some(edge) = self.edges.get_mut(&id) {
            edge.count = edge.count.saturating_add(count);
            return Ok(edge.clone());
        }

        self.link(&id);
        let edge = Edge::new(id.clone(), count);
        self.edges.insert(id, edge.clone());
        Ok(edge)
    }

    /// Add `count` to the edge with the given ID, creating it if necessary.
    ///
    /// Returns the edge's new count.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is missing.
    pub fn add_count(&mut self, id: EdgeId<N>, count: u64) -> Result<u64, GraphError> {
        self.add_edge_with_count(id.origin_id, id.destination_id, count)
            .map(|edge| edge.count)
    }

    /// Remove the edge with the given ID from the edge map and both caches.
    ///
    /// Returns `None` (and changes nothing) if no such edge exists.
    pub fn remove_edge(&mut self, id: &EdgeId<N>) -> Option<Edge<N>> {
        let edge = self.edges.remove(id)?;
        self.unlink(id);
        Some(edge)
    }

    /// Remove the edge `origin_id → destination_id`, see [`Graph::remove_edge`].
    pub fn remove_edge_between(&mut self, origin_id: &N, destination_id: &N) -> Option<Edge<N>> {
        self.remove_edge(&EdgeId::new(origin_id.clone(), destination_id.clone()))
    }

    /// Remove every listed edge that exists. Returns how many were removed.
    pub fn remove_edges<'a>(&mut self, ids: impl IntoIterator<Item = &'a EdgeId<N>>) -> usize
    where
        N: 'a,
    {
        ids.into_iter()
            .filter(|id| self.remove_edge(id).is_some())
            .count()
    }

    fn link(&mut self, id: &EdgeId<N>) {
        if let Some(origin) = self.nodes.get_mut(&id.origin_id) {
            origin.descendant_ids.insert(id.destination_id.clone());
        }
        if let Some(destination) = self.nodes.get_mut(&id.destination_id) {
            destination.ancestor_ids.insert(id.origin_id.clone());
        }
    }

    fn unlink(&mut self, id: &EdgeId<N>) {
        if let Some(origin) = self.nodes.get_mut(&id.origin_id) {
            origin.descendant_ids.remove(&id.destination_id);
        }
        if let Some(destination) = self.nodes.get_mut(&id.destination_id) {
            destination.ancestor_ids.remove(&id.origin_id);
        }
    }

    // -----------------------------------------------------------------------
    // Node queries
    // -----------------------------------------------------------------------

    /// The node with the given ID, if any.
    #[must_use]
    pub fn node(&self, id: &N) -> Option<&Node<N, V>> {
        self.nodes.get(id)
    }

    /// The value stored for the given ID, if any.
    #[must_use]
    pub fn value(&self, id: &N) -> Option<&V> {
        self.nodes.get(id).map(Node::value)
    }

    /// `true` if a node with this ID exists.
    #[must_use]
    pub fn contains(&self, id: &N) -> bool {
        self.nodes.contains_key(id)
    }

    /// All nodes, in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<N, V>> {
        self.nodes.values()
    }

    /// All node IDs, in unspecified order.
    pub fn node_ids(&self) -> impl Iterator<Item = &N> {
        self.nodes.keys()
    }

    /// All stored values, in unspecified order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.nodes.values().map(Node::value)
    }

    /// Nodes without ancestors.
    pub fn sources(&self) -> impl Iterator<Item = &Node<N, V>> {
        self.nodes.values().filter(|node| node.is_source())
    }

    /// Nodes without descendants.
    pub fn sinks(&self) -> impl Iterator<Item = &Node<N, V>> {
        self.nodes.values().filter(|node| node.is_sink())
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the graph has no nodes (and therefore no edges).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // -----------------------------------------------------------------------
    // Edge queries
    // -----------------------------------------------------------------------

    /// The edge `origin_id → destination_id`, if it exists.
    #[must_use]
    pub fn edge(&self, origin_id: &N, destination_id: &N) -> Option<&Edge<N>> {
        self.edges
            .get(&EdgeId::new(origin_id.clone(), destination_id.clone()))
    }

    /// The edge with the given ID, if it exists.
    #[must_use]
    pub fn edge_by_id(&self, id: &EdgeId<N>) -> Option<&Edge<N>> {
        self.edges.get(id)
    }

    /// `true` if an edge with this ID exists.
    #[must_use]
    pub fn contains_edge(&self, id: &EdgeId<N>) -> bool {
        self.edges.contains_key(id)
    }

    /// All edges, in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<N>> {
        self.edges.values()
    }

    /// All edge IDs, in unspecified order.
    pub fn edge_ids(&self) -> impl Iterator<Item = &EdgeId<N>> {
        self.edges.keys()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check the adjacency invariant: every edge is mirrored in both
    /// endpoint caches, and every cached neighbour has a backing edge.
    ///
    /// O(V + E). Intended for tests and fuzzing.
    #[must_use]
    pub fn adjacency_is_consistent(&self) -> bool {
        let edges_cached = self.edges.keys().all(|id| {
            self.nodes
                .get(&id.origin_id)
                .is_some_and(|origin| origin.descendant_ids.contains(&id.destination_id))
                && self
                    .nodes
                    .get(&id.destination_id)
                    .is_some_and(|destination| destination.ancestor_ids.contains(&id.origin_id))
        });

        let caches_backed = self.nodes.values().all(|node| {
            node.descendant_ids
                .iter()
                .all(|d| self.contains_edge(&EdgeId::new(node.id.clone(), d.clone())))
                && node
                    .ancestor_ids
                    .iter()
                    .all(|a| self.contains_edge(&EdgeId::new(a.clone(), node.id.clone())))
        });

        edges_cached && caches_backed
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
