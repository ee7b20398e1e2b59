//! Graph nodes and their adjacency caches.

use std::collections::HashSet;

use super::NodeId;

/// A node of a [`super::Graph`]: an ID, a value and cached neighbour IDs.
///
/// Nodes are created and destroyed only through the owning graph, which
/// keeps `ancestor_ids` and `descendant_ids` consistent with its edge map.
#[derive(Debug, Clone)]
pub struct Node<N, V> {
    pub(crate) id: N,
    pub(crate) value: V,
    pub(crate) ancestor_ids: HashSet<N>,
    pub(crate) descendant_ids: HashSet<N>,
}

impl<N: NodeId, V> Node<N, V> {
    pub(crate) fn new(id: N, value: V) -> Self {
        Self {
            id,
            value,
            ancestor_ids: HashSet::new(),
            descendant_ids: HashSet::new(),
        }
    }

    /// The node's ID.
    #[must_use]
    pub const fn id(&self) -> &N {
        &self.id
    }

    /// The stored value.
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// IDs of nodes with an edge pointing into this node.
    #[must_use]
    pub const fn ancestor_ids(&self) -> &HashSet<N> {
        &self.ancestor_ids
    }

    /// IDs of nodes this node has an edge pointing to.
    #[must_use]
    pub const fn descendant_ids(&self) -> &HashSet<N> {
        &self.descendant_ids
    }

    /// Ancestors and descendants combined (the undirected neighbourhood).
    #[must_use]
    pub fn neighbour_ids(&self) -> HashSet<N> {
        self.ancestor_ids
            .union(&self.descendant_ids)
            .cloned()
            .collect()
    }

    /// `true` if no edge points into this node.
    #[must_use]
    pub fn is_source(&self) -> bool {
        self.ancestor_ids.is_empty()
    }

    /// `true` if no edge leaves this node.
    #[must_use]
    pub fn is_sink(&self) -> bool {
        self.descendant_ids.is_empty()
    }

    /// `true` if the node has an edge to itself.
    #[must_use]
    pub fn has_self_loop(&self) -> bool {
        self.descendant_ids.contains(&self.id)
    }
}

impl<N: NodeId, V: PartialEq> PartialEq for Node<N, V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.value == other.value
            && self.ancestor_ids == other.ancestor_ids
            && self.descendant_ids == other.descendant_ids
    }
}

impl<N: NodeId, V: Eq> Eq for Node<N, V> {}
