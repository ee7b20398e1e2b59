//! Edge identity and edge records.

use serde::{Deserialize, Serialize};

/// Identity of an edge: the ordered `(origin, destination)` pair.
///
/// At most one edge exists per `EdgeId` in a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId<N> {
    pub origin_id: N,
    pub destination_id: N,
}

impl<N> EdgeId<N> {
    /// Create the ID of the edge `origin_id → destination_id`.
    pub const fn new(origin_id: N, destination_id: N) -> Self {
        Self {
            origin_id,
            destination_id,
        }
    }
}

impl<N: PartialEq> EdgeId<N> {
    /// `true` if origin and destination are the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.origin_id == self.destination_id
    }
}

impl<N> From<(N, N)> for EdgeId<N> {
    fn from((origin_id, destination_id): (N, N)) -> Self {
        Self::new(origin_id, destination_id)
    }
}

/// A directed edge with a multiplicity count.
///
/// `count` records how many times the connection was added. No algorithm in
/// this crate treats it as a distance; only ancestor counting sums it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<N> {
    #[serde(flatten)]
    pub(crate) id: EdgeId<N>,
    pub(crate) count: u64,
}

impl<N> Edge<N> {
    pub(crate) const fn new(id: EdgeId<N>, count: u64) -> Self {
        Self { id, count }
    }

    /// This edge's identity.
    #[must_use]
    pub const fn id(&self) -> &EdgeId<N> {
        &self.id
    }

    #[must_use]
    pub const fn origin_id(&self) -> &N {
        &self.id.origin_id
    }

    #[must_use]
    pub const fn destination_id(&self) -> &N {
        &self.id.destination_id
    }

    /// How many times this edge was added.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }
}
