//! Error type for graph mutations and checked algorithms.

use std::fmt;

/// Machine-readable error codes for callers that branch on failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NodeNotFound,
    CyclicGraph,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NodeNotFound => "E2001",
            Self::CyclicGraph => "E2003",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NodeNotFound => "Node not found",
            Self::CyclicGraph => "Graph contains a cycle",
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::NodeNotFound => Some("Insert both endpoint nodes before adding an edge."),
            Self::CyclicGraph => {
                Some("Reduce the condensation graph instead, or use the essential-edge analysis.")
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors returned by [`crate::Graph`] mutators and checked algorithms.
///
/// Node IDs are rendered with their `Debug` form so the error stays
/// independent of the graph's ID type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint does not exist in the graph.
    #[error("node not found in graph: {id}")]
    NodeNotFound { id: String },

    /// An acyclic-only algorithm was given a graph containing a cycle.
    #[error("graph contains a cycle through {} node(s): {}", cycle.len(), cycle.join(", "))]
    CyclicGraph { cycle: Vec<String> },
}

impl GraphError {
    pub(crate) fn node_not_found(id: &impl fmt::Debug) -> Self {
        Self::NodeNotFound {
            id: format!("{id:?}"),
        }
    }

    /// The [`ErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NodeNotFound { .. } => ErrorCode::NodeNotFound,
            Self::CyclicGraph { .. } => ErrorCode::CyclicGraph,
        }
    }
}
