#![forbid(unsafe_code)]
//! nodeweave-core library.
//!
//! A directed graph container whose nodes cache their ancestor and
//! descendant IDs, plus the classical algorithms built on top of it:
//! weak components, strongly connected components, condensation, transitive
//! reduction (minimum equivalent graph), essential-edge classification and
//! ancestor counts.
//!
//! # Conventions
//!
//! - **Errors**: Client mistakes surface as [`GraphError`] or as `Option`/empty
//!   results. Broken internal invariants are logged and then panic.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//!   The library never installs a subscriber.
//!
//! # Typical Usage
//!
//! ```rust
//! use nodeweave_core::Graph;
//!
//! let mut graph = Graph::from_values([1, 2, 3], [(1, 2), (2, 3), (1, 3)]);
//! let meg = graph.make_minimum_equivalent_graph();
//! assert_eq!(meg.edge_count(), 2);
//!
//! graph.insert(4);
//! assert_eq!(graph.find_components().len(), 2);
//! ```

pub mod algo;
pub mod error;
pub mod graph;
pub mod stats;

pub use algo::condensation::{CondensationGraph, SccId, StronglyConnectedComponent};
pub use error::{ErrorCode, GraphError};
pub use graph::{Edge, EdgeId, Graph, Node, NodeId};
pub use stats::GraphStats;
