//! Graph algorithms implemented as inherent methods on [`crate::Graph`].
//!
//! Every algorithm keeps its scratch state (visited sets, DFS indices,
//! low-links, memoized counts) in maps local to the call, so a graph can be
//! analyzed from several threads at once as long as nobody mutates it.
//! Traversals use explicit work stacks rather than recursion, which keeps
//! long chains from exhausting the call stack.
//!
//! | Module            | Entry point                              | Precondition |
//! |-------------------|------------------------------------------|--------------|
//! | [`components`]    | `find_components`                        | none         |
//! | [`scc`]           | `find_strongly_connected_components`     | none         |
//! | [`condensation`]  | `make_condensation_graph`                | none         |
//! | [`cycles`]        | `find_cycles`, `is_acyclic`              | none         |
//! | [`reduction`]     | `find_transitive_edges`, `make_minimum_equivalent_graph` | acyclic |
//! | [`essential`]     | `find_essential_edges`                   | none         |
//! | [`ancestors`]     | `find_number_of_node_ancestors`          | acyclic for exact counts |

pub mod ancestors;
pub mod components;
pub mod condensation;
pub mod cycles;
pub mod essential;
pub mod reduction;
pub mod scc;
