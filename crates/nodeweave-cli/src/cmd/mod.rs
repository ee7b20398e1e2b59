//! Command handlers. Each module owns its clap `Args`, its serializable
//! payload and its text/pretty renderers.

pub mod ancestors;
pub mod completions;
pub mod components;
pub mod condense;
pub mod cycles;
pub mod essential;
pub mod reduce;
pub mod scc;
pub mod stats;

use std::collections::HashSet;
use std::io::{self, Write};

use nodeweave_core::Edge;

/// Turn ID sets into lists, optionally sorting members and groups.
pub(crate) fn id_groups(sets: Vec<HashSet<String>>, sort: bool) -> Vec<Vec<String>> {
    let mut groups: Vec<Vec<String>> = sets.into_iter().map(|set| id_list(set, sort)).collect();
    if sort {
        groups.sort_unstable();
    }
    groups
}

pub(crate) fn id_list(ids: impl IntoIterator<Item = String>, sort: bool) -> Vec<String> {
    let mut list: Vec<String> = ids.into_iter().collect();
    if sort {
        list.sort_unstable();
    }
    list
}

/// Sort edges by `(origin, destination)` when requested.
pub(crate) fn edge_list<N: Ord>(
    edges: impl IntoIterator<Item = Edge<N>>,
    sort: bool,
) -> Vec<Edge<N>> {
    let mut list: Vec<Edge<N>> = edges.into_iter().collect();
    if sort {
        list.sort_unstable_by(|a, b| a.id().cmp(b.id()));
    }
    list
}

/// One `origin<TAB>destination<TAB>count` line per edge.
pub(crate) fn write_edge_rows<N: std::fmt::Display>(
    w: &mut dyn Write,
    edges: &[Edge<N>],
) -> io::Result<()> {
    for edge in edges {
        writeln!(
            w,
            "{}\t{}\t{}",
            edge.origin_id(),
            edge.destination_id(),
            edge.count()
        )?;
    }
    Ok(())
}

/// Indented `origin -> destination` lines, with the count when above 1.
pub(crate) fn write_edge_bullets<N: std::fmt::Display>(
    w: &mut dyn Write,
    edges: &[Edge<N>],
) -> io::Result<()> {
    for edge in edges {
        if edge.count() > 1 {
            writeln!(
                w,
                "  {} -> {}  (x{})",
                edge.origin_id(),
                edge.destination_id(),
                edge.count()
            )?;
        } else {
            writeln!(w, "  {} -> {}", edge.origin_id(), edge.destination_id())?;
        }
    }
    Ok(())
}

/// Numbered groups for pretty output, or one space-separated line per group
/// for text output.
pub(crate) fn write_groups(
    w: &mut dyn Write,
    groups: &[Vec<String>],
    numbered: bool,
) -> io::Result<()> {
    for (idx, group) in groups.iter().enumerate() {
        if numbered {
            writeln!(w, "  {:>3}. {}", idx + 1, group.join(", "))?;
        } else {
            writeln!(w, "{}", group.join(" "))?;
        }
    }
    Ok(())
}
