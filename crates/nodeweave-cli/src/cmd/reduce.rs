//! `nw reduce`: transitive reduction (minimum equivalent graph).

use std::io::Write;

use clap::Args;
use nodeweave_core::Edge;
use serde::Serialize;
use tracing::warn;

use crate::cmd::{edge_list, write_edge_bullets, write_edge_rows};
use crate::config::EffectiveConfig;
use crate::graph_file::NamedGraph;
use crate::output::{CliError, OutputMode, pretty_kv, pretty_section, render_error, render_mode};

/// Arguments for `nw reduce`.
#[derive(Args, Debug, Default)]
pub struct ReduceArgs {
    /// Reduce even if the graph has cycles. The result is not guaranteed to
    /// preserve reachability inside a cycle.
    #[arg(long)]
    pub allow_cycles: bool,

    /// List only the removed edges.
    #[arg(long)]
    pub removed_only: bool,
}

#[derive(Debug, Serialize)]
struct ReduceOutput {
    original_edge_count: usize,
    kept: Vec<Edge<String>>,
    removed: Vec<Edge<String>>,
}

/// Execute `nw reduce`.
pub fn run_reduce(
    args: &ReduceArgs,
    graph: &NamedGraph,
    output: OutputMode,
    config: &EffectiveConfig,
) -> anyhow::Result<()> {
    let strict = config.strict_acyclic && !args.allow_cycles;

    let transitive = if strict {
        match graph.checked_transitive_edges() {
            Ok(edges) => edges,
            Err(err) => {
                render_error(output, &CliError::from(&err))?;
                anyhow::bail!("cannot reduce a cyclic graph");
            }
        }
    } else {
        if !graph.is_acyclic() {
            warn!("reducing a cyclic graph; reachability inside cycles may not be preserved");
        }
        graph.find_transitive_edges()
    };

    let (removed, kept): (Vec<&Edge<String>>, Vec<&Edge<String>>) = graph
        .edges()
        .partition(|edge| transitive.contains(edge.id()));

    let payload = ReduceOutput {
        original_edge_count: graph.edge_count(),
        kept: if args.removed_only {
            Vec::new()
        } else {
            edge_list(kept.into_iter().cloned(), config.sort_output)
        },
        removed: edge_list(removed.into_iter().cloned(), config.sort_output),
    };

    render_mode(
        output,
        &payload,
        |report, w| {
            if args.removed_only {
                write_edge_rows(w, &report.removed)
            } else {
                write_edge_rows(w, &report.kept)
            }
        },
        render_reduce_human,
    )
}

fn render_reduce_human(payload: &ReduceOutput, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Transitive reduction")?;
    pretty_kv(w, "edges before", payload.original_edge_count.to_string())?;
    pretty_kv(w, "edges removed", payload.removed.len().to_string())?;

    if !payload.kept.is_empty() {
        writeln!(w, "\nKept:")?;
        write_edge_bullets(w, &payload.kept)?;
    }
    if !payload.removed.is_empty() {
        writeln!(w, "\nRemoved:")?;
        write_edge_bullets(w, &payload.removed)?;
    }
    Ok(())
}
