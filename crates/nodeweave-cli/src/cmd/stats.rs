//! `nw stats`: structural summary of the graph.

use std::io::Write;

use clap::Args;
use nodeweave_core::GraphStats;

use crate::graph_file::NamedGraph;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `nw stats`.
#[derive(Args, Debug, Default)]
pub struct StatsArgs {}

/// Execute `nw stats`.
pub fn run_stats(_args: &StatsArgs, graph: &NamedGraph, output: OutputMode) -> anyhow::Result<()> {
    let stats = GraphStats::from_graph(graph);
    render_mode(output, &stats, render_stats_text, render_stats_human)
}

fn stat_rows(stats: &GraphStats) -> [(&'static str, String); 15] {
    [
        ("nodes", stats.node_count.to_string()),
        ("edges", stats.edge_count.to_string()),
        ("density", format!("{:.4}", stats.density)),
        ("sources", stats.source_count.to_string()),
        ("sinks", stats.sink_count.to_string()),
        ("isolated", stats.isolated_node_count.to_string()),
        ("max in-degree", stats.max_in_degree.to_string()),
        ("max out-degree", stats.max_out_degree.to_string()),
        (
            "weak components",
            stats.weakly_connected_component_count.to_string(),
        ),
        ("sccs", stats.scc_count.to_string()),
        ("cycles", stats.cycle_count.to_string()),
        ("self-loops", stats.self_loop_count.to_string()),
        ("condensed edges", stats.condensed_edge_count.to_string()),
        ("reduced edges", stats.reduced_edge_count.to_string()),
        ("reduction ratio", format!("{:.2}", stats.reduction_ratio())),
    ]
}

fn render_stats_text(stats: &GraphStats, w: &mut dyn Write) -> std::io::Result<()> {
    for (key, value) in stat_rows(stats) {
        writeln!(w, "{}\t{value}", key.replace(' ', "_"))?;
    }
    Ok(())
}

fn render_stats_human(stats: &GraphStats, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Graph stats")?;
    for (key, value) in stat_rows(stats) {
        pretty_kv(w, key, value)?;
    }

    if stats.has_cycles() {
        writeln!(w)?;
        writeln!(
            w,
            "Graph is cyclic; run `nw cycles` to list the cycles or `nw condense` to collapse them."
        )?;
    }
    Ok(())
}
