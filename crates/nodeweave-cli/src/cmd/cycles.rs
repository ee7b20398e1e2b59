//! `nw cycles`: list cycles, or test whether a new edge would close one.

use std::io::Write;

use clap::Args;
use serde::Serialize;

use crate::cmd::{id_groups, write_groups};
use crate::config::EffectiveConfig;
use crate::graph_file::NamedGraph;
use crate::output::{OutputMode, render_mode};

/// Arguments for `nw cycles`.
#[derive(Args, Debug, Default)]
pub struct CyclesArgs {
    /// Check whether adding the edge FROM -> TO would create a cycle.
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
    pub check: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct CyclesOutput {
    cycles: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct CheckOutput {
    from: String,
    to: String,
    creates_cycle: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<String>>,
}

/// Execute `nw cycles`.
pub fn run_cycles(
    args: &CyclesArgs,
    graph: &NamedGraph,
    output: OutputMode,
    config: &EffectiveConfig,
) -> anyhow::Result<()> {
    if let Some([from, to]) = args.check.as_deref() {
        return run_check(from, to, graph, output);
    }

    let payload = CyclesOutput {
        cycles: id_groups(graph.find_cycles(), config.sort_output),
    };

    render_mode(
        output,
        &payload,
        |report, w| write_groups(w, &report.cycles, false),
        render_cycles_human,
    )
}

fn run_check(from: &str, to: &str, graph: &NamedGraph, output: OutputMode) -> anyhow::Result<()> {
    let (from, to) = (from.to_string(), to.to_string());
    for id in [&from, &to] {
        if !graph.contains(id) {
            anyhow::bail!("node not found in graph: {id}");
        }
    }

    let path = graph.would_create_cycle(&from, &to);
    let payload = CheckOutput {
        creates_cycle: path.is_some(),
        from,
        to,
        path,
    };

    render_mode(output, &payload, render_check_text, render_check_human)
}

fn render_cycles_human(payload: &CyclesOutput, w: &mut dyn Write) -> std::io::Result<()> {
    if payload.cycles.is_empty() {
        writeln!(w, "No cycles found.")?;
        return Ok(());
    }

    writeln!(w, "Cycles ({})", payload.cycles.len())?;

    for (idx, cycle) in payload.cycles.iter().enumerate() {
        writeln!(w, "\nCycle {}:", idx + 1)?;
        for node in cycle {
            writeln!(w, "  - {node}")?;
        }
    }

    Ok(())
}

fn render_check_text(payload: &CheckOutput, w: &mut dyn Write) -> std::io::Result<()> {
    match &payload.path {
        Some(path) => writeln!(w, "cycle\t{}", path.join(" ")),
        None => writeln!(w, "ok"),
    }
}

fn render_check_human(payload: &CheckOutput, w: &mut dyn Write) -> std::io::Result<()> {
    match &payload.path {
        Some(path) => {
            writeln!(
                w,
                "Adding {} -> {} would create a cycle:",
                payload.from, payload.to
            )?;
            writeln!(w, "  {}", path.join(" -> "))
        }
        None => writeln!(
            w,
            "Adding {} -> {} keeps the graph acyclic.",
            payload.from, payload.to
        ),
    }
}
