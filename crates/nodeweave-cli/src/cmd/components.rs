//! `nw components`: weakly connected components.

use std::io::Write;

use clap::Args;
use serde::Serialize;

use crate::cmd::{id_groups, write_groups};
use crate::config::EffectiveConfig;
use crate::graph_file::NamedGraph;
use crate::output::{OutputMode, pretty_section, render_mode};

/// Arguments for `nw components`.
#[derive(Args, Debug, Default)]
pub struct ComponentsArgs {
    /// Only report components with at least this many nodes.
    #[arg(long, default_value_t = 1)]
    pub min_size: usize,
}

#[derive(Debug, Serialize)]
struct ComponentsOutput {
    count: usize,
    components: Vec<Vec<String>>,
}

/// Execute `nw components`.
pub fn run_components(
    args: &ComponentsArgs,
    graph: &NamedGraph,
    output: OutputMode,
    config: &EffectiveConfig,
) -> anyhow::Result<()> {
    let components: Vec<Vec<String>> = id_groups(graph.find_components(), config.sort_output)
        .into_iter()
        .filter(|group| group.len() >= args.min_size)
        .collect();

    let payload = ComponentsOutput {
        count: components.len(),
        components,
    };

    render_mode(
        output,
        &payload,
        |report, w| write_groups(w, &report.components, false),
        render_components_human,
    )
}

fn render_components_human(payload: &ComponentsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    if payload.components.is_empty() {
        writeln!(w, "No components found.")?;
        return Ok(());
    }

    pretty_section(w, &format!("Weakly connected components ({})", payload.count))?;
    write_groups(w, &payload.components, true)
}
