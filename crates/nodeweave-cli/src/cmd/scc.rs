//! `nw scc`: strongly connected components.

use std::io::Write;

use clap::Args;
use serde::Serialize;

use crate::cmd::{id_groups, write_groups};
use crate::config::EffectiveConfig;
use crate::graph_file::NamedGraph;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `nw scc`.
#[derive(Args, Debug, Default)]
pub struct SccArgs {
    /// Omit single-node components.
    #[arg(long)]
    pub nontrivial: bool,
}

#[derive(Debug, Serialize)]
struct SccOutput {
    count: usize,
    nontrivial_count: usize,
    components: Vec<Vec<String>>,
}

/// Execute `nw scc`.
pub fn run_scc(
    args: &SccArgs,
    graph: &NamedGraph,
    output: OutputMode,
    config: &EffectiveConfig,
) -> anyhow::Result<()> {
    let all = id_groups(
        graph.find_strongly_connected_components(),
        config.sort_output,
    );
    let count = all.len();
    let nontrivial_count = all.iter().filter(|group| group.len() > 1).count();

    let components = if args.nontrivial {
        all.into_iter().filter(|group| group.len() > 1).collect()
    } else {
        all
    };

    let payload = SccOutput {
        count,
        nontrivial_count,
        components,
    };

    render_mode(
        output,
        &payload,
        |report, w| write_groups(w, &report.components, false),
        render_scc_human,
    )
}

fn render_scc_human(payload: &SccOutput, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, "Strongly connected components")?;
    pretty_kv(w, "components", payload.count.to_string())?;
    pretty_kv(w, "multi-node", payload.nontrivial_count.to_string())?;

    if payload.components.is_empty() {
        return Ok(());
    }

    writeln!(w)?;
    write_groups(w, &payload.components, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: SccArgs,
    }

    #[test]
    fn scc_args_parse_nontrivial() {
        assert!(!Wrapper::parse_from(["test"]).args.nontrivial);
        assert!(Wrapper::parse_from(["test", "--nontrivial"]).args.nontrivial);
    }

    #[test]
    fn render_scc_human_reports_counts() {
        let payload = SccOutput {
            count: 3,
            nontrivial_count: 1,
            components: vec![vec!["a".to_string(), "b".to_string()]],
        };
        let mut out = Vec::new();
        render_scc_human(&payload, &mut out).expect("render");

        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("components:"));
        assert!(rendered.contains("multi-node:"));
        assert!(rendered.contains("1. a, b"));
    }
}
