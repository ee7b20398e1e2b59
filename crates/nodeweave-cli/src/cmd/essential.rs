//! `nw essential`: edges that every equivalent subgraph must keep.

use std::io::Write;

use clap::Args;
use nodeweave_core::Edge;
use serde::Serialize;

use crate::cmd::{edge_list, write_edge_bullets, write_edge_rows};
use crate::config::EffectiveConfig;
use crate::graph_file::NamedGraph;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `nw essential`.
#[derive(Args, Debug, Default)]
pub struct EssentialArgs {
    /// List the non-essential (removable) edges instead.
    #[arg(long)]
    pub non_essential: bool,
}

#[derive(Debug, Serialize)]
struct EssentialOutput {
    kind: &'static str,
    total_edge_count: usize,
    edges: Vec<Edge<String>>,
}

/// Execute `nw essential`.
pub fn run_essential(
    args: &EssentialArgs,
    graph: &NamedGraph,
    output: OutputMode,
    config: &EffectiveConfig,
) -> anyhow::Result<()> {
    let (kind, ids) = if args.non_essential {
        ("non-essential", graph.find_non_essential_edges())
    } else {
        ("essential", graph.find_essential_edges())
    };

    let edges = edge_list(
        graph.edges().filter(|edge| ids.contains(edge.id())).cloned(),
        config.sort_output,
    );

    let payload = EssentialOutput {
        kind,
        total_edge_count: graph.edge_count(),
        edges,
    };

    render_mode(
        output,
        &payload,
        |report, w| write_edge_rows(w, &report.edges),
        render_essential_human,
    )
}

fn render_essential_human(payload: &EssentialOutput, w: &mut dyn Write) -> std::io::Result<()> {
    let mut heading = payload.kind.to_string();
    if let Some(first) = heading.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    pretty_section(w, &format!("{heading} edges"))?;
    pretty_kv(
        w,
        payload.kind,
        format!("{} of {}", payload.edges.len(), payload.total_edge_count),
    )?;

    if !payload.edges.is_empty() {
        writeln!(w)?;
        write_edge_bullets(w, &payload.edges)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: EssentialArgs,
    }

    #[test]
    fn essential_args_parse_non_essential() {
        assert!(!Wrapper::parse_from(["test"]).args.non_essential);
        assert!(Wrapper::parse_from(["test", "--non-essential"]).args.non_essential);
    }

    #[test]
    fn render_essential_human_capitalizes_kind() {
        let graph = NamedGraph::from_values(
            ["a".to_string(), "b".to_string(), "c".to_string()],
            [
                ("a".to_string(), "b".to_string()),
                ("b".to_string(), "c".to_string()),
                ("a".to_string(), "c".to_string()),
            ],
        );
        let ids = graph.find_non_essential_edges();
        let payload = EssentialOutput {
            kind: "non-essential",
            total_edge_count: graph.edge_count(),
            edges: edge_list(
                graph.edges().filter(|edge| ids.contains(edge.id())).cloned(),
                true,
            ),
        };

        let mut out = Vec::new();
        render_essential_human(&payload, &mut out).expect("render");

        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.starts_with("Non-essential edges"));
        assert!(rendered.contains("1 of 3"));
        assert!(rendered.contains("  a -> c"));
    }
}
