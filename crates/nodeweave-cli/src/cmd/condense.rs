//! `nw condense`: collapse strongly connected components.

use std::io::Write;

use clap::Args;
use nodeweave_core::{Edge, SccId};
use serde::Serialize;

use crate::cmd::{edge_list, id_list, write_edge_bullets, write_edge_rows};
use crate::config::EffectiveConfig;
use crate::graph_file::NamedGraph;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

/// Arguments for `nw condense`.
#[derive(Args, Debug, Default)]
pub struct CondenseArgs {
    /// Also drop transitive edges from the condensation graph.
    #[arg(long)]
    pub reduce: bool,
}

#[derive(Debug, Serialize)]
struct SccEntry {
    id: SccId,
    nodes: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CondenseOutput {
    reduced: bool,
    sccs: Vec<SccEntry>,
    edges: Vec<Edge<SccId>>,
}

/// Execute `nw condense`.
pub fn run_condense(
    args: &CondenseArgs,
    graph: &NamedGraph,
    output: OutputMode,
    config: &EffectiveConfig,
) -> anyhow::Result<()> {
    let mut condensed = graph.make_condensation_graph();
    if args.reduce {
        let removed = condensed.filter_transitive_reduction();
        tracing::debug!(removed, "reduced condensation graph");
    }

    let mut sccs: Vec<SccEntry> = condensed
        .values()
        .map(|scc| SccEntry {
            id: scc.id(),
            nodes: id_list(scc.node_ids().iter().cloned(), config.sort_output),
        })
        .collect();
    if config.sort_output {
        sccs.sort_unstable_by_key(|entry| entry.id);
    }

    let payload = CondenseOutput {
        reduced: args.reduce,
        sccs,
        edges: edge_list(condensed.edges().cloned(), config.sort_output),
    };

    render_mode(output, &payload, render_condense_text, render_condense_human)
}

fn render_condense_text(payload: &CondenseOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for scc in &payload.sccs {
        writeln!(w, "{}\t{}", scc.id, scc.nodes.join(" "))?;
    }
    writeln!(w)?;
    write_edge_rows(w, &payload.edges)
}

fn render_condense_human(payload: &CondenseOutput, w: &mut dyn Write) -> std::io::Result<()> {
    let heading = if payload.reduced {
        "Condensation graph (reduced)"
    } else {
        "Condensation graph"
    };
    pretty_section(w, heading)?;
    pretty_kv(w, "sccs", payload.sccs.len().to_string())?;
    pretty_kv(w, "edges", payload.edges.len().to_string())?;

    writeln!(w)?;
    for scc in &payload.sccs {
        writeln!(w, "  {:<8} {}", scc.id.to_string(), scc.nodes.join(", "))?;
    }

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
        args: CondenseArgs,
    }

    fn sample_payload() -> CondenseOutput {
        let graph = NamedGraph::from_values(
            ["a".to_string(), "b".to_string(), "c".to_string()],
            [
                ("a".to_string(), "b".to_string()),
                ("b".to_string(), "a".to_string()),
                ("b".to_string(), "c".to_string()),
            ],
        );
        let condensed = graph.make_condensation_graph();
        let mut sccs: Vec<SccEntry> = condensed
            .values()
            .map(|scc| SccEntry {
                id: scc.id(),
                nodes: id_list(scc.node_ids().iter().cloned(), true),
            })
            .collect();
        sccs.sort_unstable_by_key(|entry| entry.id);

        CondenseOutput {
            reduced: false,
            sccs,
            edges: edge_list(condensed.edges().cloned(), true),
        }
    }

    #[test]
    fn condense_args_parse_reduce() {
        assert!(!Wrapper::parse_from(["test"]).args.reduce);
        assert!(Wrapper::parse_from(["test", "--reduce"]).args.reduce);
    }

    #[test]
    fn render_condense_text_lists_sccs_and_edges() {
        let payload = sample_payload();
        let mut out = Vec::new();
        render_condense_text(&payload, &mut out).expect("render");

        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("a b"));
        assert_eq!(rendered.lines().filter(|line| line.contains("\t1")).count(), 1);
    }

    #[test]
    fn render_condense_human_counts() {
        let payload = sample_payload();
        let mut out = Vec::new();
        render_condense_human(&payload, &mut out).expect("render");

        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("Condensation graph"));
        assert!(rendered.contains("a, b"));
        assert!(rendered.contains(" -> "));
    }
}
