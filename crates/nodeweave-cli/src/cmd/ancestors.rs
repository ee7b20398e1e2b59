//! `nw ancestors`: per-node ancestor counts.

use std::io::Write;

use clap::Args;
use serde::Serialize;
use tracing::warn;

use crate::config::EffectiveConfig;
use crate::graph_file::NamedGraph;
use crate::output::{OutputMode, pretty_section, render_mode};

/// Arguments for `nw ancestors`.
#[derive(Args, Debug, Default)]
pub struct AncestorsArgs {
    /// Count distinct ancestor nodes instead of edge-weighted paths.
    #[arg(long)]
    pub reachable: bool,

    /// Only report these nodes.
    #[arg(value_name = "NODE")]
    pub nodes: Vec<String>,
}

#[derive(Debug, Serialize)]
struct AncestorCount {
    node: String,
    count: u64,
}

#[derive(Debug, Serialize)]
struct AncestorsOutput {
    mode: &'static str,
    counts: Vec<AncestorCount>,
}

/// Execute `nw ancestors`.
pub fn run_ancestors(
    args: &AncestorsArgs,
    graph: &NamedGraph,
    output: OutputMode,
    config: &EffectiveConfig,
) -> anyhow::Result<()> {
    if let Some(missing) = args.nodes.iter().find(|id| !graph.contains(id)) {
        anyhow::bail!("node not found in graph: {missing}");
    }

    let (mode, counts): (&'static str, Vec<(String, u64)>) = if args.reachable {
        let counts = graph
            .count_reachable_ancestors()
            .into_iter()
            .map(|(id, count)| (id, u64::try_from(count).unwrap_or(u64::MAX)))
            .collect();
        ("reachable", counts)
    } else {
        if !graph.is_acyclic() {
            warn!("weighted ancestor counts are approximate on cyclic graphs");
        }
        ("weighted", graph.find_number_of_node_ancestors().into_iter().collect())
    };

    let mut counts: Vec<AncestorCount> = counts
        .into_iter()
        .filter(|(id, _)| args.nodes.is_empty() || args.nodes.contains(id))
        .map(|(node, count)| AncestorCount { node, count })
        .collect();
    if config.sort_output {
        counts.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.node.cmp(&b.node)));
    }

    let payload = AncestorsOutput { mode, counts };

    render_mode(
        output,
        &payload,
        render_ancestors_text,
        render_ancestors_human,
    )
}

fn render_ancestors_text(payload: &AncestorsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    for entry in &payload.counts {
        writeln!(w, "{}\t{}", entry.node, entry.count)?;
    }
    Ok(())
}

fn render_ancestors_human(payload: &AncestorsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &format!("Ancestor counts ({})", payload.mode))?;
    let width = payload
        .counts
        .iter()
        .map(|entry| entry.node.len())
        .max()
        .unwrap_or(0);
    for entry in &payload.counts {
        writeln!(w, "  {:<width$}  {:>6}", entry.node, entry.count)?;
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
        args: AncestorsArgs,
    }

    #[test]
    fn ancestors_args_parse_nodes() {
        let parsed = Wrapper::parse_from(["test", "--reachable", "a", "b"]);
        assert!(parsed.args.reachable);
        assert_eq!(parsed.args.nodes, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn render_ancestors_text_is_tab_separated() {
        let payload = AncestorsOutput {
            mode: "weighted",
            counts: vec![
                AncestorCount {
                    node: "sink".to_string(),
                    count: 8,
                },
                AncestorCount {
                    node: "root".to_string(),
                    count: 0,
                },
            ],
        };
        let mut out = Vec::new();
        render_ancestors_text(&payload, &mut out).expect("render");
        assert_eq!(String::from_utf8(out).expect("utf8"), "sink\t8\nroot\t0\n");
    }

    #[test]
    fn render_ancestors_human_names_mode() {
        let payload = AncestorsOutput {
            mode: "reachable",
            counts: vec![AncestorCount {
                node: "a".to_string(),
                count: 2,
            }],
        };
        let mut out = Vec::new();
        render_ancestors_human(&payload, &mut out).expect("render");

        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.starts_with("Ancestor counts (reachable)"));
        assert!(rendered.contains("a       2"));
    }
}
