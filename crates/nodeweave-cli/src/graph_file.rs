//! Graph input files.
//!
//! JSON or TOML, chosen by file extension:
//!
//! ```toml
//! nodes = ["parse", "check", "emit", "lint"]
//!
//! [[edges]]
//! from = "parse"
//! to = "check"
//!
//! [[edges]]
//! from = "check"
//! to = "emit"
//! count = 2
//! ```
//!
//! `nodes` is optional; edge endpoints are added as nodes automatically.
//! Node IDs are also the node values.

use anyhow::{Context, Result, bail};
use nodeweave_core::Graph;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// The graph type every command works on.
pub type NamedGraph = Graph<String, String>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    /// Multiplicity; defaults to 1.
    #[serde(default)]
    pub count: Option<u64>,
}

impl GraphFile {
    /// Parse file contents according to the extension of `path`.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON graph {}", path.display())),
            Some("toml") => toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML graph {}", path.display())),
            _ => bail!(
                "unsupported graph file extension for {} (expected .json or .toml)",
                path.display()
            ),
        }
    }

    /// Build the graph. Edge counts must be positive.
    pub fn into_graph(self) -> Result<NamedGraph> {
        let mut graph = NamedGraph::new();

        for id in self.nodes {
            graph.insert(id);
        }

        for edge in self.edges {
            let count = edge.count.unwrap_or(1);
            if count == 0 {
                bail!("edge {} -> {} has count 0", edge.from, edge.to);
            }
            graph.insert(edge.from.clone());
            graph.insert(edge.to.clone());
            graph
                .add_edge_with_count(edge.from, edge.to, count)
                .context("edge endpoints were just inserted")?;
        }

        Ok(graph)
    }
}

/// Read, parse and build the graph stored at `path`.
pub fn load_graph(path: &Path) -> Result<NamedGraph> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph file {}", path.display()))?;

    let graph = GraphFile::parse(path, &content)?.into_graph()?;
    debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}
