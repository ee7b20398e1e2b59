#![forbid(unsafe_code)]

mod cmd;
mod config;
mod graph_file;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use config::EffectiveConfig;
use graph_file::NamedGraph;
use output::{CliError, OutputMode};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Graph file names looked up in the working directory when `--graph` is
/// not given.
const DEFAULT_GRAPH_FILES: [&str; 2] = ["graph.toml", "graph.json"];

#[derive(Parser, Debug)]
#[command(
    name = "nw",
    author,
    version,
    about = "nodeweave: directed graph analysis",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Graph file to analyze (.toml or .json).
    #[arg(short, long, global = true, value_name = "FILE")]
    graph: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Resolve the output mode from flags, environment and config.
    fn output_mode(&self, config: &EffectiveConfig) -> OutputMode {
        output::resolve_output_mode(self.format, self.json, config.format.as_deref())
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Structure",
        about = "List weakly connected components",
        long_about = "Group nodes into weakly connected components, ignoring edge direction.",
        after_help = "EXAMPLES:\n    # List components of graph.toml\n    nw components\n\n    # Skip isolated nodes\n    nw components --min-size 2 --graph deps.json"
    )]
    Components(cmd::components::ComponentsArgs),

    #[command(
        next_help_heading = "Structure",
        about = "List strongly connected components",
        long_about = "Partition nodes into strongly connected components (Tarjan).",
        after_help = "EXAMPLES:\n    # All components\n    nw scc\n\n    # Only components with more than one node\n    nw scc --nontrivial --format json"
    )]
    Scc(cmd::scc::SccArgs),

    #[command(
        next_help_heading = "Structure",
        about = "List cycles or test a candidate edge",
        long_about = "List every cycle (multi-node SCC or self-loop), or check whether adding an edge would close one.",
        after_help = "EXAMPLES:\n    # List cycles\n    nw cycles\n\n    # Would lint -> parse create a cycle?\n    nw cycles --check lint parse"
    )]
    Cycles(cmd::cycles::CyclesArgs),

    #[command(
        next_help_heading = "Derived graphs",
        about = "Collapse strongly connected components",
        long_about = "Build the condensation graph: one node per SCC, edge counts summed across each pair of SCCs.",
        after_help = "EXAMPLES:\n    # Condensation graph\n    nw condense\n\n    # Condense, then drop transitive edges\n    nw condense --reduce"
    )]
    Condense(cmd::condense::CondenseArgs),

    #[command(
        next_help_heading = "Derived graphs",
        about = "Transitive reduction of an acyclic graph",
        long_about = "Remove every edge implied by a longer path, producing the minimum equivalent graph.",
        after_help = "EXAMPLES:\n    # Reduced edge list\n    nw reduce --format text\n\n    # Only the edges that would be removed\n    nw reduce --removed-only"
    )]
    Reduce(cmd::reduce::ReduceArgs),

    #[command(
        next_help_heading = "Derived graphs",
        about = "Classify edges as essential or removable",
        long_about = "Find edges that every reachability-preserving subgraph must keep. Works on cyclic graphs.",
        after_help = "EXAMPLES:\n    # Essential edges\n    nw essential\n\n    # Removable edges\n    nw essential --non-essential"
    )]
    Essential(cmd::essential::EssentialArgs),

    #[command(
        next_help_heading = "Metrics",
        about = "Count ancestors per node",
        long_about = "Edge-weighted ancestor counts, or distinct reachable ancestors with --reachable.",
        after_help = "EXAMPLES:\n    # Weighted counts for every node\n    nw ancestors\n\n    # Distinct ancestors of two nodes\n    nw ancestors --reachable emit lint"
    )]
    Ancestors(cmd::ancestors::AncestorsArgs),

    #[command(
        next_help_heading = "Metrics",
        about = "Summarize graph structure",
        long_about = "Report node/edge counts, density, degree extremes, component and cycle counts.",
        after_help = "EXAMPLES:\n    # Stats for graph.toml\n    nw stats\n\n    # Machine-readable\n    nw stats --format json"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n    # Bash\n    nw completions bash > ~/.local/share/bash-completion/completions/nw"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("NODEWEAVE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "nodeweave=debug,nw=debug,info"
        } else {
            "nodeweave=info,nw=info,warn"
        })
    });

    let format = env::var("NODEWEAVE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Pick the graph file: `--graph`, else the first default file present.
fn locate_graph(flag: Option<&Path>, project_root: &Path) -> Option<PathBuf> {
    if let Some(path) = flag {
        return Some(path.to_path_buf());
    }
    DEFAULT_GRAPH_FILES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

fn load_graph_or_report(
    flag: Option<&Path>,
    project_root: &Path,
    output: OutputMode,
) -> anyhow::Result<NamedGraph> {
    let Some(path) = locate_graph(flag, project_root) else {
        output::render_error(
            output,
            &CliError::with_details(
                "no graph file found",
                "pass --graph <FILE> or create graph.toml in the current directory",
                "graph_missing",
            ),
        )?;
        anyhow::bail!("graph file not found");
    };
    match graph_file::load_graph(&path) {
        Ok(graph) => Ok(graph),
        Err(err) => {
            output::render_error(
                output,
                &CliError::with_details(
                    format!("{err:#}"),
                    "check that the file is valid TOML or JSON with a nodes list and edges",
                    "graph_invalid",
                ),
            )?;
            Err(err)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let project_root = env::current_dir()?;
    let config = config::resolve_config(&project_root)?;
    let output = cli.output_mode(&config);
    debug!(?output, "resolved output mode");

    if let Commands::Completions(ref args) = cli.command {
        let mut command = Cli::command();
        return cmd::completions::run_completions(args.shell, &mut command);
    }

    let graph = load_graph_or_report(cli.graph.as_deref(), &project_root, output)?;

    match cli.command {
        Commands::Components(ref args) => {
            cmd::components::run_components(args, &graph, output, &config)
        }
        Commands::Scc(ref args) => cmd::scc::run_scc(args, &graph, output, &config),
        Commands::Cycles(ref args) => cmd::cycles::run_cycles(args, &graph, output, &config),
        Commands::Condense(ref args) => cmd::condense::run_condense(args, &graph, output, &config),
        Commands::Reduce(ref args) => cmd::reduce::run_reduce(args, &graph, output, &config),
        Commands::Essential(ref args) => {
            cmd::essential::run_essential(args, &graph, output, &config)
        }
        Commands::Ancestors(ref args) => {
            cmd::ancestors::run_ancestors(args, &graph, output, &config)
        }
        Commands::Stats(ref args) => cmd::stats::run_stats(args, &graph, output),
        Commands::Completions(_) => Ok(()),
    }
}
