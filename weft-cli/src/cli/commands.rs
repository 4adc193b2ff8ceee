//! Argument parsing and command execution for the `weft` binary.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use weft_core::{
    DistanceMap, Graph, ImportError, ShortestPathAlgorithm, SpanningForest, export_graph,
    import_graph_from_path, minimum_spanning_forest, shortest_paths,
};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "weft", about = "Inspect weighted undirected graphs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print node and edge counts followed by the adjacency listing.
    Show(ShowCommand),
    /// Print the shortest distance from one node to every node.
    Paths(PathsCommand),
    /// Print a minimum spanning tree, or a forest for disconnected graphs.
    Mst(MstCommand),
}

/// Options accepted by the `show` command.
#[derive(Debug, Args, Clone)]
pub struct ShowCommand {
    /// Path to a `strict graph` file.
    pub path: PathBuf,
}

/// Options accepted by the `paths` command.
#[derive(Debug, Args, Clone)]
pub struct PathsCommand {
    /// Path to a `strict graph` file.
    pub path: PathBuf,

    /// Label of the node distances are measured from.
    #[arg(long, short)]
    pub source: String,

    /// Shortest-path implementation to run.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Heap)]
    pub algorithm: AlgorithmArg,
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Path to a `strict graph` file.
    pub path: PathBuf,

    /// Output layout for the spanning tree.
    #[arg(long, value_enum, default_value_t = MstFormat::Listing)]
    pub format: MstFormat,
}

/// Shortest-path implementations selectable from the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum AlgorithmArg {
    /// Linear minimum scan, `O(V²)`.
    Quadratic,
    /// Binary heap with lazy decrease-key.
    Heap,
}

impl From<AlgorithmArg> for ShortestPathAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Quadratic => Self::Quadratic,
            AlgorithmArg::Heap => Self::Heap,
        }
    }
}

/// Output layouts for the `mst` command.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum MstFormat {
    /// Totals followed by one `low -- high<TAB>weight` line per edge.
    Listing,
    /// The tree in the `strict graph` dialect, ready to re-import.
    Dot,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be read or parsed.
    #[error(transparent)]
    Import(#[from] ImportError),
    /// The requested source label does not name a node of the graph.
    #[error("source node `{label}` is not part of the graph")]
    UnknownSource {
        /// Label supplied on the command line.
        label: String,
    },
}

impl CliError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Import(err) => err.code().as_str(),
            Self::UnknownSource { .. } => "CLI_UNKNOWN_SOURCE",
        }
    }
}

/// Outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Graph loaded by `show`.
    Show {
        /// The imported graph.
        graph: Graph,
    },
    /// Distances computed by `paths`.
    Paths {
        /// Implementation that produced the distances.
        algorithm: ShortestPathAlgorithm,
        /// Distance to every node, keyed by label.
        distances: DistanceMap,
    },
    /// Spanning forest computed by `mst`.
    Mst {
        /// The forest and its component count.
        forest: SpanningForest,
        /// Requested output layout.
        format: MstFormat,
    },
}

/// Executes the command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph cannot be imported or the `paths`
/// source is unknown.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use weft_cli::cli::{Cli, Command, ExecutionSummary, MstCommand, MstFormat, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "strict graph\nA -- B [weight = 2];\nB -- C;\n}\n")?;
/// let cli = Cli {
///     command: Command::Mst(MstCommand {
///         path: file.path().to_path_buf(),
///         format: MstFormat::Listing,
///     }),
/// };
/// let ExecutionSummary::Mst { forest, .. } = run_cli(cli)? else {
///     panic!("mst yields a forest");
/// };
/// assert_eq!(forest.total_weight(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Show(show) => {
            span.record("command", "show");
            run_show(&show)
        }
        Command::Paths(paths) => {
            span.record("command", "paths");
            run_paths(paths)
        }
        Command::Mst(mst) => {
            span.record("command", "mst");
            run_mst(&mst)
        }
    }
}

pub(super) fn run_show(command: &ShowCommand) -> Result<ExecutionSummary, CliError> {
    let graph = load_graph(&command.path)?;
    Ok(ExecutionSummary::Show { graph })
}

#[instrument(
    name = "cli.paths",
    err,
    skip(command),
    fields(source = %command.source, algorithm = field::Empty, reachable = field::Empty),
)]
pub(super) fn run_paths(command: PathsCommand) -> Result<ExecutionSummary, CliError> {
    let PathsCommand {
        path,
        source,
        algorithm,
    } = command;
    let graph = load_graph(&path)?;
    let Some(origin) = graph.node(&source) else {
        return Err(CliError::UnknownSource { label: source });
    };

    let selected = ShortestPathAlgorithm::from(algorithm);
    let distances = shortest_paths(&graph, origin, selected);

    let span = Span::current();
    span.record("algorithm", selected.as_str());
    span.record("reachable", distances.reachable().count());
    Ok(ExecutionSummary::Paths {
        algorithm: selected,
        distances,
    })
}

pub(super) fn run_mst(command: &MstCommand) -> Result<ExecutionSummary, CliError> {
    let graph = load_graph(&command.path)?;
    let forest = minimum_spanning_forest(&graph);
    info!(
        components = forest.component_count(),
        total_weight = forest.total_weight(),
        "spanning forest computed"
    );
    Ok(ExecutionSummary::Mst {
        forest,
        format: command.format,
    })
}

#[instrument(name = "cli.load_graph", err, skip(path), fields(path = %path.display()))]
pub(super) fn load_graph(path: &Path) -> Result<Graph, CliError> {
    let graph = import_graph_from_path(path)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Renders `summary` to `writer` as plain text.
///
/// `show` prints the counts and the adjacency listing, `paths` prints one
/// `label<TAB>distance` line per node with `inf` for unreachable nodes, and
/// `mst` prints either a listing or the tree in the import dialect.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use weft_cli::cli::{ExecutionSummary, render_summary};
/// # use weft_core::Graph;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph: Graph = "strict graph\nA -- B [weight = 4];\n}".parse()?;
/// let mut buffer = Vec::new();
/// render_summary(&ExecutionSummary::Show { graph }, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "nodes: 2\nedges: 1\ntotal weight: 4\nA -> B (4)\nB -> A (4)\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Show { graph } => {
            writeln!(writer, "nodes: {}", graph.node_count())?;
            writeln!(writer, "edges: {}", graph.edge_count())?;
            writeln!(writer, "total weight: {}", graph.total_weight())?;
            write!(writer, "{graph}")
        }
        ExecutionSummary::Paths {
            algorithm,
            distances,
        } => {
            writeln!(writer, "source: {}", distances.source())?;
            writeln!(writer, "algorithm: {algorithm}")?;
            for (node, distance) in distances.iter() {
                writeln!(writer, "{node}\t{distance}")?;
            }
            Ok(())
        }
        ExecutionSummary::Mst {
            forest,
            format: MstFormat::Dot,
        } => export_graph(forest.tree(), writer),
        ExecutionSummary::Mst {
            forest,
            format: MstFormat::Listing,
        } => {
            writeln!(writer, "total weight: {}", forest.total_weight())?;
            writeln!(writer, "components: {}", forest.component_count())?;
            let mut edges: Vec<_> = forest.tree().edges().collect();
            edges.sort_unstable();
            for edge in edges {
                let (low, high) = edge.canonical_endpoints();
                writeln!(writer, "{low} -- {high}\t{}", edge.weight())?;
            }
            Ok(())
        }
    }
}
