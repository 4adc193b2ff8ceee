//! Importer and exporter for the restricted `strict graph` text dialect.
//!
//! The dialect is a small subset of GraphViz undirected graphs:
//!
//! ```text
//! strict graph {
//! A -- B;
//! B -- C [weight = 5];
//! }
//! ```
//!
//! The first line is the header, every following line is either an edge
//! declaration or the closing `}`. Anything else rejects the whole input;
//! no partial graph is ever returned.

use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
    str::FromStr,
    sync::LazyLock,
};

use regex::Regex;
use tracing::{Span, debug, field, instrument};

use crate::{
    error::ImportError,
    graph::{Graph, Weight},
};

const HEADER: &str = "strict graph";
const TERMINATOR: &str = "}";
const DEFAULT_WEIGHT: Weight = 1;
// ASCII classes only: non-ASCII letters, NBSP or non-ASCII digits make a
// line malformed.
const DECLARATION: &str = r"^(?-u:\s)*((?-u:\w)+)(?-u:\s)+--(?-u:\s)+((?-u:\w)+)(?:(?-u:\s)*\[(?-u:\s)*weight(?-u:\s)*=(?-u:\s)*([0-9]+)(?-u:\s)*\])?(?-u:\s)*;(?-u:\s)*$";

static DECLARATION_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(DECLARATION));

/// Parses a graph from `reader`.
///
/// Lines are numbered from one. Both `LF` and `CRLF` line endings are
/// accepted. Edge declarations without a weight attribute get weight 1, and
/// endpoints are registered on first mention.
///
/// # Errors
/// Returns an [`ImportError`] when the header is missing, a body line is
/// malformed, a weight overflows [`Weight`], the input ends before the `}`
/// terminator, or reading fails.
///
/// # Examples
/// ```
/// use weft_core::import_graph;
///
/// let input = "strict graph\nA -- B;\nB -- C [weight = 5];\n}\n";
/// let graph = import_graph(input.as_bytes())?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.total_weight(), 6);
/// # Ok::<(), weft_core::ImportError>(())
/// ```
#[instrument(
    name = "graph.import",
    err,
    skip(reader),
    fields(lines = field::Empty, nodes = field::Empty, edges = field::Empty),
)]
pub fn import_graph<R: BufRead>(reader: R) -> Result<Graph, ImportError> {
    let declaration = DECLARATION_PATTERN
        .as_ref()
        .map_err(|source| ImportError::Pattern {
            source: source.clone(),
        })?;
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(Ok(line)) => line,
        Some(Err(source)) => {
            return Err(ImportError::Io {
                line_number: 1,
                source,
            });
        }
        None => return Err(ImportError::MissingHeader { found: None }),
    };
    if !is_header(&header) {
        return Err(ImportError::MissingHeader {
            found: Some(header),
        });
    }

    let mut graph = Graph::new();
    let mut lines_read = 1;
    for (line_number, read) in (2..).zip(lines) {
        let text = read.map_err(|source| ImportError::Io {
            line_number,
            source,
        })?;
        lines_read = line_number;
        let line = text.strip_suffix('\r').unwrap_or(&text);
        if line == TERMINATOR {
            record_import(&graph, lines_read);
            return Ok(graph);
        }
        declare_edge(&mut graph, declaration, line, line_number)?;
    }

    Err(ImportError::UnexpectedEof { lines_read })
}

/// Opens `path` and parses its contents with [`import_graph`].
///
/// # Errors
/// Returns [`ImportError::Open`] when the file cannot be opened, otherwise
/// any error [`import_graph`] reports.
pub fn import_graph_from_path(path: impl AsRef<Path>) -> Result<Graph, ImportError> {
    let location = path.as_ref();
    let file = File::open(location).map_err(|source| ImportError::Open {
        path: location.to_path_buf(),
        source,
    })?;
    import_graph(BufReader::new(file))
}

/// Writes `graph` in the import dialect.
///
/// Emits the `strict graph {` header, one declaration per logical edge
/// (parallel copies included) ordered by weight and endpoints, and the `}`
/// terminator. Nodes without edges cannot be expressed and are omitted.
/// Labels are written verbatim, so only graphs whose labels are word
/// characters read back.
///
/// # Errors
/// Propagates failures from `writer`.
pub fn export_graph<W: Write>(graph: &Graph, mut writer: W) -> std::io::Result<()> {
    write!(writer, "{}", Dialect(graph))?;
    writer.flush()
}

/// Renders `graph` in the import dialect; see [`export_graph`].
#[must_use]
pub fn to_dot_string(graph: &Graph) -> String {
    Dialect(graph).to_string()
}

impl FromStr for Graph {
    type Err = ImportError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        import_graph(input.as_bytes())
    }
}

struct Dialect<'a>(&'a Graph);

impl fmt::Display for Dialect<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut edges: Vec<_> = self.0.edges().collect();
        edges.sort();
        writeln!(f, "{HEADER} {{")?;
        for edge in edges {
            writeln!(
                f,
                "{} -- {} [weight = {}];",
                edge.first(),
                edge.second(),
                edge.weight()
            )?;
        }
        writeln!(f, "{TERMINATOR}")
    }
}

fn is_header(line: &str) -> bool {
    line.strip_prefix(HEADER)
        .map(str::trim_ascii)
        .is_some_and(|rest| rest.is_empty() || rest == "{")
}

fn declare_edge(
    graph: &mut Graph,
    declaration: &Regex,
    line: &str,
    line_number: usize,
) -> Result<(), ImportError> {
    let malformed = || ImportError::MalformedLine {
        line_number,
        line: line.to_owned(),
    };
    let captures = declaration.captures(line).ok_or_else(malformed)?;
    let (Some(first), Some(second)) = (captures.get(1), captures.get(2)) else {
        return Err(malformed());
    };
    let weight = match captures.get(3) {
        Some(raw) => raw
            .as_str()
            .parse::<Weight>()
            .map_err(|source| ImportError::InvalidWeight {
                line_number,
                raw: raw.as_str().to_owned(),
                source,
            })?,
        None => DEFAULT_WEIGHT,
    };
    graph.connect(first.as_str(), second.as_str(), weight);
    Ok(())
}

fn record_import(graph: &Graph, lines: usize) {
    let span = Span::current();
    span.record("lines", lines);
    span.record("nodes", graph.node_count());
    span.record("edges", graph.edge_count());
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph imported"
    );
}
