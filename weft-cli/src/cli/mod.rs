//! Command-line orchestration for the graph engine.
//!
//! Every command reads one `strict graph` file. `show` prints the adjacency
//! listing, `paths` prints single-source distances and `mst` prints a minimum
//! spanning tree, either as a listing or in the import dialect.

mod commands;

pub use commands::{
    AlgorithmArg, Cli, CliError, Command, ExecutionSummary, MstCommand, MstFormat, PathsCommand,
    ShowCommand, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
