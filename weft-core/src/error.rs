//! Error types for the Weft core library.
//!
//! Defines the error enums exposed by the public API together with stable,
//! machine-readable codes for logging surfaces.

use std::{fmt, io, num::ParseIntError, path::PathBuf, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while mutating a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a node that was never added to the graph.
    #[error("node `{label}` is not part of the graph")]
    UnknownNode {
        /// Label of the missing endpoint.
        label: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a node that was never added to the graph.
        UnknownNode => UnknownNode { .. } => "GRAPH_UNKNOWN_NODE",
    }
}

/// An error produced while importing a graph description.
///
/// Every variant means the same thing to a caller that only needs to know
/// whether the import succeeded: no graph was produced. The variants exist
/// so diagnostics can point at the offending input.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ImportError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Open {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The first line was not the `strict graph` header.
    #[error("expected a `strict graph` header but found {}", describe_header(.found.as_deref()))]
    MissingHeader {
        /// The first line of the input, when one existed.
        found: Option<String>,
    },
    /// A body line matched neither an edge declaration nor the terminator.
    #[error("line {line_number} is not a valid edge declaration: `{line}`")]
    MalformedLine {
        /// One-based line number of the offending line.
        line_number: usize,
        /// The offending line as read.
        line: String,
    },
    /// A weight attribute did not fit the supported integer range.
    #[error("line {line_number} has an invalid weight `{raw}`: {source}")]
    InvalidWeight {
        /// One-based line number of the offending line.
        line_number: usize,
        /// The digits that failed to parse.
        raw: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// The input ended before the closing `}` line.
    #[error("input ended after {lines_read} lines without a closing `}}`")]
    UnexpectedEof {
        /// Number of lines consumed before the input ran out.
        lines_read: usize,
    },
    /// Reading from the underlying source failed.
    #[error("failed to read line {line_number}: {source}")]
    Io {
        /// One-based number of the line being read.
        line_number: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The edge declaration pattern failed to compile.
    #[error("edge declaration pattern is invalid: {source}")]
    Pattern {
        /// Underlying regex compilation failure.
        #[from]
        source: regex::Error,
    },
}

fn describe_header(found: Option<&str>) -> String {
    found.map_or_else(|| "empty input".to_owned(), |line| format!("`{line}`"))
}

define_error_codes! {
    /// Stable codes describing [`ImportError`] variants.
    enum ImportErrorCode for ImportError {
        /// The input file could not be opened.
        OpenFailed => Open { .. } => "IMPORT_OPEN_FAILED",
        /// The first line was not the `strict graph` header.
        MissingHeader => MissingHeader { .. } => "IMPORT_MISSING_HEADER",
        /// A body line matched neither an edge declaration nor the terminator.
        MalformedLine => MalformedLine { .. } => "IMPORT_MALFORMED_LINE",
        /// A weight attribute did not fit the supported integer range.
        InvalidWeight => InvalidWeight { .. } => "IMPORT_INVALID_WEIGHT",
        /// The input ended before the closing `}` line.
        UnexpectedEof => UnexpectedEof { .. } => "IMPORT_UNEXPECTED_EOF",
        /// Reading from the underlying source failed.
        ReadFailed => Io { .. } => "IMPORT_READ_FAILED",
        /// The edge declaration pattern failed to compile.
        PatternInvalid => Pattern { .. } => "IMPORT_PATTERN_INVALID",
    }
}
