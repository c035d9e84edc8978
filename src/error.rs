//! Error taxonomy for source-unit conversion.
//!
//! Every variant is terminal for the unit it occurs in. None of these
//! conditions are transient, so nothing is retried.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a single source unit.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input path is missing or unreadable.
    #[error("cannot read {}: {source}", .path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The frontend reported a syntax error, or produced no tree at all.
    /// Position is the first error node's location (1-based).
    #[error("{}:{line}:{column}: syntax error", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    /// The dispatcher reached a grammar kind outside the declared schema.
    /// Fatal rather than skipped: dropping unrecognized syntax would
    /// produce an incomplete output tree that still looks valid.
    #[error("unsupported syntax node kind {kind:?} at line {line}")]
    UnsupportedNodeKind { kind: String, line: usize },

    /// The output document could not be created or written.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failed.
    #[error("failed to encode syntax tree: {0}")]
    Encode(#[from] serde_json::Error),
}
