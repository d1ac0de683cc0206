//! Error types for graph loading and benchmarking.

use thiserror::Error;

/// All errors that can occur while building a graph or running a benchmark.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The edge file could not be opened or read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A non-blank line did not hold exactly two non-empty, comma-separated labels.
    #[error("Malformed edge on line {line_number}: {content:?}")]
    MalformedInput { line_number: usize, content: String },
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
