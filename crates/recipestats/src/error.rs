//! Error types for recipestats

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

/// Result type alias for recipestats operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading a dataset or answering a query
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened or mapped
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file is not a JSON array of delivery records
    #[error("invalid input document: {0}")]
    Decode(#[from] serde_json::Error),

    /// The input file has no content at all
    #[error("input file is empty: {}", .0.display())]
    EmptyInput(PathBuf),

    /// A standalone time string (query bound) did not parse
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A delivery window inside the input did not parse
    #[error("record {index}: {source}")]
    Record {
        /// Zero-based position of the record in the input array
        index: usize,
        /// Underlying parse failure
        source: ParseError,
    },

    /// A load task panicked before its keeper was complete
    #[error("load task '{0}' panicked")]
    LoadTask(&'static str),
}
