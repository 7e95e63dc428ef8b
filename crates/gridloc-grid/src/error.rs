//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
///
/// These are contract violations: they indicate malformed input from the
/// caller and are never retried or masked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A row passed to [`Grid::from_rows`](crate::Grid::from_rows) is not a
    /// coordinate pair.
    MalformedPoint {
        /// Position of the offending row in the input sequence.
        index: usize,
        /// Number of values the row actually had.
        len: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPoint { index, len } => {
                write!(
                    f,
                    "row {index} is not a coordinate pair: expected 2 values, got {len}"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
