//! Error types for graph construction.

use thiserror::Error;

/// Errors that can occur when building a grid graph or vertex matrix.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The flattened weight sequence does not cover the declared grid.
    #[error("weight matrix has {actual} entries, expected {expected} ({width}x{height})")]
    DimensionMismatch {
        width: i32,
        height: i32,
        expected: usize,
        actual: usize,
    },
}
