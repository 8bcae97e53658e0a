//! Engine error types.

use thiserror::Error;

/// Errors reported by the network engine.
///
/// Every fallible operation validates its input before touching any state,
/// so a returned error guarantees nothing was mutated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("expected data of length {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("expected a {expected_rows}x{expected_cols} matrix, got {actual_rows}x{actual_cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("layer has no outgoing weights attached; call add_weights() first")]
    MissingWeights,

    #[error("layer has no biases attached; call add_biases() first")]
    MissingBiases,

    #[error("network is not wired; call connect() before running")]
    NotConnected,
}
