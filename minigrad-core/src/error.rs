use crate::node::NodeId;
use thiserror::Error;

/// Custom error type for the minigrad framework.
///
/// Numeric domain problems (negative base with a fractional exponent, division
/// by zero, overflowing `exp`) are *not* errors: they propagate as NaN or
/// infinity exactly as IEEE-754 arithmetic produces them.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum MinigradError {
    #[error("Unknown node {id}: the graph only holds {len} nodes")]
    UnknownNode { id: NodeId, len: usize },

    #[error("Invalid checkpoint: cannot rewind to {checkpoint} nodes, the graph only holds {len}")]
    InvalidCheckpoint { checkpoint: usize, len: usize },

    #[error("Input size mismatch: expected {expected} inputs, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid hyperparameter '{name}': {value}")]
    InvalidHyperparameter { name: String, value: f64 },

    #[error("Cannot compute a loss over an empty batch")]
    EmptyBatch,

    #[error("Index {index} out of bounds for a dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Dataset parse error at line {line}: {message}")]
    DatasetParse { line: u64, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for MinigradError {
    fn from(err: std::io::Error) -> Self {
        MinigradError::Io(err.to_string())
    }
}
