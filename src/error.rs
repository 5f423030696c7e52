use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NnError>;

#[derive(Debug, Error)]
pub enum NnError {
    /// A vector handed to the network does not match the shape it was built with.
    #[error("dimension mismatch for {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// The network cannot be built from the supplied layer list or init range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("{what} index {index} out of range (len {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// Input-layer neurons only carry an output value.
    #[error("layer {0} has no weights")]
    UnweightedLayer(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NnError {
    pub(crate) fn dimension(what: &'static str, expected: usize, got: usize) -> NnError {
        NnError::DimensionMismatch { what, expected, got }
    }
}
