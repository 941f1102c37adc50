use thiserror::Error;

#[derive(Error, Debug)]
pub enum XboxError {
    #[error("Zero pivot at row {row} (pivot = {pivot:e}); system needs pivoting or is singular")]
    DivisionByZero { row: usize, pivot: f64 },

    #[error("Dimension mismatch: {operand} has length {actual}, expected {expected}")]
    DimensionMismatch {
        operand: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid spline nodes: {0}")]
    InvalidNodes(String),

    #[error("Sample decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type XboxResult<T> = Result<T, XboxError>;
