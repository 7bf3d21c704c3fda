use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvostatsError {
    #[error("No run files found: {0}")]
    NotFound(String),

    #[error("Parse error in {} at line {line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Shape mismatch in {}: expected {expected} generations, got {actual}", .path.display())]
    ShapeMismatch {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Percentile {0} outside [0, 100]")]
    InvalidPercentile(f64),

    #[error("Index {index} out of range for {len} generations")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EvostatsError>;
