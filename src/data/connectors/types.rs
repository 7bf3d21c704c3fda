use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How the loader treats runs whose generation count differs from the first run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapePolicy {
    /// Fail with `ShapeMismatch` on the first run of a different length.
    #[default]
    Strict,
    /// Keep the shortest common prefix of every run and log what was dropped.
    TruncateToShortest,
}

/// One parsed `bestfit.dat` file: the selected value column, one entry per generation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunFile {
    pub path: PathBuf,
    pub columns: usize,
    pub values: Vec<f64>,
}

impl RunFile {
    pub fn generations(&self) -> usize {
        self.values.len()
    }
}
