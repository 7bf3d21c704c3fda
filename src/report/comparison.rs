use crate::config::GroupConfig;
use crate::data::ExperimentGroupMatrix;
use crate::error::Result;
use crate::stats::{BoxSummary, ColumnAggregator, SignificanceResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One side of a comparison at a fixed generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    pub name: String,
    pub label: String,
    pub runs: usize,
    pub median: f64,
    pub box_summary: BoxSummary,
}

impl GroupSnapshot {
    pub fn at(group: &GroupConfig, matrix: &ExperimentGroupMatrix, generation: usize) -> Result<Self> {
        let box_summary = ColumnAggregator::box_summary_at(matrix, generation)?;
        Ok(Self {
            name: group.name.clone(),
            label: group.label.clone(),
            runs: matrix.runs(),
            median: box_summary.median,
            box_summary,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub generated_at: DateTime<Utc>,
    pub generation: usize,
    pub baseline: GroupSnapshot,
    pub treatment: GroupSnapshot,
    pub result: SignificanceResult,
}

impl ComparisonReport {
    pub fn build(
        baseline: (&GroupConfig, &ExperimentGroupMatrix),
        treatment: (&GroupConfig, &ExperimentGroupMatrix),
        generation: usize,
    ) -> Result<Self> {
        let result = ColumnAggregator::compare_groups_at_column(baseline.1, treatment.1, generation)?;

        Ok(Self {
            generated_at: Utc::now(),
            generation,
            baseline: GroupSnapshot::at(baseline.0, baseline.1, generation)?,
            treatment: GroupSnapshot::at(treatment.0, treatment.1, generation)?,
            result,
        })
    }

    pub fn summary(&self) -> String {
        format!(
            "{} vs {} at generation {}: U = {}, p = {:.4e} [{}]",
            self.baseline.label,
            self.treatment.label,
            self.generation,
            self.result.statistic,
            self.result.p_value,
            self.result.bucket
        )
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)?;

        log::info!("Wrote comparison report to {}", path.as_ref().display());
        Ok(())
    }
}
