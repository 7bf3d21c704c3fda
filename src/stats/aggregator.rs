use super::boxplot::{BoxSummary, DEFAULT_WHISKER};
use super::mann_whitney::MannWhitney;
use super::quantile::{percentile_of_sorted, sorted_copy};
use super::significance::SignificanceResult;
use crate::data::ExperimentGroupMatrix;
use crate::error::{EvostatsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reduction applied across the run axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Statistic {
    Median,
    Percentile(f64),
}

impl Statistic {
    pub fn pct(&self) -> f64 {
        match self {
            Self::Median => 50.0,
            Self::Percentile(p) => *p,
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Median => f.write_str("median"),
            Self::Percentile(p) => write!(f, "p{}", p),
        }
    }
}

/// One value per generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySequence {
    pub statistic: Statistic,
    pub values: Vec<f64>,
}

impl SummarySequence {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, generation: usize) -> Option<f64> {
        self.values.get(generation).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    pub median: SummarySequence,
    pub p25: SummarySequence,
    pub p75: SummarySequence,
}

impl ColumnStatistics {
    pub fn generations(&self) -> usize {
        self.median.len()
    }
}

pub struct ColumnAggregator;

impl ColumnAggregator {
    /// Median, 25th and 75th percentile of every generation.
    pub fn column_statistics(matrix: &ExperimentGroupMatrix) -> Result<ColumnStatistics> {
        Self::require_runs(matrix)?;

        let g = matrix.generations();
        let mut median = Vec::with_capacity(g);
        let mut p25 = Vec::with_capacity(g);
        let mut p75 = Vec::with_capacity(g);

        for column in matrix.data().columns() {
            let sorted = sorted_copy(&column.to_vec());
            p25.push(percentile_of_sorted(&sorted, 25.0)?);
            median.push(percentile_of_sorted(&sorted, 50.0)?);
            p75.push(percentile_of_sorted(&sorted, 75.0)?);
        }

        Ok(ColumnStatistics {
            median: SummarySequence {
                statistic: Statistic::Median,
                values: median,
            },
            p25: SummarySequence {
                statistic: Statistic::Percentile(25.0),
                values: p25,
            },
            p75: SummarySequence {
                statistic: Statistic::Percentile(75.0),
                values: p75,
            },
        })
    }

    pub fn reduce(matrix: &ExperimentGroupMatrix, statistic: Statistic) -> Result<SummarySequence> {
        Self::require_runs(matrix)?;

        let values = matrix
            .data()
            .columns()
            .into_iter()
            .map(|column| percentile_of_sorted(&sorted_copy(&column.to_vec()), statistic.pct()))
            .collect::<Result<Vec<f64>>>()?;

        Ok(SummarySequence { statistic, values })
    }

    pub fn medians(matrix: &ExperimentGroupMatrix) -> Result<SummarySequence> {
        Self::reduce(matrix, Statistic::Median)
    }

    /// Rank-sum comparison of two groups at one generation. The reported
    /// p-value is two-tailed: twice the one-tailed test probability.
    pub fn compare_groups_at_column(
        a: &ExperimentGroupMatrix,
        b: &ExperimentGroupMatrix,
        column: usize,
    ) -> Result<SignificanceResult> {
        let sample_a = a.column_values(column)?;
        let sample_b = b.column_values(column)?;

        let test = MannWhitney::test(&sample_a, &sample_b)?;
        let result = SignificanceResult::new(
            column,
            sample_a.len(),
            sample_b.len(),
            test.statistic,
            test.one_tailed_p,
        );

        log::debug!(
            "Generation {}: U = {}, p = {:.3e} ({})",
            column,
            result.statistic,
            result.p_value,
            result.bucket
        );

        Ok(result)
    }

    pub fn box_summary_at(matrix: &ExperimentGroupMatrix, column: usize) -> Result<BoxSummary> {
        BoxSummary::from_sample(&matrix.column_values(column)?, DEFAULT_WHISKER)
    }

    fn require_runs(matrix: &ExperimentGroupMatrix) -> Result<()> {
        if matrix.runs() == 0 {
            return Err(EvostatsError::InsufficientData(
                "statistics need at least one run".to_string(),
            ));
        }
        Ok(())
    }
}
