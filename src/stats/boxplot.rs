use super::quantile::{percentile_of_sorted, sorted_copy};
use crate::error::{EvostatsError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WHISKER: f64 = 1.5;

/// Numbers behind one box of a box plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    /// Values beyond the whiskers, ascending.
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    /// Whiskers reach the most extreme values within `whisker * IQR` of the box.
    pub fn from_sample(values: &[f64], whisker: f64) -> Result<Self> {
        if values.is_empty() {
            return Err(EvostatsError::InsufficientData(
                "box summary of an empty sample".to_string(),
            ));
        }

        let sorted = sorted_copy(values);
        let q1 = percentile_of_sorted(&sorted, 25.0)?;
        let median = percentile_of_sorted(&sorted, 50.0)?;
        let q3 = percentile_of_sorted(&sorted, 75.0)?;

        let iqr = q3 - q1;
        let low_fence = q1 - whisker * iqr;
        let high_fence = q3 + whisker * iqr;

        // q1 and q3 lie inside the sample range, so both searches hit.
        let whisker_low = sorted.iter().copied().find(|&v| v >= low_fence).unwrap_or(q1);
        let whisker_high = sorted.iter().rev().copied().find(|&v| v <= high_fence).unwrap_or(q3);

        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < whisker_low || v > whisker_high)
            .collect();

        Ok(Self {
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}
