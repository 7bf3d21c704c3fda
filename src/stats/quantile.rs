use crate::error::{EvostatsError, Result};

/// Percentile of an already sorted sample, by linear interpolation between
/// closest ranks (rank = pct / 100 * (n - 1)).
pub fn percentile_of_sorted(sorted: &[f64], pct: f64) -> Result<f64> {
    if sorted.is_empty() {
        return Err(EvostatsError::InsufficientData(
            "percentile of an empty sample".to_string(),
        ));
    }
    if !(0.0..=100.0).contains(&pct) {
        return Err(EvostatsError::InvalidPercentile(pct));
    }

    let last = sorted.len() - 1;
    if last == 0 {
        return Ok(sorted[0]);
    }

    let rank = pct / 100.0 * last as f64;
    let lower = rank.floor() as usize;
    if lower >= last {
        return Ok(sorted[last]);
    }

    let frac = rank - lower as f64;
    let lo = sorted[lower];
    let hi = sorted[lower + 1];
    Ok(lo + (hi - lo) * frac)
}

pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

pub fn percentile(values: &[f64], pct: f64) -> Result<f64> {
    percentile_of_sorted(&sorted_copy(values), pct)
}

pub fn median(values: &[f64]) -> Result<f64> {
    percentile(values, 50.0)
}

/// (25th, 50th, 75th) percentiles with a single sort.
pub fn quartiles(values: &[f64]) -> Result<(f64, f64, f64)> {
    let sorted = sorted_copy(values);
    Ok((
        percentile_of_sorted(&sorted, 25.0)?,
        percentile_of_sorted(&sorted, 50.0)?,
        percentile_of_sorted(&sorted, 75.0)?,
    ))
}
