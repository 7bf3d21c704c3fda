use crate::error::{EvostatsError, Result};
use statrs::distribution::{ContinuousCDF, Normal};

/// Mann-Whitney U test with normal approximation, tie correction and
/// continuity correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MannWhitney {
    /// min(U1, U2)
    pub statistic: f64,
    /// Upper normal tail at |z|; at most 0.5.
    pub one_tailed_p: f64,
    pub z: f64,
}

impl MannWhitney {
    pub fn test(a: &[f64], b: &[f64]) -> Result<Self> {
        if a.is_empty() || b.is_empty() {
            return Err(EvostatsError::InsufficientData(format!(
                "rank-sum test needs two non-empty samples (got {} and {})",
                a.len(),
                b.len()
            )));
        }
        if a.len() < 3 || b.len() < 3 {
            log::warn!(
                "Rank-sum test on {} vs {} values; the normal approximation is unreliable",
                a.len(),
                b.len()
            );
        }

        let n1 = a.len() as f64;
        let n2 = b.len() as f64;
        let n = n1 + n2;

        let pooled: Vec<f64> = a.iter().chain(b.iter()).copied().collect();
        let (ranks, tie_term) = Self::rank(&pooled);

        let rank_sum_a: f64 = ranks[..a.len()].iter().sum();
        let u1 = rank_sum_a - n1 * (n1 + 1.0) / 2.0;
        let u2 = n1 * n2 - u1;
        let big_u = u1.max(u2);
        let small_u = u1.min(u2);

        let tie_correction = 1.0 - tie_term / (n * n * n - n);
        if tie_correction <= 0.0 {
            // Every value identical: no evidence either way.
            return Ok(Self {
                statistic: small_u,
                one_tailed_p: 0.5,
                z: 0.0,
            });
        }

        let sd = (tie_correction * n1 * n2 * (n + 1.0) / 12.0).sqrt();
        let mean = n1 * n2 / 2.0 + 0.5;
        let z = ((big_u - mean) / sd).abs();

        Ok(Self {
            statistic: small_u,
            one_tailed_p: normal_sf(z).min(0.5),
            z,
        })
    }

    /// Average ranks (1-based) of `values`, plus the tie term sum(t^3 - t).
    fn rank(values: &[f64]) -> (Vec<f64>, f64) {
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));

        let mut ranks = vec![0.0; values.len()];
        let mut tie_term = 0.0;
        let mut start = 0;

        while start < order.len() {
            let mut end = start + 1;
            while end < order.len() && values[order[end]] == values[order[start]] {
                end += 1;
            }

            let avg_rank = (start + end + 1) as f64 / 2.0;
            for &idx in &order[start..end] {
                ranks[idx] = avg_rank;
            }

            let t = (end - start) as f64;
            tie_term += t * t * t - t;
            start = end;
        }

        (ranks, tie_term)
    }
}

/// Upper tail of the standard normal distribution.
pub fn normal_sf(x: f64) -> f64 {
    Normal::standard().sf(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_normal_sf_reference_values() {
        assert!(close(normal_sf(0.0), 0.5, 1e-7));
        assert!(close(normal_sf(1.959_963_985), 0.025, 1e-6));
        assert!(close(normal_sf(-1.0), 0.841_344_746, 1e-6));
        // relative precision deep in the tail
        let tail = normal_sf(5.0);
        assert!(close(tail / 2.866_515_7e-7, 1.0, 1e-5));
    }

    #[test]
    fn test_ranks_with_ties() {
        let (ranks, tie_term) = MannWhitney::rank(&[10.0, 20.0, 10.0, 30.0]);
        assert_eq!(ranks, vec![1.5, 3.0, 1.5, 4.0]);
        assert_eq!(tie_term, 6.0);
    }

    #[test]
    fn test_separated_samples_with_ties() {
        let result = MannWhitney::test(&[1.0, 1.0, 1.0], &[4.0, 4.0, 4.0]).unwrap();
        assert_eq!(result.statistic, 0.0);
        // T = 1 - 48/210, sd = sqrt(T * 63 / 12), z = 4 / sd
        let sd = ((1.0 - 48.0 / 210.0) * 63.0 / 12.0_f64).sqrt();
        assert!(close(result.z, 4.0 / sd, 1e-12));
        assert!(close(result.one_tailed_p, 0.0234, 5e-4));
    }

    #[test]
    fn test_no_ties() {
        // U1 = 3 for a = [1,3,5], b = [2,4,6]
        let result = MannWhitney::test(&[1.0, 3.0, 5.0], &[2.0, 4.0, 6.0]).unwrap();
        assert_eq!(result.statistic, 3.0);
        // |6 - 4.5 - 0.5| / sqrt(9 * 7 / 12)
        assert!(close(result.z, 1.0 / (63.0_f64 / 12.0).sqrt(), 1e-12));
    }

    #[test]
    fn test_identical_values() {
        let result = MannWhitney::test(&[2.0, 2.0], &[2.0, 2.0, 2.0]).unwrap();
        assert_eq!(result.one_tailed_p, 0.5);
        assert_eq!(result.statistic, 3.0);
    }

    #[test]
    fn test_empty_sample() {
        assert!(matches!(
            MannWhitney::test(&[], &[1.0]),
            Err(EvostatsError::InsufficientData(_))
        ));
    }
}
