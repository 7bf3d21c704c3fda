use serde::{Deserialize, Serialize};
use std::fmt;

/// Asterisk rating used to annotate comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignificanceBucket {
    /// p < 0.0001
    #[serde(rename = "****")]
    FourStars,
    /// p < 0.001
    #[serde(rename = "***")]
    ThreeStars,
    /// p < 0.01
    #[serde(rename = "**")]
    TwoStars,
    /// p < 0.05
    #[serde(rename = "*")]
    OneStar,
    #[serde(rename = "-")]
    NotSignificant,
}

impl SignificanceBucket {
    pub fn from_p_value(p: f64) -> Self {
        if p < 0.0001 {
            Self::FourStars
        } else if p < 0.001 {
            Self::ThreeStars
        } else if p < 0.01 {
            Self::TwoStars
        } else if p < 0.05 {
            Self::OneStar
        } else {
            Self::NotSignificant
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FourStars => "****",
            Self::ThreeStars => "***",
            Self::TwoStars => "**",
            Self::OneStar => "*",
            Self::NotSignificant => "-",
        }
    }

    pub fn is_significant(&self) -> bool {
        !matches!(self, Self::NotSignificant)
    }
}

impl fmt::Display for SignificanceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of comparing two groups at one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignificanceResult {
    pub column: usize,
    pub n_a: usize,
    pub n_b: usize,
    /// Mann-Whitney U, the smaller of U1 and U2.
    pub statistic: f64,
    pub one_tailed_p: f64,
    /// Always `2 * one_tailed_p`; the bucket is derived from this value.
    pub p_value: f64,
    pub bucket: SignificanceBucket,
}

impl SignificanceResult {
    pub fn new(column: usize, n_a: usize, n_b: usize, statistic: f64, one_tailed_p: f64) -> Self {
        let p_value = one_tailed_p * 2.0;
        Self {
            column,
            n_a,
            n_b,
            statistic,
            one_tailed_p,
            p_value,
            bucket: SignificanceBucket::from_p_value(p_value),
        }
    }

    pub fn stars(&self) -> &'static str {
        self.bucket.label()
    }
}
