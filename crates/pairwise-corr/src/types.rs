//! Correlation method selection and result type

use pairwise_core::Error;
use std::fmt;
use std::str::FromStr;

/// Correlation estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrMethod {
    /// Product-moment correlation
    #[default]
    Pearson,
    /// Rank correlation
    Spearman,
    /// Kendall tau-b
    Kendall,
    /// Shepherd's pi: Spearman after bootstrapped-Mahalanobis outlier removal
    Shepherd,
    /// Skipped correlation: Spearman after projection-based outlier removal
    Skipped,
    /// Percentage-bend correlation (beta = 0.2)
    PercBend,
}

impl CorrMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pearson => "pearson",
            Self::Spearman => "spearman",
            Self::Kendall => "kendall",
            Self::Shepherd => "shepherd",
            Self::Skipped => "skipped",
            Self::PercBend => "percbend",
        }
    }

    /// Robust methods report an outlier count per pair.
    pub fn is_robust(&self) -> bool {
        matches!(self, Self::Shepherd | Self::Skipped | Self::PercBend)
    }
}

impl FromStr for CorrMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pearson" => Ok(Self::Pearson),
            "spearman" => Ok(Self::Spearman),
            "kendall" => Ok(Self::Kendall),
            "shepherd" => Ok(Self::Shepherd),
            "skipped" => Ok(Self::Skipped),
            "percbend" => Ok(Self::PercBend),
            other => Err(Error::unknown_variant(
                "method",
                other,
                "pearson, spearman, kendall, shepherd, skipped, percbend",
            )),
        }
    }
}

impl fmt::Display for CorrMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One computed correlation.
///
/// `statistic` is the t statistic of the estimate for all methods except
/// Kendall, where the normal-approximation z score is reported; `df` is
/// n - 2 (adjusted by the engine for partial correlations). `p_two` is the
/// two-sided p-value; the engine applies the tail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation {
    pub r: f64,
    pub ci95: (f64, f64),
    /// Pair count used by the estimator (after missing-value removal)
    pub n: usize,
    /// Outliers discarded by a robust method
    pub outliers: Option<usize>,
    pub statistic: f64,
    pub df: f64,
    pub p_two: f64,
    pub r2: f64,
    pub adj_r2: f64,
}
