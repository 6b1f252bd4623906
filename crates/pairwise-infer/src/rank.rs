//! Rank-based two-sample tests
//!
//! Mann-Whitney U (independent samples) and Wilcoxon signed-rank (paired
//! samples), both via tie-corrected normal approximations. Mann-Whitney
//! applies a 0.5 continuity correction; Wilcoxon drops zero differences
//! before ranking.

use pairwise_core::{rankdata, tie_term, Error, Result, Tail};
use statrs::distribution::{ContinuousCDF, Normal};

/// A computed rank-test statistic with its normal-approximation z score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankTest {
    /// U (Mann-Whitney) or W (Wilcoxon) statistic
    pub statistic: f64,
    /// Normal-approximation z score
    pub z: f64,
}

impl RankTest {
    /// Tail-aware p-value for this statistic.
    pub fn p_value(&self, tail: Tail) -> f64 {
        let normal = Normal::new(0.0, 1.0).expect("unit normal");
        let p_two = (2.0 * (1.0 - normal.cdf(self.z.abs()))).min(1.0);
        tail.from_two_sided(p_two)
    }
}

/// Mann-Whitney U test. The reported U counts wins of `x` over `y`
/// (U = R1 - n1(n1+1)/2).
pub fn mann_whitney(x: &[f64], y: &[f64]) -> Result<RankTest> {
    if x.is_empty() || y.is_empty() {
        return Err(Error::too_few(1, 0));
    }
    let (n1, n2) = (x.len() as f64, y.len() as f64);
    let mut combined = Vec::with_capacity(x.len() + y.len());
    combined.extend_from_slice(x);
    combined.extend_from_slice(y);

    let ranks = rankdata(&combined);
    let r1: f64 = ranks[..x.len()].iter().sum();
    let u = r1 - n1 * (n1 + 1.0) / 2.0;

    let n = n1 + n2;
    let mu = n1 * n2 / 2.0;
    let tie = tie_term(&combined);
    let var = n1 * n2 / 12.0 * ((n + 1.0) - tie / (n * (n - 1.0)));
    if var <= 0.0 {
        return Err(Error::Computation(
            "all observations are tied".to_string(),
        ));
    }
    // continuity correction toward the mean
    let z = ((u - mu).abs() - 0.5).max(0.0) / var.sqrt() * (u - mu).signum();
    Ok(RankTest { statistic: u, z })
}

/// Wilcoxon signed-rank test on aligned samples. Zero differences are
/// dropped; the reported W is the smaller of the positive- and
/// negative-rank sums.
pub fn wilcoxon_signed_rank(x: &[f64], y: &[f64]) -> Result<RankTest> {
    if x.len() != y.len() {
        return Err(Error::Computation(format!(
            "paired samples differ in length: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    let diffs: Vec<f64> = x
        .iter()
        .zip(y.iter())
        .map(|(&a, &b)| a - b)
        .filter(|d| *d != 0.0)
        .collect();
    if diffs.len() < 2 {
        return Err(Error::too_few(2, diffs.len()));
    }

    let abs_diffs: Vec<f64> = diffs.iter().map(|d| d.abs()).collect();
    let ranks = rankdata(&abs_diffs);
    let w_plus: f64 = diffs
        .iter()
        .zip(ranks.iter())
        .filter(|(d, _)| **d > 0.0)
        .map(|(_, r)| *r)
        .sum();
    let n = diffs.len() as f64;
    let w_minus = n * (n + 1.0) / 2.0 - w_plus;
    let w = w_plus.min(w_minus);

    let mu = n * (n + 1.0) / 4.0;
    let var = n * (n + 1.0) * (2.0 * n + 1.0) / 24.0 - tie_term(&abs_diffs) / 48.0;
    if var <= 0.0 {
        return Err(Error::Computation(
            "all paired differences are tied".to_string(),
        ));
    }
    let z = (w_plus - mu) / var.sqrt();
    Ok(RankTest { statistic: w, z })
}
