//! Multiple-comparison corrections
//!
//! Adjusts an ordered sequence of p-values for multiple testing. All methods
//! preserve input order and length, clip results to [0, 1], and enforce the
//! monotonicity invariant of their family (cumulative max for step-down
//! methods, cumulative min for step-up FDR methods) before restoring the
//! original order through the inverse permutation.

use pairwise_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Correction method applied across the p-values of one result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Adjustment {
    /// No correction
    #[default]
    None,
    /// One-step Bonferroni
    Bonferroni,
    /// Step-down Holm-Bonferroni
    Holm,
    /// Benjamini-Hochberg FDR (independent or positively correlated tests)
    FdrBh,
    /// Benjamini-Yekutieli FDR (arbitrary dependence)
    FdrBy,
}

impl Adjustment {
    /// Short method tag used in result tables.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bonferroni => "bonf",
            Self::Holm => "holm",
            Self::FdrBh => "fdr_bh",
            Self::FdrBy => "fdr_by",
        }
    }

    /// Adjusted p-values, parallel to `pvals`.
    pub fn adjust(&self, pvals: &[f64]) -> Vec<f64> {
        let m = pvals.len();
        if m == 0 {
            return Vec::new();
        }
        match self {
            Self::None => pvals.to_vec(),
            Self::Bonferroni => pvals.iter().map(|&p| (p * m as f64).min(1.0)).collect(),
            Self::Holm => {
                let order = ascending_order(pvals);
                let mut sorted_adj = vec![0.0; m];
                let mut running = 0.0f64;
                for (rank, &idx) in order.iter().enumerate() {
                    let stepped = (m - rank) as f64 * pvals[idx];
                    running = running.max(stepped);
                    sorted_adj[rank] = running.min(1.0);
                }
                invert(&order, &sorted_adj)
            }
            Self::FdrBh | Self::FdrBy => {
                // fdr_by scales by the harmonic series of m
                let c_m = if matches!(self, Self::FdrBy) {
                    (1..=m).map(|i| 1.0 / i as f64).sum::<f64>()
                } else {
                    1.0
                };
                let order = ascending_order(pvals);
                let mut sorted_adj = vec![0.0; m];
                let mut running = 1.0f64;
                for rank in (0..m).rev() {
                    let idx = order[rank];
                    let stepped = pvals[idx] * c_m * m as f64 / (rank + 1) as f64;
                    running = running.min(stepped);
                    sorted_adj[rank] = running.min(1.0);
                }
                invert(&order, &sorted_adj)
            }
        }
    }

    /// Adjusted p-values plus the significance mask at `alpha`.
    pub fn significant(&self, pvals: &[f64], alpha: f64) -> (Vec<f64>, Vec<bool>) {
        let adjusted = self.adjust(pvals);
        let mask = adjusted.iter().map(|&p| p < alpha).collect();
        (adjusted, mask)
    }
}

/// Indices sorting `pvals` ascending; ties keep original order (stable sort).
fn ascending_order(pvals: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..pvals.len()).collect();
    order.sort_by(|&i, &j| {
        pvals[i]
            .partial_cmp(&pvals[j])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}

/// Scatter rank-ordered values back to original positions.
fn invert(order: &[usize], sorted_vals: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; sorted_vals.len()];
    for (rank, &idx) in order.iter().enumerate() {
        out[idx] = sorted_vals[rank];
    }
    out
}

impl FromStr for Adjustment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Self::None),
            "bonf" => Ok(Self::Bonferroni),
            "holm" => Ok(Self::Holm),
            "fdr_bh" => Ok(Self::FdrBh),
            "fdr_by" => Ok(Self::FdrBy),
            other => Err(Error::unknown_variant(
                "padjust",
                other,
                "none, bonf, holm, fdr_bh, fdr_by",
            )),
        }
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
