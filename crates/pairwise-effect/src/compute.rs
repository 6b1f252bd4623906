//! Effect size computation
//!
//! Cohen's d uses the pooled standard deviation:
//! d = (m1 - m2) / sqrt(((n1-1)s1^2 + (n2-1)s2^2) / (n1 + n2 - 2)).
//! Hedges' g multiplies d by the small-sample correction
//! 1 - 3 / (4(n1+n2) - 9). The remaining parametric measures are
//! conversions of d; CLES is the empirical probability that a random
//! observation from the first sample exceeds one from the second, ties
//! counting half.

use crate::EffSize;
use pairwise_core::{mean, sample_var, Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};

/// Cohen's d from two samples (pooled standard deviation).
pub fn cohen_d(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() < 2 || y.len() < 2 {
        return Err(Error::too_few(2, x.len().min(y.len())));
    }
    let (nx, ny) = (x.len() as f64, y.len() as f64);
    let pooled_var =
        ((nx - 1.0) * sample_var(x) + (ny - 1.0) * sample_var(y)) / (nx + ny - 2.0);
    if pooled_var <= 0.0 {
        return Err(Error::Computation(
            "pooled variance is non-positive".to_string(),
        ));
    }
    Ok((mean(x) - mean(y)) / pooled_var.sqrt())
}

/// Empirical common-language effect size: P(x > y) with ties counted half.
pub fn cles(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.is_empty() || y.is_empty() {
        return Err(Error::too_few(1, 0));
    }
    let mut favorable = 0.0;
    for &a in x {
        for &b in y {
            if a > b {
                favorable += 1.0;
            } else if a == b {
                favorable += 0.5;
            }
        }
    }
    Ok(favorable / (x.len() * y.len()) as f64)
}

/// Convert Cohen's d into another parametric effect size.
pub fn convert_d(d: f64, nx: usize, ny: usize, target: EffSize) -> f64 {
    match target {
        EffSize::Cohen => d,
        EffSize::Hedges => d * (1.0 - 3.0 / (4.0 * (nx + ny) as f64 - 9.0)),
        EffSize::EtaSquare => {
            let half = d / 2.0;
            half * half / (1.0 + half * half)
        }
        EffSize::OddsRatio => (d * std::f64::consts::PI / 3.0f64.sqrt()).exp(),
        EffSize::Auc => {
            let normal = Normal::new(0.0, 1.0).expect("unit normal");
            normal.cdf(d / std::f64::consts::SQRT_2)
        }
        // CLES is computed from the data, not converted
        EffSize::Cles | EffSize::None => f64::NAN,
    }
}

/// Effect size of `kind` for the sample pair, after per-pair filtering.
pub fn compute_effsize(x: &[f64], y: &[f64], kind: EffSize) -> Result<f64> {
    match kind {
        EffSize::None => Ok(f64::NAN),
        EffSize::Cles => cles(x, y),
        _ => Ok(convert_d(cohen_d(x, y)?, x.len(), y.len(), kind)),
    }
}
