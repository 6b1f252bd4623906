//! Descriptive statistics shared by the pairwise engines
//!
//! All variances are sample variances (ddof = 1). Inputs are expected to be
//! already filtered for missing values; callers apply the per-pair masking
//! documented by the engines before reaching these functions.

use crate::{Error, Result};

/// Arithmetic mean
pub fn mean(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return f64::NAN;
    }
    sample.iter().sum::<f64>() / sample.len() as f64
}

/// Sample variance (ddof = 1)
pub fn sample_var(sample: &[f64]) -> f64 {
    if sample.len() < 2 {
        return f64::NAN;
    }
    let m = mean(sample);
    sample.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / (sample.len() - 1) as f64
}

/// Sample standard deviation (ddof = 1)
pub fn sample_std(sample: &[f64]) -> f64 {
    sample_var(sample).sqrt()
}

/// Median (copies and sorts)
pub fn median(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return f64::NAN;
    }
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Per-group summary attached to result rows when descriptives are requested
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Descriptives {
    pub n: usize,
    pub mean: f64,
    pub std: f64,
}

impl Descriptives {
    /// Summarize a sample; requires at least two observations so the
    /// standard deviation is defined.
    pub fn from_sample(sample: &[f64]) -> Result<Self> {
        if sample.len() < 2 {
            return Err(Error::too_few(2, sample.len()));
        }
        Ok(Self {
            n: sample.len(),
            mean: mean(sample),
            std: sample_std(sample),
        })
    }
}
