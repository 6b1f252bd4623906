//! Tukey HSD and Games-Howell post-hoc procedures
//!
//! One-way multi-group pairwise comparisons through the studentized range
//! distribution: Tukey pools the within-group variance and uses N - k
//! degrees of freedom for every pair; Games-Howell keeps per-group variances
//! and computes Welch-Satterthwaite degrees of freedom per pair. Neither
//! applies a further multiple-testing correction; the studentized range
//! adjustment is the correction.

mod gameshowell;
mod sturng;
mod tukey;

pub use gameshowell::games_howell;
pub use sturng::{ptukey, psturng};
pub use tukey::tukey_hsd;

use pairwise_core::{Error, Result};

/// One group of a one-way design: a level label and its observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub label: String,
    pub values: Vec<f64>,
}

impl Group {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// One pairwise comparison row produced by a post-hoc procedure.
#[derive(Debug, Clone, PartialEq)]
pub struct PosthocComparison {
    pub a: String,
    pub b: String,
    pub mean_a: f64,
    pub mean_b: f64,
    /// mean(A) - mean(B)
    pub diff: f64,
    pub se: f64,
    pub t: f64,
    pub df: f64,
    pub p: f64,
}

pub(crate) fn validate_groups(groups: &[Group]) -> Result<()> {
    if groups.len() < 2 {
        return Err(Error::Config(
            "post-hoc comparisons need at least two groups".to_string(),
        ));
    }
    for g in groups {
        if g.values.len() < 2 {
            return Err(Error::too_few(2, g.values.len()));
        }
    }
    Ok(())
}
