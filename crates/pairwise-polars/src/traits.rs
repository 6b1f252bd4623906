//! The public call surface: an extension trait on Polars DataFrames

use crate::{corr, posthoc, ttests, CorrSpec, Result, TTestSpec};
use polars::prelude::DataFrame;

/// Pairwise statistical comparisons on a DataFrame.
///
/// Every method is a pure function of the DataFrame and its spec, except
/// for the optional CSV-export side effect of the specs; repeated calls on
/// identical inputs produce identical tables.
pub trait PairwiseStatsExt {
    /// All-pairs t-tests (or rank-based alternatives) for within, between
    /// and mixed factorial designs.
    ///
    /// # Returns
    /// One row per factor-level pair: contrast identifiers, optional
    /// descriptives, statistic, degrees of freedom, raw and corrected
    /// p-values, Bayes factor (parametric rows) and effect size.
    fn pairwise_ttests(&self, spec: &TTestSpec) -> Result<DataFrame>;

    /// All-pairs correlation coefficients over a column selection.
    ///
    /// # Returns
    /// One row per resolved variable pair: pair identifiers, sample size,
    /// coefficient with its 95% interval, statistic, raw and corrected
    /// p-values, and a Bayes factor for Pearson rows with n <= 1000.
    fn pairwise_corr(&self, spec: &CorrSpec) -> Result<DataFrame>;

    /// Tukey HSD over a one-way design (pooled variance, N - k degrees of
    /// freedom).
    fn pairwise_tukey(&self, dv: &str, between: &str) -> Result<DataFrame>;

    /// Games-Howell over a one-way design (per-pair variances,
    /// Welch-Satterthwaite degrees of freedom).
    fn pairwise_gameshowell(&self, dv: &str, between: &str) -> Result<DataFrame>;
}

impl PairwiseStatsExt for DataFrame {
    fn pairwise_ttests(&self, spec: &TTestSpec) -> Result<DataFrame> {
        ttests::run(self, spec)
    }

    fn pairwise_corr(&self, spec: &CorrSpec) -> Result<DataFrame> {
        corr::run(self, spec)
    }

    fn pairwise_tukey(&self, dv: &str, between: &str) -> Result<DataFrame> {
        posthoc::run_tukey(self, dv, between)
    }

    fn pairwise_gameshowell(&self, dv: &str, between: &str) -> Result<DataFrame> {
        posthoc::run_games_howell(self, dv, between)
    }
}
