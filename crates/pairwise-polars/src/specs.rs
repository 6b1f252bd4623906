//! Builder-style configuration for the pairwise engines
//!
//! Specs collect the caller's choices; every invariant is checked up front
//! by `validate`, before any statistic is computed.

use crate::column::ColumnKey;
use crate::select::ColumnSelection;
use crate::{Error, Result};
use pairwise_adjust::Adjustment;
use pairwise_core::Tail;
use pairwise_corr::CorrMethod;
use pairwise_effect::EffSize;
use std::path::PathBuf;

/// Configuration for [`PairwiseStatsExt::pairwise_ttests`].
///
/// [`PairwiseStatsExt::pairwise_ttests`]: crate::PairwiseStatsExt::pairwise_ttests
#[derive(Debug, Clone)]
pub struct TTestSpec {
    pub(crate) dv: String,
    pub(crate) within: Vec<String>,
    pub(crate) between: Vec<String>,
    pub(crate) subject: Option<String>,
    pub(crate) parametric: bool,
    pub(crate) unequal_var: bool,
    pub(crate) alpha: f64,
    pub(crate) tail: Tail,
    pub(crate) padjust: Adjustment,
    pub(crate) effsize: EffSize,
    pub(crate) return_desc: bool,
    pub(crate) export: Option<PathBuf>,
}

impl TTestSpec {
    /// Spec for a dependent variable; add at least one factor before running.
    pub fn new(dv: impl Into<String>) -> Self {
        Self {
            dv: dv.into(),
            within: Vec::new(),
            between: Vec::new(),
            subject: None,
            parametric: true,
            unequal_var: false,
            alpha: 0.05,
            tail: Tail::TwoSided,
            padjust: Adjustment::None,
            effsize: EffSize::Cohen,
            return_desc: false,
            export: None,
        }
    }

    /// Add a repeated-measures factor (requires a subject column).
    pub fn within(mut self, factor: impl Into<String>) -> Self {
        self.within.push(factor.into());
        self
    }

    /// Add an independent-groups factor.
    pub fn between(mut self, factor: impl Into<String>) -> Self {
        self.between.push(factor.into());
        self
    }

    /// Subject identifier column linking repeated rows.
    pub fn subject(mut self, column: impl Into<String>) -> Self {
        self.subject = Some(column.into());
        self
    }

    /// Parametric t-tests (default) or rank-based alternatives.
    pub fn parametric(mut self, parametric: bool) -> Self {
        self.parametric = parametric;
        self
    }

    /// Welch's t with Welch-Satterthwaite degrees of freedom for independent
    /// comparisons instead of the pooled-variance Student's t.
    pub fn unequal_var(mut self, unequal_var: bool) -> Self {
        self.unequal_var = unequal_var;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn tail(mut self, tail: Tail) -> Self {
        self.tail = tail;
        self
    }

    pub fn padjust(mut self, method: Adjustment) -> Self {
        self.padjust = method;
        self
    }

    pub fn effsize(mut self, effsize: EffSize) -> Self {
        self.effsize = effsize;
        self
    }

    /// Attach per-group mean and standard deviation to each row.
    pub fn return_desc(mut self, return_desc: bool) -> Self {
        self.return_desc = return_desc;
        self
    }

    /// Also write the result table to a CSV file. A write failure is logged
    /// and does not abort the computed result.
    pub fn export(mut self, path: impl Into<PathBuf>) -> Self {
        self.export = Some(path.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(Error::config(format!(
                "alpha must be a number in (0, 1), got {}",
                self.alpha
            )));
        }
        if self.within.len() > 2 || self.between.len() > 2 {
            return Err(Error::config(
                "at most two factors per within/between side",
            ));
        }
        if self.within.len() == 2 && self.between.len() == 2 {
            return Err(Error::config(
                "two within and two between factors cannot be combined",
            ));
        }
        if self.within.is_empty() && self.between.is_empty() {
            return Err(Error::config(
                "at least one within or between factor is required",
            ));
        }
        if !self.within.is_empty() && self.subject.is_none() {
            return Err(Error::config(
                "a within factor requires a subject column",
            ));
        }
        Ok(())
    }
}

/// Configuration for [`PairwiseStatsExt::pairwise_corr`].
///
/// [`PairwiseStatsExt::pairwise_corr`]: crate::PairwiseStatsExt::pairwise_corr
#[derive(Debug, Clone, Default)]
pub struct CorrSpec {
    pub(crate) columns: ColumnSelection,
    pub(crate) covar: Vec<ColumnKey>,
    pub(crate) tail: Tail,
    pub(crate) method: CorrMethod,
    pub(crate) padjust: Adjustment,
    pub(crate) export: Option<PathBuf>,
}

impl CorrSpec {
    /// Pearson over all numeric columns, no correction.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(mut self, selection: ColumnSelection) -> Self {
        self.columns = selection;
        self
    }

    /// Covariates to partial out of every pair (pearson/spearman only).
    pub fn covar<K: Into<ColumnKey>>(mut self, keys: impl IntoIterator<Item = K>) -> Self {
        self.covar = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn tail(mut self, tail: Tail) -> Self {
        self.tail = tail;
        self
    }

    pub fn method(mut self, method: CorrMethod) -> Self {
        self.method = method;
        self
    }

    pub fn padjust(mut self, method: Adjustment) -> Self {
        self.padjust = method;
        self
    }

    /// Also write the result table to a CSV file. A write failure is logged
    /// and does not abort the computed result.
    pub fn export(mut self, path: impl Into<PathBuf>) -> Self {
        self.export = Some(path.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.covar.is_empty()
            && !matches!(self.method, CorrMethod::Pearson | CorrMethod::Spearman)
        {
            return Err(Error::config(format!(
                "partial correlation supports pearson and spearman, not {}",
                self.method
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttest_spec_defaults() {
        let spec = TTestSpec::new("Scores").between("Group");
        assert!(spec.parametric);
        assert_eq!(spec.alpha, 0.05);
        assert_eq!(spec.tail, Tail::TwoSided);
        assert_eq!(spec.padjust, Adjustment::None);
        assert_eq!(spec.effsize, EffSize::Cohen);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_ttest_spec_rejects_bad_alpha() {
        for alpha in [f64::NAN, 0.0, 1.0, -0.3, 2.0] {
            let spec = TTestSpec::new("Scores").between("Group").alpha(alpha);
            assert!(spec.validate().is_err(), "alpha = {alpha}");
        }
    }

    #[test]
    fn test_ttest_spec_rejects_double_two_factor() {
        let spec = TTestSpec::new("Scores")
            .within("Time")
            .within("Condition")
            .between("Group")
            .between("Site")
            .subject("Subject");
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_ttest_spec_requires_subject_for_within() {
        let spec = TTestSpec::new("Scores").within("Time");
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_ttest_spec_requires_a_factor() {
        assert!(TTestSpec::new("Scores").validate().is_err());
    }

    #[test]
    fn test_corr_spec_covar_restricted_to_parametric_methods() {
        let spec = CorrSpec::new().covar(["Age"]).method(CorrMethod::Skipped);
        assert!(spec.validate().is_err());

        let spec = CorrSpec::new().covar(["Age"]).method(CorrMethod::Spearman);
        assert!(spec.validate().is_ok());
    }
}
