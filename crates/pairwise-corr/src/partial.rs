//! Covariate residualization for partial correlation
//!
//! Both members of a pair are regressed on the covariates (with intercept)
//! and the correlation runs on the residuals; the engine subtracts the
//! number of covariates from the degrees of freedom.

use crate::methods::{fisher_ci, r_to_t};
use crate::{CorrMethod, Correlation};
use nalgebra::{DMatrix, DVector};
use pairwise_core::{Error, Result};

/// Residuals of `values` after a least-squares fit on `covariates`
/// (one slice per covariate, all the same length as `values`).
pub fn residualize(values: &[f64], covariates: &[Vec<f64>]) -> Result<Vec<f64>> {
    let n = values.len();
    let k = covariates.len();
    if k == 0 {
        return Ok(values.to_vec());
    }
    for cov in covariates {
        if cov.len() != n {
            return Err(Error::Computation(format!(
                "covariate length {} does not match sample length {n}",
                cov.len()
            )));
        }
    }
    if n < k + 2 {
        return Err(Error::too_few(k + 2, n));
    }

    // design matrix with intercept
    let design = DMatrix::from_fn(n, k + 1, |row, col| {
        if col == 0 {
            1.0
        } else {
            covariates[col - 1][row]
        }
    });
    let rhs = DVector::from_column_slice(values);

    let svd = design.clone().svd(true, true);
    let beta = svd
        .solve(&rhs, 1e-12)
        .map_err(|e| Error::Computation(format!("least-squares solve failed: {e}")))?;

    let fitted = design * beta;
    Ok(values
        .iter()
        .zip(fitted.iter())
        .map(|(v, f)| v - f)
        .collect())
}

/// Partial correlation: both variables are residualized against the
/// covariates before the estimator runs, and the degrees of freedom drop by
/// the covariate count. Only the pearson and spearman estimators are
/// meaningful on residuals.
pub fn partial_correlation(
    x: &[f64],
    y: &[f64],
    covariates: &[Vec<f64>],
    method: CorrMethod,
) -> Result<Correlation> {
    if !matches!(method, CorrMethod::Pearson | CorrMethod::Spearman) {
        return Err(Error::Config(format!(
            "partial correlation supports pearson and spearman, not {method}"
        )));
    }
    if covariates.is_empty() {
        return crate::compute_correlation(x, y, method);
    }

    let rx = residualize(x, covariates)?;
    let ry = residualize(y, covariates)?;
    let base = crate::compute_correlation(&rx, &ry, method)?;

    let k = covariates.len();
    let n = base.n;
    let df = n as f64 - 2.0 - k as f64;
    if df < 1.0 {
        return Err(Error::too_few(k + 4, n));
    }
    let (statistic, p_two) = r_to_t(base.r, df);
    Ok(Correlation {
        ci95: fisher_ci(base.r, n, k),
        statistic,
        df,
        p_two,
        ..base
    })
}
