//! Outlier-robust correlation estimators
//!
//! - `percbend`: percentage-bend correlation with bend constant beta = 0.2
//!   (Wilcox). Closed form, no resampling.
//! - `shepherd`: Shepherd's pi. Squared Mahalanobis distances averaged over
//!   200 bootstrap resamples of the bivariate cloud; points with an average
//!   distance >= 6 are discarded, then Spearman runs on the survivors.
//! - `skipped`: robust center from the minimum-covariance-determinant
//!   criterion over random half-subsets, projection-based outlier rule
//!   (median + sqrt(chi2_{0.975,2}) * ideal-fourths IQR per projection),
//!   then Spearman on the survivors.
//!
//! Resampling runs from a fixed seed so identical inputs produce identical
//! outputs.

use crate::methods::{build, pearson_r};
use crate::Correlation;
use pairwise_core::{median, rankdata, Error, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const BEND: f64 = 0.2;
const SHEPHERD_BOOT: usize = 200;
const SHEPHERD_CUTOFF: f64 = 6.0;
const MCD_SUBSETS: usize = 200;
const RESAMPLING_SEED: u64 = 42;
/// sqrt of the chi-square 97.5th percentile with 2 degrees of freedom
const GVAL: f64 = 2.7162030314449224;

/// Percentage-bend correlation, beta = 0.2.
pub fn percbend(x: &[f64], y: &[f64]) -> Result<Correlation> {
    if x.len() != y.len() {
        return Err(Error::Computation(format!(
            "samples differ in length: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    let n = x.len();
    if n < 3 {
        return Err(Error::too_few(3, n));
    }

    let mut bent = [Vec::new(), Vec::new()];
    for (c, col) in [x, y].iter().enumerate() {
        let med = median(col);
        // omega: (1 - beta) quantile of the absolute deviations
        let mut w: Vec<f64> = col.iter().map(|v| (v - med).abs()).collect();
        w.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let m = ((1.0 - BEND) * n as f64).floor() as usize;
        let omega = w[m.saturating_sub(1)];
        if omega == 0.0 {
            return Err(Error::Computation(
                "correlation undefined for a constant sample".to_string(),
            ));
        }

        // bend the observations that the psi function flags
        let psi: Vec<f64> = col.iter().map(|v| (v - med) / omega).collect();
        let i1 = psi.iter().filter(|p| **p < -1.0).count();
        let i2 = psi.iter().filter(|p| **p > 1.0).count();
        let trimmed_sum: f64 = col
            .iter()
            .zip(psi.iter())
            .filter(|(_, p)| p.abs() <= 1.0)
            .map(|(v, _)| *v)
            .sum();
        let pbos = (trimmed_sum + omega * (i2 as f64 - i1 as f64)) / (n - i1 - i2) as f64;
        bent[c] = col
            .iter()
            .map(|v| ((v - pbos) / omega).clamp(-1.0, 1.0))
            .collect();
    }

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (a, b) in bent[0].iter().zip(bent[1].iter()) {
        sxy += a * b;
        sxx += a * a;
        syy += b * b;
    }
    if sxx == 0.0 || syy == 0.0 {
        return Err(Error::Computation(
            "correlation undefined for a constant sample".to_string(),
        ));
    }
    let r = (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0);
    Ok(build(r, n, None, n as f64 - 2.0))
}

/// Shepherd's pi correlation.
pub fn shepherd(x: &[f64], y: &[f64]) -> Result<Correlation> {
    if x.len() != y.len() {
        return Err(Error::Computation(format!(
            "samples differ in length: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    let n = x.len();
    if n < 5 {
        return Err(Error::too_few(5, n));
    }

    let distances = bootstrapped_mahalanobis(x, y);
    let keep: Vec<usize> = (0..n)
        .filter(|&i| distances[i] < SHEPHERD_CUTOFF)
        .collect();
    spearman_on_subset(x, y, &keep, n)
}

/// Skipped correlation.
pub fn skipped(x: &[f64], y: &[f64]) -> Result<Correlation> {
    if x.len() != y.len() {
        return Err(Error::Computation(format!(
            "samples differ in length: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    let n = x.len();
    if n < 5 {
        return Err(Error::too_few(5, n));
    }

    let (cx, cy) = mcd_center(x, y);
    let bx: Vec<f64> = x.iter().map(|v| v - cx).collect();
    let by: Vec<f64> = y.iter().map(|v| v - cy).collect();

    // Project every point onto the direction of each centered point; a point
    // is an outlier if any projection flags it.
    let mut outlier = vec![false; n];
    for i in 0..n {
        let norm = (bx[i] * bx[i] + by[i] * by[i]).sqrt();
        if norm == 0.0 {
            continue;
        }
        let dis: Vec<f64> = (0..n)
            .map(|j| (bx[j] * bx[i] + by[j] * by[i]).abs() / norm)
            .collect();
        let thresh = median(&dis) + GVAL * ideal_fourths_iqr(&dis);
        for (j, &d) in dis.iter().enumerate() {
            if d > thresh {
                outlier[j] = true;
            }
        }
    }

    let keep: Vec<usize> = (0..n).filter(|&i| !outlier[i]).collect();
    spearman_on_subset(x, y, &keep, n)
}

fn spearman_on_subset(x: &[f64], y: &[f64], keep: &[usize], n: usize) -> Result<Correlation> {
    if keep.len() < 3 {
        return Err(Error::too_few(3, keep.len()));
    }
    let xs: Vec<f64> = keep.iter().map(|&i| x[i]).collect();
    let ys: Vec<f64> = keep.iter().map(|&i| y[i]).collect();
    let r = pearson_r(&rankdata(&xs), &rankdata(&ys))?;
    let mut out = build(r, n, Some(n - keep.len()), keep.len() as f64 - 2.0);
    // CI from the retained sample size
    out.ci95 = crate::methods::fisher_ci(r, keep.len(), 0);
    Ok(out)
}

/// Squared Mahalanobis distance of each point from the bootstrapped cloud,
/// averaged over resamples.
fn bootstrapped_mahalanobis(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut rng = ChaCha8Rng::seed_from_u64(RESAMPLING_SEED);
    let mut acc = vec![0.0; n];
    let mut used = 0usize;

    for _ in 0..SHEPHERD_BOOT {
        let idx: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
        let sx: Vec<f64> = idx.iter().map(|&i| x[i]).collect();
        let sy: Vec<f64> = idx.iter().map(|&i| y[i]).collect();
        let (mx, my) = (pairwise_core::mean(&sx), pairwise_core::mean(&sy));

        // sample covariance of the resample
        let mut sxx = 0.0;
        let mut syy = 0.0;
        let mut sxy = 0.0;
        for (a, b) in sx.iter().zip(sy.iter()) {
            sxx += (a - mx) * (a - mx);
            syy += (b - my) * (b - my);
            sxy += (a - mx) * (b - my);
        }
        let denom = (n - 1) as f64;
        let (vxx, vyy, vxy) = (sxx / denom, syy / denom, sxy / denom);
        let det = vxx * vyy - vxy * vxy;
        if det <= 0.0 {
            continue;
        }

        for i in 0..n {
            let (dx, dy) = (x[i] - mx, y[i] - my);
            acc[i] += (vyy * dx * dx - 2.0 * vxy * dx * dy + vxx * dy * dy) / det;
        }
        used += 1;
    }

    let used = used.max(1) as f64;
    acc.iter().map(|d| d / used).collect()
}

/// Robust bivariate center: mean of the half-subset with the smallest
/// covariance determinant over a fixed number of random subsets.
fn mcd_center(x: &[f64], y: &[f64]) -> (f64, f64) {
    let n = x.len();
    let h = n / 2 + 1;
    let mut rng = ChaCha8Rng::seed_from_u64(RESAMPLING_SEED);
    let mut best = (f64::INFINITY, pairwise_core::mean(x), pairwise_core::mean(y));

    let mut indices: Vec<usize> = (0..n).collect();
    for _ in 0..MCD_SUBSETS {
        // partial Fisher-Yates: first h entries form the subset
        for i in 0..h {
            let j = rng.gen_range(i..n);
            indices.swap(i, j);
        }
        let sx: Vec<f64> = indices[..h].iter().map(|&i| x[i]).collect();
        let sy: Vec<f64> = indices[..h].iter().map(|&i| y[i]).collect();
        let (mx, my) = (pairwise_core::mean(&sx), pairwise_core::mean(&sy));

        let mut sxx = 0.0;
        let mut syy = 0.0;
        let mut sxy = 0.0;
        for (a, b) in sx.iter().zip(sy.iter()) {
            sxx += (a - mx) * (a - mx);
            syy += (b - my) * (b - my);
            sxy += (a - mx) * (b - my);
        }
        let det = sxx * syy - sxy * sxy;
        if det < best.0 {
            best = (det, mx, my);
        }
    }
    (best.1, best.2)
}

/// Ideal-fourths interquartile range (Wilcox 2012).
fn ideal_fourths_iqr(sample: &[f64]) -> f64 {
    let n = sample.len();
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let j = (n as f64 / 4.0 + 5.0 / 12.0).floor() as usize;
    let g = n as f64 / 4.0 - j as f64 + 5.0 / 12.0;
    let low = (1.0 - g) * sorted[j - 1] + g * sorted[j];
    let k = n - j + 1;
    let hi = (1.0 - g) * sorted[k - 1] + g * sorted[k - 2];
    hi - low
}
