//! Classical correlation estimators

use crate::Correlation;
use pairwise_core::{mean, rankdata, Error, Result};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// z critical value for the 95% Fisher interval
const Z_975: f64 = 1.959963984540054;

fn check_sizes(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::Computation(format!(
            "samples differ in length: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 3 {
        return Err(Error::too_few(3, x.len()));
    }
    Ok(())
}

/// Plain product-moment coefficient of two aligned slices.
pub(crate) fn pearson_r(x: &[f64], y: &[f64]) -> Result<f64> {
    let (mx, my) = (mean(x), mean(y));
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&a, &b) in x.iter().zip(y.iter()) {
        sxy += (a - mx) * (b - my);
        sxx += (a - mx) * (a - mx);
        syy += (b - my) * (b - my);
    }
    if sxx == 0.0 || syy == 0.0 {
        return Err(Error::Computation(
            "correlation undefined for a constant sample".to_string(),
        ));
    }
    Ok((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

/// 95% confidence interval through the Fisher z transform; `n_covar` widens
/// the interval for partial correlations.
pub(crate) fn fisher_ci(r: f64, n: usize, n_covar: usize) -> (f64, f64) {
    if n <= 3 + n_covar || r.abs() >= 1.0 {
        return (f64::NAN, f64::NAN);
    }
    let se = 1.0 / ((n - 3 - n_covar) as f64).sqrt();
    let z = r.atanh();
    ((z - Z_975 * se).tanh(), (z + Z_975 * se).tanh())
}

/// t statistic and two-sided p for a correlation with `df` degrees of freedom.
pub(crate) fn r_to_t(r: f64, df: f64) -> (f64, f64) {
    if r.abs() >= 1.0 {
        return (f64::INFINITY.copysign(r), 0.0);
    }
    let t = r * (df / (1.0 - r * r)).sqrt();
    let dist = StudentsT::new(0.0, 1.0, df).expect("positive degrees of freedom");
    (t, (2.0 * (1.0 - dist.cdf(t.abs()))).min(1.0))
}

pub(crate) fn build(r: f64, n: usize, outliers: Option<usize>, df: f64) -> Correlation {
    let (statistic, p_two) = r_to_t(r, df);
    let r2 = r * r;
    let nf = n as f64;
    Correlation {
        r,
        ci95: fisher_ci(r, n, 0),
        n,
        outliers,
        statistic,
        df,
        p_two,
        r2,
        adj_r2: 1.0 - (1.0 - r2) * (nf - 1.0) / (nf - 3.0),
    }
}

/// Pearson product-moment correlation.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<Correlation> {
    check_sizes(x, y)?;
    let r = pearson_r(x, y)?;
    Ok(build(r, x.len(), None, x.len() as f64 - 2.0))
}

/// Spearman rank correlation (Pearson on tie-averaged ranks).
pub fn spearman(x: &[f64], y: &[f64]) -> Result<Correlation> {
    check_sizes(x, y)?;
    let r = pearson_r(&rankdata(x), &rankdata(y))?;
    Ok(build(r, x.len(), None, x.len() as f64 - 2.0))
}

/// Kendall tau-b with tie correction in the denominator; the p-value comes
/// from the normal approximation of the concordance statistic S, and the
/// z score is reported in place of a t statistic.
pub fn kendall(x: &[f64], y: &[f64]) -> Result<Correlation> {
    check_sizes(x, y)?;
    let n = x.len();
    let mut concordant_minus_discordant = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let sx = (x[i] - x[j]).signum();
            let sy = (y[i] - y[j]).signum();
            concordant_minus_discordant += sx * sy;
        }
    }

    let n0 = (n * (n - 1)) as f64 / 2.0;
    let n1 = tie_pairs(x);
    let n2 = tie_pairs(y);
    let denom = ((n0 - n1) * (n0 - n2)).sqrt();
    if denom == 0.0 {
        return Err(Error::Computation(
            "correlation undefined for a constant sample".to_string(),
        ));
    }
    let tau = (concordant_minus_discordant / denom).clamp(-1.0, 1.0);

    let nf = n as f64;
    let var_s = nf * (nf - 1.0) * (2.0 * nf + 5.0) / 18.0;
    let z = concordant_minus_discordant / var_s.sqrt();
    let normal = Normal::new(0.0, 1.0).expect("unit normal");
    let p_two = (2.0 * (1.0 - normal.cdf(z.abs()))).min(1.0);

    let r2 = tau * tau;
    Ok(Correlation {
        r: tau,
        ci95: fisher_ci(tau, n, 0),
        n,
        outliers: None,
        statistic: z,
        df: nf - 2.0,
        p_two,
        r2,
        adj_r2: 1.0 - (1.0 - r2) * (nf - 1.0) / (nf - 3.0),
    })
}

/// Sum over tie groups of t(t-1)/2.
fn tie_pairs(sample: &[f64]) -> f64 {
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mut total = 0.0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        let t = (j - i) as f64;
        total += t * (t - 1.0) / 2.0;
        i = j;
    }
    total
}
