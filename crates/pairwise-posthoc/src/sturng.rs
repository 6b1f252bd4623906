//! Studentized range distribution
//!
//! CDF of the range of k standard normal deviates divided by an independent
//! chi estimate of their common scale:
//!
//! P(Q <= q; k, nu) = int_0^inf f_S(s) * R(q s; k) ds
//!
//! where S = chi_nu / sqrt(nu) and R(w; k) is the CDF of the range of k
//! standard normals,
//!
//! R(w; k) = k * int phi(z) [Phi(z) - Phi(z - w)]^(k-1) dz.
//!
//! Both integrals are evaluated with composite Simpson rules; the outer
//! integrand vanishes outside a few scale standard deviations of s = 1, the
//! inner outside [-8, w + 8].

use pairwise_core::simpson;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};
use statrs::function::gamma::ln_gamma;

const INNER_STEPS: usize = 1200;
const OUTER_STEPS: usize = 600;

/// CDF of the range of `k` standard normal deviates at `w`.
fn range_cdf(w: f64, k: usize) -> f64 {
    if w <= 0.0 {
        return 0.0;
    }
    let normal = Normal::new(0.0, 1.0).expect("unit normal");
    let integrand = |z: f64| {
        let window = normal.cdf(z) - normal.cdf(z - w);
        normal.pdf(z) * window.powi(k as i32 - 1)
    };
    (k as f64 * simpson(integrand, -8.0, w + 8.0, INNER_STEPS)).clamp(0.0, 1.0)
}

/// CDF of the studentized range with `k` groups and `df` degrees of freedom.
pub fn ptukey(q: f64, k: usize, df: f64) -> f64 {
    if q <= 0.0 {
        return 0.0;
    }
    // log-density of S = chi_df / sqrt(df)
    let half_df = df / 2.0;
    let log_norm = std::f64::consts::LN_2 + half_df * df.ln() - half_df * std::f64::consts::LN_2
        - ln_gamma(half_df);
    let log_density = |s: f64| log_norm + (df - 1.0) * s.ln() - df * s * s / 2.0;

    let hi = 1.0 + 15.0 / df.sqrt();
    let integrand = |s: f64| {
        if s <= 0.0 {
            return 0.0;
        }
        log_density(s).exp() * range_cdf(q * s, k)
    };
    simpson(integrand, 1e-10, hi, OUTER_STEPS).clamp(0.0, 1.0)
}

/// Upper-tail probability of the studentized range (the post-hoc p-value).
pub fn psturng(q: f64, k: usize, df: f64) -> f64 {
    (1.0 - ptukey(q, k, df)).clamp(0.0, 1.0)
}
