//! Tukey HSD
//!
//! Pooled within-group variance across all k groups, one standard error per
//! pair from the pooled mean square, N - k degrees of freedom on every row.

use crate::sturng::psturng;
use crate::{validate_groups, Group, PosthocComparison};
use pairwise_core::{mean, sample_var, Result};

/// All C(k, 2) comparisons in the order the groups are given.
pub fn tukey_hsd(groups: &[Group]) -> Result<Vec<PosthocComparison>> {
    validate_groups(groups)?;
    let k = groups.len();
    let n_total: usize = groups.iter().map(|g| g.values.len()).sum();
    let df = (n_total - k) as f64;

    let msw: f64 = groups
        .iter()
        .map(|g| (g.values.len() - 1) as f64 * sample_var(&g.values))
        .sum::<f64>()
        / df;

    let mut rows = Vec::with_capacity(k * (k - 1) / 2);
    for i in 0..k {
        for j in (i + 1)..k {
            let (a, b) = (&groups[i], &groups[j]);
            let (na, nb) = (a.values.len() as f64, b.values.len() as f64);
            let (mean_a, mean_b) = (mean(&a.values), mean(&b.values));
            let diff = mean_a - mean_b;
            let se = (msw * (1.0 / na + 1.0 / nb)).sqrt();
            let t = diff / se;
            let p = psturng(t.abs() * std::f64::consts::SQRT_2, k, df);
            rows.push(PosthocComparison {
                a: a.label.clone(),
                b: b.label.clone(),
                mean_a,
                mean_b,
                diff,
                se,
                t,
                df,
                p,
            });
        }
    }
    Ok(rows)
}
