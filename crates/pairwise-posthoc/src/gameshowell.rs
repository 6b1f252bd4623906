//! Games-Howell
//!
//! Unequal-variance alternative to Tukey HSD: per-pair standard errors from
//! each group's own variance and Welch-Satterthwaite degrees of freedom per
//! pair, with p-values from the studentized range distribution.

use crate::sturng::psturng;
use crate::{validate_groups, Group, PosthocComparison};
use pairwise_core::{mean, sample_var, Result};

/// All C(k, 2) comparisons in the order the groups are given.
pub fn games_howell(groups: &[Group]) -> Result<Vec<PosthocComparison>> {
    validate_groups(groups)?;
    let k = groups.len();

    let mut rows = Vec::with_capacity(k * (k - 1) / 2);
    for i in 0..k {
        for j in (i + 1)..k {
            let (a, b) = (&groups[i], &groups[j]);
            let (na, nb) = (a.values.len() as f64, b.values.len() as f64);
            let (va, vb) = (sample_var(&a.values) / na, sample_var(&b.values) / nb);
            let (mean_a, mean_b) = (mean(&a.values), mean(&b.values));

            let diff = mean_a - mean_b;
            let se = (va + vb).sqrt();
            let t = diff / se;
            let df = (va + vb) * (va + vb)
                / (va * va / (na - 1.0) + vb * vb / (nb - 1.0));
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn pain_threshold_groups() -> Vec<Group> {
        vec![
            Group::new("Dark Blond", vec![63.0, 57.0, 52.0, 41.0, 43.0]),
            Group::new("Dark Brunette", vec![32.0, 39.0, 51.0, 30.0, 35.0]),
            Group::new("Light Blond", vec![62.0, 60.0, 71.0, 55.0, 48.0]),
            Group::new("Light Brunette", vec![42.0, 50.0, 41.0, 37.0]),
        ]
    }

    #[test]
    fn test_pain_threshold_reference_statistics() {
        // reference values from the R package userfriendlyscience
        let rows = games_howell(&pain_threshold_groups()).unwrap();
        let expected_t = [2.48, 1.42, 1.75, 4.09, 1.11, 3.56];
        let expected_df = [7.91, 7.94, 6.56, 8.0, 6.82, 6.77];
        for (row, (t, df)) in rows.iter().zip(expected_t.iter().zip(expected_df.iter())) {
            assert_abs_diff_eq!(row.t.abs(), *t, epsilon = 0.005);
            assert_abs_diff_eq!(row.df, *df, epsilon = 0.005);
        }
    }

    #[test]
    fn test_pain_threshold_significance_pattern() {
        let rows = games_howell(&pain_threshold_groups()).unwrap();
        let sig: Vec<bool> = rows.iter().map(|r| r.p < 0.05).collect();
        assert_eq!(sig, vec![false, false, false, true, false, true]);
    }

    #[test]
    fn test_welch_satterthwaite_per_pair() {
        let rows = games_howell(&pain_threshold_groups()).unwrap();
        // degrees of freedom vary per pair, unlike Tukey
        assert!(rows.iter().any(|r| (r.df - rows[0].df).abs() > 0.01));
    }

    #[test]
    fn test_too_small_group_rejected() {
        let groups = vec![
            Group::new("a", vec![1.0, 2.0]),
            Group::new("b", vec![3.0]),
        ];
        assert!(games_howell(&groups).is_err());
    }
}
