//! Integration tests for the pairwise t-test engine

mod common;

use approx::assert_abs_diff_eq;
use common::mixed_design;
use pairwise_polars::{Adjustment, EffSize, PairwiseStatsExt, TTestSpec, Tail};
use polars::prelude::*;

fn two_group_frame() -> DataFrame {
    df![
        "Scores" => [1.0, 2.0, 3.0, 4.0, 5.0, 2.0, 4.0, 6.0, 8.0, 10.0],
        "Group" => ["A", "A", "A", "A", "A", "B", "B", "B", "B", "B"],
    ]
    .unwrap()
}

fn f64_values(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect()
}

#[test]
fn test_simple_between_statistics() {
    let table = two_group_frame()
        .pairwise_ttests(&TTestSpec::new("Scores").between("Group"))
        .unwrap();
    assert_eq!(table.height(), 1);

    // pooled-variance Student t on hand-checked samples
    assert_abs_diff_eq!(f64_values(&table, "T")[0], -1.897367, epsilon = 1e-5);
    assert_abs_diff_eq!(f64_values(&table, "dof")[0], 8.0, epsilon = 1e-12);
    assert_abs_diff_eq!(f64_values(&table, "p-unc")[0], 0.094, epsilon = 2e-3);
    assert_abs_diff_eq!(f64_values(&table, "cohen")[0], -1.2, epsilon = 1e-9);

    let a = table.column("A").unwrap().str().unwrap().get(0).unwrap();
    assert_eq!(a, "A");
}

#[test]
fn test_row_count_is_k_choose_2() {
    // Time has three levels: C(3, 2) = 3 rows
    let table = mixed_design()
        .pairwise_ttests(&TTestSpec::new("Scores").between("Time"))
        .unwrap();
    assert_eq!(table.height(), 3);

    // levels appear in first-appearance order
    let a = table.column("A").unwrap().str().unwrap();
    let b = table.column("B").unwrap().str().unwrap();
    assert_eq!(a.get(0).unwrap(), "August");
    assert_eq!(b.get(0).unwrap(), "January");
    assert_eq!(a.get(2).unwrap(), "January");
    assert_eq!(b.get(2).unwrap(), "June");
}

#[test]
fn test_simple_within_is_paired() {
    let table = mixed_design()
        .pairwise_ttests(
            &TTestSpec::new("Scores")
                .within("Time")
                .subject("Subject")
                .return_desc(true),
        )
        .unwrap();
    assert_eq!(table.height(), 3);

    let paired = table.column("Paired").unwrap().bool().unwrap();
    assert!(paired.into_iter().all(|v| v.unwrap()));

    // descriptives requested
    for col in ["mean(A)", "std(A)", "mean(B)", "std(B)"] {
        assert!(table.column(col).is_ok(), "missing {col}");
    }
    // time effect is positive: mean(B) > mean(A) for (August, January)
    assert!(f64_values(&table, "mean(B)")[0] > f64_values(&table, "mean(A)")[0]);
}

#[test]
fn test_nonparametric_between_uses_mann_whitney() {
    let table = two_group_frame()
        .pairwise_ttests(&TTestSpec::new("Scores").between("Group").parametric(false))
        .unwrap();
    assert!(table.column("U-val").is_ok());
    assert!(table.column("T").is_err());
    assert!(table.column("dof").is_err());
    assert!(table.column("BF10").is_err());
}

#[test]
fn test_nonparametric_within_uses_wilcoxon() {
    let table = mixed_design()
        .pairwise_ttests(
            &TTestSpec::new("Scores")
                .within("Time")
                .subject("Subject")
                .parametric(false),
        )
        .unwrap();
    assert!(table.column("W-val").is_ok());
    assert!(table.column("dof").is_err());
}

#[test]
fn test_mixed_design_layout() {
    let table = mixed_design()
        .pairwise_ttests(
            &TTestSpec::new("Scores")
                .within("Time")
                .between("Group")
                .subject("Subject"),
        )
        .unwrap();
    // 3 within main rows + 1 between main row + 2 * 3 interaction rows
    assert_eq!(table.height(), 10);

    let contrast = table.column("Contrast").unwrap().str().unwrap();
    let contrasts: Vec<&str> = contrast.into_iter().map(|v| v.unwrap()).collect();
    assert_eq!(contrasts.iter().filter(|c| **c == "Time").count(), 3);
    assert_eq!(contrasts.iter().filter(|c| **c == "Group").count(), 1);
    assert_eq!(
        contrasts.iter().filter(|c| **c == "Time * Group").count(),
        6
    );

    // the subgroup column is named after the between factor
    let subgroup = table.column("Group").unwrap().str().unwrap();
    let levels: Vec<&str> = subgroup.into_iter().map(|v| v.unwrap()).collect();
    assert_eq!(levels.iter().filter(|l| **l == "-").count(), 4);
    assert_eq!(levels.iter().filter(|l| **l == "Control").count(), 3);
    assert_eq!(levels.iter().filter(|l| **l == "Meditation").count(), 3);

    // main within rows pool both groups: 12 paired subjects each
    let group_effect_row = contrasts.iter().position(|c| *c == "Group").unwrap();
    let paired = table.column("Paired").unwrap().bool().unwrap();
    assert!(!paired.get(group_effect_row).unwrap());
}

#[test]
fn test_two_between_factors_main_effects_only() {
    let table = mixed_design()
        .pairwise_ttests(&TTestSpec::new("Scores").between("Time").between("Group"))
        .unwrap();
    // C(3,2) for Time plus C(2,2) for Group, no interaction rows
    assert_eq!(table.height(), 4);
}

#[test]
fn test_two_within_factors_main_effects_only() {
    // fully-crossed repeated measures: duplicate (subject, level) cells of
    // one factor aggregate by mean over the other factor
    let table = common::rm_design()
        .pairwise_ttests(
            &TTestSpec::new("Scores")
                .within("Time")
                .within("Condition")
                .subject("Subject"),
        )
        .unwrap();
    // C(3,2) for Time plus C(2,2) for Condition
    assert_eq!(table.height(), 4);
    let paired = table.column("Paired").unwrap().bool().unwrap();
    assert!(paired.into_iter().all(|v| v.unwrap()));
}

#[test]
fn test_padjust_adds_corrected_columns() {
    let spec = TTestSpec::new("Scores")
        .between("Time")
        .padjust(Adjustment::Bonferroni);
    let table = mixed_design().pairwise_ttests(&spec).unwrap();

    let p_unc = f64_values(&table, "p-unc");
    let p_corr = f64_values(&table, "p-corr");
    for (c, u) in p_corr.iter().zip(p_unc.iter()) {
        assert_abs_diff_eq!(*c, (u * 3.0).min(1.0), epsilon = 1e-12);
        assert!(c >= u);
    }
    let adjust = table.column("p-adjust").unwrap().str().unwrap();
    assert_eq!(adjust.get(0).unwrap(), "bonf");

    // without a correction the columns are absent
    let plain = mixed_design()
        .pairwise_ttests(&TTestSpec::new("Scores").between("Time"))
        .unwrap();
    assert!(plain.column("p-corr").is_err());
}

#[test]
fn test_one_sided_halves_p() {
    let two = two_group_frame()
        .pairwise_ttests(&TTestSpec::new("Scores").between("Group"))
        .unwrap();
    let one = two_group_frame()
        .pairwise_ttests(&TTestSpec::new("Scores").between("Group").tail(Tail::OneSided))
        .unwrap();
    assert_abs_diff_eq!(
        f64_values(&one, "p-unc")[0],
        f64_values(&two, "p-unc")[0] / 2.0,
        epsilon = 1e-12
    );
}

#[test]
fn test_unequal_variance_uses_welch() {
    let df = df![
        "Scores" => [1.0, 2.0, 3.0, 1.0, 5.0, 9.0, 13.0, 17.0],
        "Group" => ["A", "A", "A", "B", "B", "B", "B", "B"],
    ]
    .unwrap();
    let student = df
        .pairwise_ttests(&TTestSpec::new("Scores").between("Group"))
        .unwrap();
    let welch = df
        .pairwise_ttests(&TTestSpec::new("Scores").between("Group").unequal_var(true))
        .unwrap();
    // pooled df is n1 + n2 - 2; Welch-Satterthwaite is fractional and smaller
    assert_abs_diff_eq!(f64_values(&student, "dof")[0], 6.0, epsilon = 1e-12);
    let welch_df = f64_values(&welch, "dof")[0];
    assert!(welch_df < 6.0 && welch_df.fract() != 0.0);
}

#[test]
fn test_effsize_selection() {
    let cohen = two_group_frame()
        .pairwise_ttests(&TTestSpec::new("Scores").between("Group"))
        .unwrap();
    let hedges = two_group_frame()
        .pairwise_ttests(&TTestSpec::new("Scores").between("Group").effsize(EffSize::Hedges))
        .unwrap();
    let d = f64_values(&cohen, "cohen")[0];
    let g = f64_values(&hedges, "hedges")[0];
    assert_abs_diff_eq!(g, d * (1.0 - 3.0 / 31.0), epsilon = 1e-9);
}

#[test]
fn test_bf10_present_on_parametric_rows() {
    let table = two_group_frame()
        .pairwise_ttests(&TTestSpec::new("Scores").between("Group"))
        .unwrap();
    let bf = table.column("BF10").unwrap().f64().unwrap().get(0).unwrap();
    assert!(bf > 0.0 && bf.is_finite());
}

#[test]
fn test_missing_values_dropped_per_pair() {
    let df = df![
        "Scores" => [Some(1.0), Some(2.0), Some(3.0), Some(4.0), None,
                     Some(2.0), Some(4.0), Some(6.0), None, Some(10.0)],
        "Group" => ["A", "A", "A", "A", "A", "B", "B", "B", "B", "B"],
    ]
    .unwrap();
    let table = df
        .pairwise_ttests(&TTestSpec::new("Scores").between("Group"))
        .unwrap();
    // 4 valid in A, 4 valid in B: dof = 6
    assert_abs_diff_eq!(f64_values(&table, "dof")[0], 6.0, epsilon = 1e-12);
}

#[test]
fn test_idempotent() {
    let spec = TTestSpec::new("Scores").between("Time").padjust(Adjustment::Holm);
    let first = mixed_design().pairwise_ttests(&spec).unwrap();
    let second = mixed_design().pairwise_ttests(&spec).unwrap();
    assert!(first.equals(&second));
}

#[test]
fn test_validation_failures() {
    let df = mixed_design();

    // invalid alpha
    let err = df
        .pairwise_ttests(&TTestSpec::new("Scores").between("Group").alpha(f64::NAN))
        .unwrap_err();
    assert!(err.is_config());

    // two within and two between factors
    let err = df
        .pairwise_ttests(
            &TTestSpec::new("Scores")
                .within("Time")
                .within("Group")
                .between("Time")
                .between("Group")
                .subject("Subject"),
        )
        .unwrap_err();
    assert!(err.is_config());

    // grouping column with a single level
    let constant = df![
        "Scores" => [1.0, 2.0, 3.0],
        "Group" => ["Control", "Control", "Control"],
    ]
    .unwrap();
    let err = constant
        .pairwise_ttests(&TTestSpec::new("Scores").between("Group"))
        .unwrap_err();
    assert!(err.is_config());

    // within factor without a subject column
    let err = df
        .pairwise_ttests(&TTestSpec::new("Scores").within("Time"))
        .unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_export_failure_is_nonfatal() {
    let table = two_group_frame()
        .pairwise_ttests(
            &TTestSpec::new("Scores")
                .between("Group")
                .export("/nonexistent-dir/ttests.csv"),
        )
        .unwrap();
    assert_eq!(table.height(), 1);
}
