//! Tukey HSD and Games-Howell over DataFrame columns
//!
//! Groups are extracted from the grouping column in first-appearance order;
//! rows with a missing group label or dependent value are dropped.

use crate::column::{label_values, numeric_values, ColumnKey};
use crate::table::{f64_col, str_col};
use crate::{Error, Result};
use pairwise_posthoc::{games_howell, tukey_hsd, Group, PosthocComparison};
use polars::prelude::DataFrame;

fn extract_groups(df: &DataFrame, dv: &str, between: &str) -> Result<Vec<Group>> {
    let values = numeric_values(df, &ColumnKey::parse(dv))?;
    let labels = label_values(df, &ColumnKey::parse(between))?;

    let mut groups: Vec<Group> = Vec::new();
    for (label, value) in labels.iter().zip(values.iter()) {
        let (Some(label), Some(value)) = (label, value) else {
            continue;
        };
        match groups.iter_mut().find(|g| g.label == *label) {
            Some(group) => group.values.push(*value),
            None => groups.push(Group::new(label.clone(), vec![*value])),
        }
    }
    if groups.len() < 2 {
        return Err(Error::Core(pairwise_core::Error::single_level(between)));
    }
    Ok(groups)
}

fn assemble(rows: Vec<PosthocComparison>, p_name: &str) -> Result<DataFrame> {
    Ok(DataFrame::new(vec![
        str_col("A", rows.iter().map(|r| r.a.clone()).collect()),
        str_col("B", rows.iter().map(|r| r.b.clone()).collect()),
        f64_col("mean(A)", rows.iter().map(|r| r.mean_a).collect()),
        f64_col("mean(B)", rows.iter().map(|r| r.mean_b).collect()),
        f64_col("diff", rows.iter().map(|r| r.diff).collect()),
        f64_col("se", rows.iter().map(|r| r.se).collect()),
        f64_col("T", rows.iter().map(|r| r.t).collect()),
        f64_col("df", rows.iter().map(|r| r.df).collect()),
        f64_col(p_name, rows.iter().map(|r| r.p).collect()),
    ])?)
}

pub(crate) fn run_tukey(df: &DataFrame, dv: &str, between: &str) -> Result<DataFrame> {
    let groups = extract_groups(df, dv, between)?;
    log::debug!("pairwise_tukey: {} groups on '{between}'", groups.len());
    assemble(tukey_hsd(&groups)?, "p-tukey")
}

pub(crate) fn run_games_howell(df: &DataFrame, dv: &str, between: &str) -> Result<DataFrame> {
    let groups = extract_groups(df, dv, between)?;
    log::debug!(
        "pairwise_gameshowell: {} groups on '{between}'",
        groups.len()
    );
    assemble(games_howell(&groups)?, "pval")
}
