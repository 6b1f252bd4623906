//! Pairwise correlation engine
//!
//! Resolves a column selection into concrete variable pairs, applies
//! pairwise missing-value masking (covariates included), dispatches the
//! chosen estimator, and assembles the result table. The Bayes factor is
//! computed for Pearson rows with n <= 1000 and no covariates; when no row
//! computes one the column is omitted entirely.

use crate::column::{numeric_values, ColumnKey};
use crate::table::{f64_col, opt_f64_col, opt_u32_col, str_col, u32_col};
use crate::{CorrSpec, Result};
use pairwise_adjust::Adjustment;
use pairwise_corr::{bf10_pearson, compute_correlation, partial_correlation, CorrMethod, Correlation};
use polars::prelude::DataFrame;

const BF10_MAX_N: usize = 1000;

struct Row {
    x: ColumnKey,
    y: ColumnKey,
    corr: Correlation,
    p_unc: f64,
    bf10: Option<f64>,
}

pub(crate) fn run(df: &DataFrame, spec: &CorrSpec) -> Result<DataFrame> {
    spec.validate()?;
    let pairs = spec.columns.resolve(df, &spec.covar)?;
    log::debug!(
        "pairwise_corr: {} pairs, method {}",
        pairs.len(),
        spec.method
    );

    let covar_values: Vec<Vec<Option<f64>>> = spec
        .covar
        .iter()
        .map(|key| numeric_values(df, key))
        .collect::<Result<_>>()?;

    let mut rows = Vec::with_capacity(pairs.len());
    for (key_x, key_y) in pairs {
        let raw_x = numeric_values(df, &key_x)?;
        let raw_y = numeric_values(df, &key_y)?;

        // pairwise-complete mask over the pair and the covariates
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        let mut zs: Vec<Vec<f64>> = vec![Vec::new(); covar_values.len()];
        'rows: for i in 0..raw_x.len() {
            let (Some(x), Some(y)) = (raw_x[i], raw_y[i]) else {
                continue;
            };
            for cov in &covar_values {
                if cov[i].is_none() {
                    continue 'rows;
                }
            }
            xs.push(x);
            ys.push(y);
            for (z, cov) in zs.iter_mut().zip(covar_values.iter()) {
                z.push(cov[i].unwrap());
            }
        }

        let corr = if spec.covar.is_empty() {
            compute_correlation(&xs, &ys, spec.method)?
        } else {
            partial_correlation(&xs, &ys, &zs, spec.method)?
        };

        let bf10 = (spec.method == CorrMethod::Pearson
            && spec.covar.is_empty()
            && corr.n <= BF10_MAX_N)
            .then(|| bf10_pearson(corr.r, corr.n));

        rows.push(Row {
            x: key_x,
            y: key_y,
            p_unc: spec.tail.from_two_sided(corr.p_two),
            corr,
            bf10,
        });
    }

    let table = assemble(rows, spec)?;
    if let Some(path) = &spec.export {
        crate::table::export_csv(&table, path);
    }
    Ok(table)
}

fn assemble(rows: Vec<Row>, spec: &CorrSpec) -> Result<DataFrame> {
    let pvals: Vec<f64> = rows.iter().map(|r| r.p_unc).collect();

    let mut columns = vec![
        str_col("X", rows.iter().map(|r| r.x.to_string()).collect()),
        str_col("Y", rows.iter().map(|r| r.y.to_string()).collect()),
        str_col(
            "method",
            vec![spec.method.name().to_string(); rows.len()],
        ),
        str_col("tail", vec![spec.tail.to_string(); rows.len()]),
        u32_col("n", rows.iter().map(|r| r.corr.n as u32).collect()),
    ];

    if rows.iter().any(|r| r.corr.outliers.is_some()) {
        columns.push(opt_u32_col(
            "outliers",
            rows.iter()
                .map(|r| r.corr.outliers.map(|o| o as u32))
                .collect(),
        ));
    }

    columns.push(f64_col("r", rows.iter().map(|r| r.corr.r).collect()));
    columns.push(f64_col(
        "CI95_lower",
        rows.iter().map(|r| r.corr.ci95.0).collect(),
    ));
    columns.push(f64_col(
        "CI95_upper",
        rows.iter().map(|r| r.corr.ci95.1).collect(),
    ));
    columns.push(f64_col("r2", rows.iter().map(|r| r.corr.r2).collect()));
    columns.push(f64_col(
        "adj_r2",
        rows.iter().map(|r| r.corr.adj_r2).collect(),
    ));
    columns.push(f64_col(
        "T",
        rows.iter().map(|r| r.corr.statistic).collect(),
    ));
    columns.push(f64_col("dof", rows.iter().map(|r| r.corr.df).collect()));
    columns.push(f64_col("p-unc", pvals.clone()));

    if spec.padjust != Adjustment::None {
        columns.push(f64_col("p-corr", spec.padjust.adjust(&pvals)));
        columns.push(str_col(
            "p-adjust",
            vec![spec.padjust.name().to_string(); rows.len()],
        ));
    }

    if rows.iter().any(|r| r.bf10.is_some()) {
        columns.push(opt_f64_col(
            "BF10",
            rows.iter().map(|r| r.bf10).collect(),
        ));
    }

    Ok(DataFrame::new(columns)?)
}
