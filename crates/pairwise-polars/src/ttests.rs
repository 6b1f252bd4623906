//! Pairwise t-test engine
//!
//! Enumerates factor-level pairs for one or two within/between factors and
//! computes one comparison row per pair. Rows with a missing grouping or
//! subject label are dropped before pair enumeration; missing dependent
//! values are dropped per pair. Level and subject order follow first
//! appearance in the data. Duplicate (subject, level) cells aggregate by
//! mean.
//!
//! Designs:
//! - one within factor: paired comparisons across subjects
//! - one between factor: independent comparisons
//! - one within + one between (mixed): within main effect, between main
//!   effect on per-subject means, then within pairs restricted to each
//!   between level (the interaction decomposition)
//! - two within or two between factors: main-effect pairs per factor,
//!   each ignoring the other factor

use crate::column::{label_values, numeric_values, ColumnKey};
use crate::table::{bool_col, f64_col, opt_f64_col, str_col};
use crate::{Result, TTestSpec};
use pairwise_adjust::Adjustment;
use pairwise_core::{Descriptives, Error};
use pairwise_effect::{compute_effsize, EffSize};
use pairwise_infer::{bf10_ttest, mann_whitney, paired_t, student_t, welch_t, wilcoxon_signed_rank};
use polars::prelude::DataFrame;
use std::collections::HashMap;

struct Row {
    contrast: String,
    subgroup: Option<String>,
    a: String,
    b: String,
    desc: Option<(Descriptives, Descriptives)>,
    paired: bool,
    statistic: f64,
    df: Option<f64>,
    p_unc: f64,
    bf10: Option<f64>,
    effsize: f64,
}

pub(crate) fn run(df: &DataFrame, spec: &TTestSpec) -> Result<DataFrame> {
    spec.validate()?;
    let engine = Engine::load(df, spec)?;

    let rows = match (spec.within.len(), spec.between.len()) {
        (1, 0) => engine.within_rows(&spec.within[0], None, &spec.within[0], None)?,
        (0, 1) => engine.between_rows(&spec.between[0])?,
        (1, 1) => engine.mixed_rows(&spec.within[0], &spec.between[0])?,
        (2, 0) => {
            let mut rows = engine.within_rows(&spec.within[0], None, &spec.within[0], None)?;
            rows.extend(engine.within_rows(&spec.within[1], None, &spec.within[1], None)?);
            rows
        }
        (0, 2) => {
            let mut rows = engine.between_rows(&spec.between[0])?;
            rows.extend(engine.between_rows(&spec.between[1])?);
            rows
        }
        _ => unreachable!("rejected by TTestSpec::validate"),
    };
    log::debug!(
        "pairwise_ttests: dv '{}', {} comparison rows",
        spec.dv,
        rows.len()
    );

    let table = assemble(rows, spec)?;
    if let Some(path) = &spec.export {
        crate::table::export_csv(&table, path);
    }
    Ok(table)
}

struct Engine<'a> {
    df: &'a DataFrame,
    spec: &'a TTestSpec,
    dv: Vec<Option<f64>>,
    subjects: Option<Vec<Option<String>>>,
}

impl<'a> Engine<'a> {
    fn load(df: &'a DataFrame, spec: &'a TTestSpec) -> Result<Self> {
        let dv = numeric_values(df, &ColumnKey::parse(&spec.dv))?;
        let subjects = match &spec.subject {
            Some(subject) => Some(label_values(df, &ColumnKey::parse(subject))?),
            None => None,
        };
        Ok(Self {
            df,
            spec,
            dv,
            subjects,
        })
    }

    fn labels(&self, factor: &str) -> Result<Vec<Option<String>>> {
        label_values(self.df, &ColumnKey::parse(factor))
    }

    /// Levels in first-appearance order among unmasked rows with a label
    /// (and a subject, when the design is paired).
    fn levels(
        &self,
        factor: &str,
        labels: &[Option<String>],
        mask: Option<&[bool]>,
        need_subject: bool,
    ) -> Result<Vec<String>> {
        let mut levels: Vec<String> = Vec::new();
        for (i, label) in labels.iter().enumerate() {
            if !row_active(mask, i) {
                continue;
            }
            if need_subject && self.subject_of(i).is_none() {
                continue;
            }
            if let Some(label) = label {
                if !levels.iter().any(|l| l == label) {
                    levels.push(label.clone());
                }
            }
        }
        if levels.len() < 2 {
            return Err(Error::single_level(factor).into());
        }
        Ok(levels)
    }

    fn subject_of(&self, row: usize) -> Option<&str> {
        self.subjects
            .as_ref()
            .and_then(|s| s[row].as_deref())
    }

    /// Paired comparisons over the levels of a within factor.
    fn within_rows(
        &self,
        factor: &str,
        mask: Option<&[bool]>,
        contrast: &str,
        subgroup: Option<&str>,
    ) -> Result<Vec<Row>> {
        let labels = self.labels(factor)?;
        let levels = self.levels(factor, &labels, mask, true)?;

        let mut rows = Vec::new();
        for i in 0..levels.len() {
            for j in (i + 1)..levels.len() {
                let (x, y) = self.paired_samples(&labels, mask, &levels[i], &levels[j]);
                rows.push(self.make_row(
                    contrast,
                    subgroup.map(str::to_string),
                    &levels[i],
                    &levels[j],
                    &x,
                    &y,
                    true,
                )?);
            }
        }
        Ok(rows)
    }

    /// Independent comparisons over the levels of a between factor.
    fn between_rows(&self, factor: &str) -> Result<Vec<Row>> {
        let labels = self.labels(factor)?;
        let levels = self.levels(factor, &labels, None, false)?;

        let mut rows = Vec::new();
        for i in 0..levels.len() {
            for j in (i + 1)..levels.len() {
                let x = self.level_sample(&labels, &levels[i]);
                let y = self.level_sample(&labels, &levels[j]);
                rows.push(self.make_row(
                    factor,
                    None,
                    &levels[i],
                    &levels[j],
                    &x,
                    &y,
                    false,
                )?);
            }
        }
        Ok(rows)
    }

    /// Mixed design: within main effect, between main effect on per-subject
    /// means, then the interaction decomposition.
    fn mixed_rows(&self, within: &str, between: &str) -> Result<Vec<Row>> {
        let mut rows = self.within_rows(within, None, within, None)?;

        let between_labels = self.labels(between)?;
        let between_levels = self.levels(between, &between_labels, None, false)?;
        for i in 0..between_levels.len() {
            for j in (i + 1)..between_levels.len() {
                let x = self.subject_mean_sample(&between_labels, &between_levels[i]);
                let y = self.subject_mean_sample(&between_labels, &between_levels[j]);
                rows.push(self.make_row(
                    between,
                    None,
                    &between_levels[i],
                    &between_levels[j],
                    &x,
                    &y,
                    false,
                )?);
            }
        }

        let contrast = format!("{within} * {between}");
        for level in &between_levels {
            let mask: Vec<bool> = between_labels
                .iter()
                .map(|l| l.as_deref() == Some(level.as_str()))
                .collect();
            rows.extend(self.within_rows(within, Some(&mask), &contrast, Some(level))?);
        }
        Ok(rows)
    }

    /// Aligned per-subject samples for a within-level pair; duplicate cells
    /// aggregate by mean, subjects missing either side drop out.
    fn paired_samples(
        &self,
        labels: &[Option<String>],
        mask: Option<&[bool]>,
        a: &str,
        b: &str,
    ) -> (Vec<f64>, Vec<f64>) {
        let mut order: Vec<&str> = Vec::new();
        let mut cells: HashMap<(&str, bool), (f64, usize)> = HashMap::new();
        for (i, label) in labels.iter().enumerate() {
            if !row_active(mask, i) {
                continue;
            }
            let (Some(label), Some(subject), Some(value)) =
                (label.as_deref(), self.subject_of(i), self.dv[i])
            else {
                continue;
            };
            let side = if label == a {
                true
            } else if label == b {
                false
            } else {
                continue;
            };
            if !order.contains(&subject) {
                order.push(subject);
            }
            let cell = cells.entry((subject, side)).or_insert((0.0, 0));
            cell.0 += value;
            cell.1 += 1;
        }

        let mut x = Vec::new();
        let mut y = Vec::new();
        for subject in order {
            if let (Some(&(sa, na)), Some(&(sb, nb))) =
                (cells.get(&(subject, true)), cells.get(&(subject, false)))
            {
                x.push(sa / na as f64);
                y.push(sb / nb as f64);
            }
        }
        (x, y)
    }

    /// Valid dependent values for one between level.
    fn level_sample(&self, labels: &[Option<String>], level: &str) -> Vec<f64> {
        labels
            .iter()
            .zip(self.dv.iter())
            .filter(|(l, v)| l.as_deref() == Some(level) && v.is_some())
            .map(|(_, v)| v.unwrap())
            .collect()
    }

    /// One mean per subject within a between level, so repeated measures do
    /// not inflate the independent comparison.
    fn subject_mean_sample(&self, labels: &[Option<String>], level: &str) -> Vec<f64> {
        let mut order: Vec<&str> = Vec::new();
        let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
        for (i, label) in labels.iter().enumerate() {
            let (Some(label), Some(subject), Some(value)) =
                (label.as_deref(), self.subject_of(i), self.dv[i])
            else {
                continue;
            };
            if label != level {
                continue;
            }
            if !order.contains(&subject) {
                order.push(subject);
            }
            let cell = sums.entry(subject).or_insert((0.0, 0));
            cell.0 += value;
            cell.1 += 1;
        }
        order
            .into_iter()
            .map(|s| {
                let (sum, n) = sums[s];
                sum / n as f64
            })
            .collect()
    }

    #[allow(clippy::too_many_arguments)]
    fn make_row(
        &self,
        contrast: &str,
        subgroup: Option<String>,
        a: &str,
        b: &str,
        x: &[f64],
        y: &[f64],
        paired: bool,
    ) -> Result<Row> {
        if x.len() < 2 || y.len() < 2 {
            return Err(Error::too_few(2, x.len().min(y.len())).into());
        }

        let (statistic, df, p_unc, bf10) = if self.spec.parametric {
            let test = if paired {
                paired_t(x, y)?
            } else if self.spec.unequal_var {
                welch_t(x, y)?
            } else {
                student_t(x, y)?
            };
            let bf = if paired {
                bf10_ttest(test.t, x.len(), None)
            } else {
                bf10_ttest(test.t, x.len(), Some(y.len()))
            };
            (
                test.t,
                Some(test.df),
                test.p_value(self.spec.tail),
                Some(bf),
            )
        } else {
            let test = if paired {
                wilcoxon_signed_rank(x, y)?
            } else {
                mann_whitney(x, y)?
            };
            (test.statistic, None, test.p_value(self.spec.tail), None)
        };

        let desc = if self.spec.return_desc {
            Some((Descriptives::from_sample(x)?, Descriptives::from_sample(y)?))
        } else {
            None
        };

        Ok(Row {
            contrast: contrast.to_string(),
            subgroup,
            a: a.to_string(),
            b: b.to_string(),
            desc,
            paired,
            statistic,
            df,
            p_unc,
            bf10,
            effsize: compute_effsize(x, y, self.spec.effsize)?,
        })
    }
}

fn row_active(mask: Option<&[bool]>, row: usize) -> bool {
    mask.map_or(true, |m| m[row])
}

fn assemble(rows: Vec<Row>, spec: &TTestSpec) -> Result<DataFrame> {
    let pvals: Vec<f64> = rows.iter().map(|r| r.p_unc).collect();
    let (p_corr, sig) = match spec.padjust {
        Adjustment::None => {
            let sig = pvals.iter().map(|&p| p < spec.alpha).collect();
            (None, sig)
        }
        method => {
            let (adjusted, sig) = method.significant(&pvals, spec.alpha);
            (Some(adjusted), sig)
        }
    };

    let mut columns = vec![str_col(
        "Contrast",
        rows.iter().map(|r| r.contrast.clone()).collect(),
    )];
    let mixed = spec.within.len() == 1 && spec.between.len() == 1;
    if mixed {
        columns.push(str_col(
            &spec.between[0],
            rows.iter()
                .map(|r| r.subgroup.clone().unwrap_or_else(|| "-".to_string()))
                .collect(),
        ));
    }
    columns.push(str_col("A", rows.iter().map(|r| r.a.clone()).collect()));
    columns.push(str_col("B", rows.iter().map(|r| r.b.clone()).collect()));

    if spec.return_desc {
        let desc = |f: fn(&(Descriptives, Descriptives)) -> f64| -> Vec<f64> {
            rows.iter()
                .map(|r| r.desc.as_ref().map(f).unwrap_or(f64::NAN))
                .collect()
        };
        columns.push(f64_col("mean(A)", desc(|d| d.0.mean)));
        columns.push(f64_col("std(A)", desc(|d| d.0.std)));
        columns.push(f64_col("mean(B)", desc(|d| d.1.mean)));
        columns.push(f64_col("std(B)", desc(|d| d.1.std)));
    }

    columns.push(bool_col(
        "Paired",
        rows.iter().map(|r| r.paired).collect(),
    ));
    columns.push(bool_col("Parametric", vec![spec.parametric; rows.len()]));

    let stat_name = if spec.parametric {
        "T"
    } else if !spec.within.is_empty() {
        "W-val"
    } else {
        "U-val"
    };
    columns.push(f64_col(
        stat_name,
        rows.iter().map(|r| r.statistic).collect(),
    ));
    if spec.parametric {
        columns.push(f64_col(
            "dof",
            rows.iter().map(|r| r.df.unwrap_or(f64::NAN)).collect(),
        ));
    }

    columns.push(str_col(
        "tail",
        vec![spec.tail.to_string(); rows.len()],
    ));
    columns.push(f64_col("p-unc", pvals));
    if let Some(p_corr) = p_corr {
        columns.push(f64_col("p-corr", p_corr));
        columns.push(str_col(
            "p-adjust",
            vec![spec.padjust.name().to_string(); rows.len()],
        ));
    }
    if spec.parametric {
        columns.push(opt_f64_col(
            "BF10",
            rows.iter().map(|r| r.bf10).collect(),
        ));
    }
    if spec.effsize != EffSize::None {
        columns.push(f64_col(
            spec.effsize.name(),
            rows.iter().map(|r| r.effsize).collect(),
        ));
    }
    columns.push(bool_col("sig", sig));

    Ok(DataFrame::new(columns)?)
}
