//! Result-table assembly and export
//!
//! Small constructors for the typed columns of the result tables, and the
//! CSV export boundary: a failed write is logged and the in-memory table is
//! still returned to the caller.

use polars::prelude::*;
use std::path::Path;

pub(crate) fn str_col(name: &str, values: Vec<String>) -> Column {
    Series::new(PlSmallStr::from(name), values).into()
}

pub(crate) fn f64_col(name: &str, values: Vec<f64>) -> Column {
    Series::new(PlSmallStr::from(name), values).into()
}

pub(crate) fn opt_f64_col(name: &str, values: Vec<Option<f64>>) -> Column {
    Series::new(PlSmallStr::from(name), values).into()
}

pub(crate) fn u32_col(name: &str, values: Vec<u32>) -> Column {
    Series::new(PlSmallStr::from(name), values).into()
}

pub(crate) fn opt_u32_col(name: &str, values: Vec<Option<u32>>) -> Column {
    Series::new(PlSmallStr::from(name), values).into()
}

pub(crate) fn bool_col(name: &str, values: Vec<bool>) -> Column {
    Series::new(PlSmallStr::from(name), values).into()
}

/// Write `table` to a delimited file. Failures are reported through the log
/// and never abort the computed result.
pub(crate) fn export_csv(table: &DataFrame, path: &Path) {
    let mut out = table.clone();
    let result = std::fs::File::create(path)
        .map_err(polars::error::PolarsError::from)
        .and_then(|mut file| CsvWriter::new(&mut file).finish(&mut out));
    if let Err(err) = result {
        log::error!("failed to export result table to {}: {err}", path.display());
    }
}
