//! Column identity and value extraction
//!
//! Column identity is an ordered tuple of label segments. Hierarchical
//! labels are encoded in DataFrame column names with the `::` separator
//! (`"Behavior::Rating"` is the key `("Behavior", "Rating")`); keys are
//! compared segment-wise and multi-segment keys render as tuples in result
//! tables. Value extraction maps both nulls and NaN to missing.

use crate::{Error, Result};
use polars::prelude::*;
use std::fmt;

/// Identity of a dataset column: one segment for flat columns, several for
/// hierarchical ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnKey {
    segments: Vec<String>,
}

impl ColumnKey {
    const SEPARATOR: &'static str = "::";

    /// Key from explicit segments.
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a DataFrame column name, splitting on the `::` separator.
    pub fn parse(name: &str) -> Self {
        Self {
            segments: name.split(Self::SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// The name this key takes in a DataFrame.
    pub fn storage_name(&self) -> String {
        self.segments.join(Self::SEPARATOR)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }
}

impl From<&str> for ColumnKey {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nested() {
            write!(f, "(")?;
            for (i, seg) in self.segments.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "'{seg}'")?;
            }
            write!(f, ")")
        } else {
            write!(f, "{}", self.segments[0])
        }
    }
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float64
            | DataType::Float32
            | DataType::Int64
            | DataType::Int32
            | DataType::Int16
            | DataType::Int8
            | DataType::UInt64
            | DataType::UInt32
            | DataType::UInt16
            | DataType::UInt8
    )
}

fn find_column<'a>(df: &'a DataFrame, key: &ColumnKey) -> Result<&'a Column> {
    df.column(&key.storage_name())
        .map_err(|_| Error::InvalidColumn(key.to_string()))
}

/// Numeric column as `Option<f64>` per row; nulls and NaN are `None`.
pub(crate) fn numeric_values(df: &DataFrame, key: &ColumnKey) -> Result<Vec<Option<f64>>> {
    let column = find_column(df, key)?;
    let values: Vec<Option<f64>> = match column.dtype() {
        DataType::Float64 => column.f64()?.into_iter().collect(),
        dt if is_numeric_dtype(dt) => column.cast(&DataType::Float64)?.f64()?.into_iter().collect(),
        dt => {
            return Err(Error::TypeMismatch {
                column: key.to_string(),
                expected: "numeric".to_string(),
                got: format!("{dt:?}"),
            })
        }
    };
    Ok(values
        .into_iter()
        .map(|v| v.filter(|x| !x.is_nan()))
        .collect())
}

/// Label column as `Option<String>` per row. Float labels are formatted
/// (NaN becomes missing); every other dtype casts through polars.
pub(crate) fn label_values(df: &DataFrame, key: &ColumnKey) -> Result<Vec<Option<String>>> {
    let column = find_column(df, key)?;
    match column.dtype() {
        DataType::String => Ok(column
            .str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect()),
        dt if is_numeric_dtype(dt) => {
            let values = numeric_values(df, key)?;
            Ok(values
                .into_iter()
                .map(|v| v.map(|x| format!("{x}")))
                .collect())
        }
        _ => {
            let cast = column.cast(&DataType::String)?;
            Ok(cast
                .str()?
                .into_iter()
                .map(|v| v.map(str::to_string))
                .collect())
        }
    }
}

/// True when the column exists, is numeric and has at least two distinct
/// non-missing values: the candidate test for correlation pairing.
pub(crate) fn is_pairable(df: &DataFrame, key: &ColumnKey) -> bool {
    match numeric_values(df, key) {
        Ok(values) => {
            let mut present: Vec<f64> = values.into_iter().flatten().collect();
            present.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            present.windows(2).any(|w| w[0] != w[1])
        }
        Err(_) => false,
    }
}

/// All keys of the DataFrame, in column order.
pub(crate) fn all_keys(df: &DataFrame) -> Vec<ColumnKey> {
    df.get_column_names()
        .into_iter()
        .map(|name| ColumnKey::parse(name.as_str()))
        .collect()
}
