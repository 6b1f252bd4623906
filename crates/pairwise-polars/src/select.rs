//! Column-selection algebra for pairwise correlations
//!
//! A selection resolves to a list of concrete column pairs against a
//! DataFrame. Candidate columns are the numeric columns with at least two
//! distinct non-missing values; unknown, non-numeric and constant columns
//! are silently dropped from selections. A selection that leaves nothing to
//! pair is a configuration error.

use crate::column::{all_keys, is_pairable, ColumnKey};
use crate::{Error, Result};
use polars::prelude::DataFrame;
use std::collections::HashSet;

/// Which variable pairs to correlate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColumnSelection {
    /// All candidate columns, all pairs
    #[default]
    All,
    /// All pairs within a list; a list that filters down to one column is
    /// crossed with every other candidate column instead
    Columns(Vec<ColumnKey>),
    /// Cross product of two lists; an empty second list means "every other
    /// candidate column"
    Groups(Vec<ColumnKey>, Vec<ColumnKey>),
}

impl ColumnSelection {
    /// Convenience constructor for a flat list.
    pub fn columns<K: Into<ColumnKey>>(keys: impl IntoIterator<Item = K>) -> Self {
        Self::Columns(keys.into_iter().map(Into::into).collect())
    }

    /// Convenience constructor for a cross product.
    pub fn cross<K: Into<ColumnKey>, L: Into<ColumnKey>>(
        first: impl IntoIterator<Item = K>,
        second: impl IntoIterator<Item = L>,
    ) -> Self {
        Self::Groups(
            first.into_iter().map(Into::into).collect(),
            second.into_iter().map(Into::into).collect(),
        )
    }

    /// Resolve to concrete, deduplicated pairs. `exclude` removes columns
    /// (covariates) from the candidate set.
    pub(crate) fn resolve(
        &self,
        df: &DataFrame,
        exclude: &[ColumnKey],
    ) -> Result<Vec<(ColumnKey, ColumnKey)>> {
        let candidates: Vec<ColumnKey> = all_keys(df)
            .into_iter()
            .filter(|k| !exclude.contains(k) && is_pairable(df, k))
            .collect();

        let pairs = match self {
            Self::All => combinations(&candidates),
            Self::Columns(list) => {
                let valid = filter_valid(list, &candidates);
                match valid.len() {
                    0 => Vec::new(),
                    // a single surviving column is crossed with all others
                    1 => candidates
                        .iter()
                        .filter(|k| **k != valid[0])
                        .map(|k| (valid[0].clone(), k.clone()))
                        .collect(),
                    _ => combinations(&valid),
                }
            }
            Self::Groups(first, second) => {
                let g1 = filter_valid(first, &candidates);
                let g2 = if second.is_empty() {
                    candidates
                        .iter()
                        .filter(|k| !g1.contains(k))
                        .cloned()
                        .collect()
                } else {
                    filter_valid(second, &candidates)
                };
                let mut seen = HashSet::new();
                let mut pairs = Vec::new();
                for a in &g1 {
                    for b in &g2 {
                        if a == b {
                            continue;
                        }
                        let mut unordered = [a.storage_name(), b.storage_name()];
                        unordered.sort();
                        if seen.insert(unordered) {
                            pairs.push((a.clone(), b.clone()));
                        }
                    }
                }
                pairs
            }
        };

        if pairs.is_empty() {
            return Err(Error::Core(pairwise_core::Error::no_valid_pairs()));
        }
        Ok(pairs)
    }
}

fn filter_valid(list: &[ColumnKey], candidates: &[ColumnKey]) -> Vec<ColumnKey> {
    let mut valid = Vec::new();
    for key in list {
        if candidates.contains(key) && !valid.contains(key) {
            valid.push(key.clone());
        }
    }
    valid
}

fn combinations(keys: &[ColumnKey]) -> Vec<(ColumnKey, ColumnKey)> {
    let mut pairs = Vec::new();
    for i in 0..keys.len() {
        for j in (i + 1)..keys.len() {
            pairs.push((keys[i].clone(), keys[j].clone()));
        }
    }
    pairs
}
