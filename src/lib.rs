//! Pairwise statistical comparisons over tabular data
//!
//! This crate re-exports the `pairwise-stats` workspace: all-pairs t-tests
//! for within/between/mixed designs, all-pairs correlation coefficients with
//! robust estimators, Tukey HSD and Games-Howell post-hoc procedures, and
//! multiple-comparison corrections, all operating on Polars DataFrames.
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use pairwise_stats::{PairwiseStatsExt, TTestSpec};
//!
//! let df = df![
//!     "Scores" => [4.5, 6.1, 5.2, 7.3, 5.5, 6.8],
//!     "Group" => ["A", "A", "A", "B", "B", "B"],
//! ]?;
//!
//! let table = df.pairwise_ttests(&TTestSpec::new("Scores").between("Group"))?;
//! println!("{table}");
//! ```

pub use pairwise_adjust as adjust;
pub use pairwise_corr as corr;
pub use pairwise_effect as effect;
pub use pairwise_infer as infer;
pub use pairwise_polars as frame;
pub use pairwise_posthoc as posthoc;

// Flat re-exports of the public call surface
pub use pairwise_adjust::Adjustment;
pub use pairwise_core::{Error, Result, Tail};
pub use pairwise_corr::CorrMethod;
pub use pairwise_effect::EffSize;
pub use pairwise_polars::{ColumnKey, ColumnSelection, CorrSpec, PairwiseStatsExt, TTestSpec};
