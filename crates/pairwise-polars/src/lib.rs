//! Polars integration for pairwise statistical comparisons
//!
//! This crate binds the pairwise-stats engines to Polars DataFrames through
//! a single extension trait. Missing values (nulls and NaN) are dropped per
//! the documented policy of each engine: rows with a missing grouping or
//! subject label before pair enumeration, missing dependent values per
//! pair.
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use pairwise_polars::{CorrSpec, PairwiseStatsExt, TTestSpec};
//!
//! let df = df![
//!     "Scores" => [5.5, 6.1, 4.9, 7.2, 6.8, 7.9],
//!     "Group" => ["Control", "Control", "Control", "Drug", "Drug", "Drug"],
//! ]?;
//!
//! let ttests = df.pairwise_ttests(&TTestSpec::new("Scores").between("Group"))?;
//! let corrs = df.pairwise_corr(&CorrSpec::new())?;
//! ```

mod column;
mod corr;
mod error;
mod posthoc;
mod select;
mod specs;
mod table;
mod traits;
mod ttests;

pub use column::ColumnKey;
pub use error::{Error, Result};
pub use select::ColumnSelection;
pub use specs::{CorrSpec, TTestSpec};
pub use traits::PairwiseStatsExt;

// Re-export the configuration enumerations of the engine crates
pub use pairwise_adjust::Adjustment;
pub use pairwise_core::Tail;
pub use pairwise_corr::CorrMethod;
pub use pairwise_effect::EffSize;
