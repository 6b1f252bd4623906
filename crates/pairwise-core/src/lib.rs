//! Core types and numeric helpers for pairwise statistical comparisons
//!
//! This crate holds everything the engine crates share: the unified error
//! type, descriptive statistics, tie-aware ranking, the tail enumeration and
//! the numerical quadrature used for Bayes factors and the studentized range
//! distribution.

mod descriptive;
mod error;
mod quadrature;
mod ranks;
mod tail;

pub use descriptive::{mean, median, sample_std, sample_var, Descriptives};
pub use error::{Error, Result};
pub use quadrature::{integrate_half_line, simpson};
pub use ranks::{rankdata, tie_term};
pub use tail::Tail;
