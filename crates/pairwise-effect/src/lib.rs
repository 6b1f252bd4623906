//! Effect size measures for pairwise comparisons
//!
//! Effect sizes quantify the magnitude of a difference between two groups
//! beyond its statistical significance. The standardized-mean-difference
//! family (Cohen's d, Hedges' g) is computed from the pooled standard
//! deviation of the two samples; the remaining measures are deterministic
//! conversions of d, except CLES which is computed directly from the data as
//! a probability of superiority.
//!
//! # Example
//!
//! ```rust,ignore
//! use pairwise_effect::{compute_effsize, EffSize};
//!
//! let group1 = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let group2 = vec![3.0, 4.0, 5.0, 6.0, 7.0];
//!
//! let d = compute_effsize(&group1, &group2, EffSize::Cohen)?;
//! println!("Cohen's d: {d:.3}");
//! ```

mod compute;
mod types;

pub use compute::{cles, cohen_d, compute_effsize, convert_d};
pub use types::EffSize;
