//! Correlation estimators for pairwise comparisons
//!
//! Classical estimators (Pearson, Spearman, Kendall tau-b), outlier-robust
//! estimators (percentage-bend, Shepherd's pi, skipped correlation), partial
//! correlation through least-squares residualization, and the Pearson Bayes
//! factor. All estimators consume already-masked sample pairs; the engine
//! crate performs the pairwise missing-value removal.
//!
//! The resampling-based estimators (shepherd, skipped) run a fixed number of
//! iterations from a fixed seed, so repeated calls on identical inputs give
//! identical results.

mod bayes;
mod methods;
mod partial;
mod robust;
mod types;

pub use bayes::bf10_pearson;
pub use methods::{kendall, pearson, spearman};
pub use partial::{partial_correlation, residualize};
pub use robust::{percbend, shepherd, skipped};
pub use types::{CorrMethod, Correlation};

use pairwise_core::Result;

/// Dispatch on the method enumeration.
///
/// Robust methods may discard outliers internally; the returned
/// [`Correlation`] keeps the full pair count in `n` and the discarded count
/// in `outliers`.
pub fn compute_correlation(x: &[f64], y: &[f64], method: CorrMethod) -> Result<Correlation> {
    match method {
        CorrMethod::Pearson => pearson(x, y),
        CorrMethod::Spearman => spearman(x, y),
        CorrMethod::Kendall => kendall(x, y),
        CorrMethod::PercBend => percbend(x, y),
        CorrMethod::Shepherd => shepherd(x, y),
        CorrMethod::Skipped => skipped(x, y),
    }
}
