//! Two-sample tests for pairwise comparisons
//!
//! Parametric branch: Student's t with pooled variance, Welch's t with
//! Welch-Satterthwaite degrees of freedom, and the paired t-test.
//! Non-parametric branch: Mann-Whitney U for independent samples and the
//! Wilcoxon signed-rank test for paired samples, both through tie-corrected
//! normal approximations. The JZS Bayes factor quantifies evidence for the
//! alternative on parametric rows.

mod bayes;
mod rank;
mod ttest;

pub use bayes::bf10_ttest;
pub use rank::{mann_whitney, wilcoxon_signed_rank, RankTest};
pub use ttest::{paired_t, student_t, t_pvalue, welch_t, TTest};
