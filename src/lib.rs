//! Classical hypothesis testing after Langley
//!
//! A small toolkit of parametric and non-parametric tests following the
//! formulas of Langley, *Practical Statistics Simply Explained* (Dover):
//! the zM and Student's t location tests, Wilcoxon's sum-of-ranks,
//! signed-ranks, and stratified tests, Spearman's tie-corrected rank
//! correlation, Kruskal-Wallis, Friedman, and the chi-square contingency
//! and goodness-of-fit tests.
//!
//! This crate re-exports the two workspace members:
//!
//! - [`langley_core`] — arithmetic primitives, mid-rank machinery, the
//!   `pochisq` chi-square tail series, and the `Sample` / `MatchedSample` /
//!   `Population` value objects
//! - [`langley_hypothesis`] — the nine test procedures
//!
//! # Examples
//!
//! ```
//! use langley_stats::{Sample, sum_of_ranks};
//! use langley_stats::math::z_to_prob;
//!
//! let a = Sample::arithmetic(vec![16.0, 20.0, 25.0, 19.0, 22.0, 15.0, 22.0, 19.0]).unwrap();
//! let b = Sample::arithmetic(vec![18.0, 19.0, 15.0, 16.0, 21.0, 17.0, 17.0, 14.0]).unwrap();
//!
//! let z = sum_of_ranks(&a, &b);
//! assert!((z_to_prob(z) - 0.096).abs() < 0.001);
//! ```

pub use langley_core::{
    error, math, sample, DistributionKind, Error, MatchedSample, Population, Result, Sample,
};
pub use langley_hypothesis::{
    chi_square_cont, chi_square_gof, friedman, kruskal_wallis, signed_ranks,
    spearman_correlation, stratified, students_t, sum_of_ranks, z_m,
};
