//! Classical hypothesis test procedures
//!
//! The nine tests from Langley's *Practical Statistics Simply Explained*,
//! built on the primitives and value objects of [`langley_core`]:
//!
//! - [`z_m`] and [`students_t`] compare a sample against a known population
//! - [`sum_of_ranks`], [`signed_ranks`], and [`stratified`] are Wilcoxon's
//!   rank tests for unmatched, matched, and stratified pairs of samples
//! - [`spearman_correlation`] is the tie-corrected rank correlation
//! - [`kruskal_wallis`] and [`friedman`] extend the rank tests to 3 or more
//!   unmatched / matched samples
//! - [`chi_square_cont`] and [`chi_square_gof`] compare frequency counts
//!
//! Every procedure is a pure function of its inputs; preconditions are
//! checked up front and violations surface as [`langley_core::Error`]
//! values. Tests returning a z-statistic pair with
//! [`langley_core::math::z_to_prob`], and those returning a chi-square
//! statistic pair with [`langley_core::math::pochisq`], for the approximate
//! significance estimates the book works with.
//!
//! # Examples
//!
//! ```
//! use langley_core::{Population, Sample};
//! use langley_core::math::z_to_prob;
//! use langley_hypothesis::z_m;
//!
//! // Copper melts at 1080 degC on average, s = 5. A sample melting at
//! // 1072 has roughly a 1-in-9 chance of being copper.
//! let copper = Population::a_priori(1080.0, 5.0);
//! let melt = Sample::arithmetic(vec![1072.0]).unwrap();
//! let z = z_m(&copper, &melt).unwrap();
//! assert!((z_to_prob(z) - 0.1109).abs() < 0.0001);
//! ```

mod chi_square;
mod correlation;
mod location;
mod multi_sample;
mod ranks;

pub use chi_square::{chi_square_cont, chi_square_gof};
pub use correlation::spearman_correlation;
pub use location::{students_t, z_m};
pub use multi_sample::{friedman, kruskal_wallis};
pub use ranks::{signed_ranks, stratified, sum_of_ranks};
