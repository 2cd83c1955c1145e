//! Core primitives and sample model for classical hypothesis testing
//!
//! This crate carries the numeric foundations shared by every test in the
//! langley-stats workspace, following Langley's *Practical Statistics Simply
//! Explained* (Dover):
//!
//! - arithmetic and geometric means and standard deviations
//! - mid-rank assignment with tie averaging ([`math::array_to_rank`])
//! - the standard-normal density ([`math::z_to_prob`]) the book uses as an
//!   approximate two-tail significance estimate
//! - the `pochisq` chi-square tail series ([`math::pochisq`]) with its
//!   overflow cutoff and log-space branch
//! - immutable [`Sample`] / [`MatchedSample`] / [`Population`] value objects
//!   with construction-time validation and eagerly computed statistics
//!
//! # Examples
//!
//! ```
//! use langley_core::{Sample, Population};
//!
//! let copper = Population::a_priori(1080.0, 5.0);
//! let melt = Sample::arithmetic(vec![1072.0]).unwrap();
//! assert_eq!(melt.order(), 1);
//! assert!(copper.stddev().unwrap() > 0.0);
//! ```

pub mod error;
pub mod math;
pub mod sample;

pub use error::{Error, Result};
pub use sample::{DistributionKind, MatchedSample, Population, Sample};
