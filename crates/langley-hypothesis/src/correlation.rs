//! Spearman's rank correlation test.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use langley_core::math::array_to_rank;
use langley_core::{Error, MatchedSample, Result};

/// Spearman's correlation test. Langley pp. 199-211.
///
/// Tests for correlation between two measurable characteristics matched
/// across the sample, e.g. weight and height per individual. Requires an
/// order of at least 5, else [`Error::SampleTooSmall`].
///
/// Returns the signed correlation coefficient; its sign gives the direction
/// of correlation. The degree of correlation converts to a z-statistic via
/// [`langley_core::math::spearman_to_z`] and from there to a significance
/// estimate via [`langley_core::math::z_to_prob`].
pub fn spearman_correlation(msample: &MatchedSample) -> Result<f64> {
    let n = msample.order();
    if n < 5 {
        return Err(Error::SampleTooSmall {
            expected: 5,
            actual: n,
        });
    }

    let ranks_a = array_to_rank(msample.a());
    let ranks_b = array_to_rank(msample.b());

    let d2sum: f64 = ranks_a
        .iter()
        .zip(&ranks_b)
        .map(|(r_a, r_b)| (r_a - r_b) * (r_a - r_b))
        .sum();

    let big_t = tie_correction(&ranks_a) + tie_correction(&ranks_b);

    let n = n as f64;
    Ok(6.0 * (d2sum + big_t) / (n * n * n - n))
}

/// Tie correction over one rank sequence: each tie group of size x > 1
/// contributes (x^3 - x) / 12.
fn tie_correction(ranks: &[f64]) -> f64 {
    let mut group_sizes: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
    for &r in ranks {
        *group_sizes.entry(OrderedFloat(r)).or_default() += 1;
    }

    group_sizes
        .values()
        .filter(|&&size| size > 1)
        .map(|&size| {
            let x = size as f64;
            x * (x * x - 1.0) / 12.0
        })
        .sum()
}
