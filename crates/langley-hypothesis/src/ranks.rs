//! Wilcoxon's rank-based tests and their shared rank-sum kernel.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use tracing::debug;

use langley_core::{Error, MatchedSample, Result, Sample};

/// Differences smaller than this are treated as no change and dropped by
/// the signed-ranks test.
const NEGLIGIBLE_DIFF: f64 = 1e-6;

/// Rank sums for both samples over their pooled, mid-rank-tied data.
///
/// With `descending` the pooled ordering is reversed before ranks are
/// assigned, which is what the kernel's reversed-order fallback probes.
/// A value appearing k times within a sample contributes k times its
/// mid-rank.
fn rank_sums(sample_a: &Sample, sample_b: &Sample, descending: bool) -> (f64, f64) {
    let mut pooled: Vec<f64> = sample_a
        .data()
        .iter()
        .chain(sample_b.data())
        .copied()
        .collect();
    pooled.sort_by(f64::total_cmp);
    if descending {
        pooled.reverse();
    }

    let mut occupied: BTreeMap<OrderedFloat<f64>, (usize, usize)> = BTreeMap::new();
    for (i, &v) in pooled.iter().enumerate() {
        let entry = occupied.entry(OrderedFloat(v)).or_insert((0, 0));
        entry.0 += i + 1;
        entry.1 += 1;
    }
    let midrank: BTreeMap<OrderedFloat<f64>, f64> = occupied
        .into_iter()
        .map(|(v, (sum, count))| (v, sum as f64 / count as f64))
        .collect();

    let weighted_sum = |data: &[f64]| -> f64 {
        let mut counts: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
        for &v in data {
            *counts.entry(OrderedFloat(v)).or_default() += 1;
        }
        counts
            .iter()
            .map(|(v, &count)| count as f64 * midrank[v])
            .sum()
    };

    (weighted_sum(sample_a.data()), weighted_sum(sample_b.data()))
}

/// The core of the rank-based tests: the smaller rank sum `r` and the order
/// `n_r` of the sample it belongs to.
///
/// When the two orders differ and both are under 20, the book's small-sample
/// working also ranks the pooled data in reverse and keeps whichever of the
/// four candidate sums is smallest; `skip_reversed` disables that fallback.
fn rank_sum_kernel(sample_a: &Sample, sample_b: &Sample, skip_reversed: bool) -> (f64, usize) {
    let n_a = sample_a.order();
    let n_b = sample_b.order();

    let (rank_a, rank_b) = rank_sums(sample_a, sample_b, false);
    let (mut r, mut n_r) = if rank_a < rank_b {
        (rank_a, n_a)
    } else {
        (rank_b, n_b)
    };

    if !skip_reversed && n_a != n_b && n_a < 20 && n_b < 20 {
        let (rev_a, rev_b) = rank_sums(sample_a, sample_b, true);
        if rev_a < r {
            r = rev_a;
            n_r = n_a;
        } else if rev_b < r {
            r = rev_b;
            n_r = n_b;
        }
    }

    debug!(rank_a, rank_b, r, n_r, "rank-sum kernel");
    (r, n_r)
}

/// Wilcoxon's sum of ranks test. Langley pp. 166-78.
///
/// Compares two unmatched random samples of measurements, such as samples
/// taken from two different sources. Returns a z-statistic; run it through
/// [`langley_core::math::z_to_prob`] or a table for a significance estimate.
pub fn sum_of_ranks(sample_a: &Sample, sample_b: &Sample) -> f64 {
    let (r, n_r) = rank_sum_kernel(sample_a, sample_b, false);
    let n_a = sample_a.order();
    let n_b = sample_b.order();

    // The denominator n_a*n_b*(n_a+n_b+1)/3 truncates to an integer; the
    // book's tabled reference values depend on the truncation.
    let denom = (n_a * n_b * (n_a + n_b + 1) / 3) as f64;

    ((n_r * (n_a + n_b + 1)) as f64 - 2.0 * r) / denom.sqrt()
}

/// Wilcoxon's signed ranks test. Langley pp. 179-89.
///
/// Compares two matched random samples of measurements: paired subjects, or
/// one group under two treatments, observers, or occasions. Pair
/// differences below `1e-6` in magnitude count as no change and are
/// dropped; at least 6 effective pairs must remain, else
/// [`Error::SampleTooSmall`].
///
/// The positive and negative difference magnitudes form two derived
/// arithmetic samples pushed through the rank-sum kernel (ascending ranks
/// only). If every retained difference has the same sign the opposite
/// sample is empty and construction fails with [`Error::InvalidData`].
pub fn signed_ranks(msample: &MatchedSample) -> Result<f64> {
    let mut positive = Vec::new();
    let mut negative = Vec::new();
    for (&a_i, &b_i) in msample.a().iter().zip(msample.b()) {
        let d = b_i - a_i;
        if d.abs() < NEGLIGIBLE_DIFF {
            continue;
        }
        if d > 0.0 {
            positive.push(d.abs());
        } else {
            negative.push(d.abs());
        }
    }

    let n = positive.len() + negative.len();
    if n < 6 {
        return Err(Error::SampleTooSmall {
            expected: 6,
            actual: n,
        });
    }

    let sample_pos = Sample::arithmetic(positive)?;
    let sample_neg = Sample::arithmetic(negative)?;
    let (r, _) = rank_sum_kernel(&sample_pos, &sample_neg, true);

    let n = n as f64;
    Ok((n * (n + 1.0) / 2.0 - 2.0 * r) / (n * (n + 1.0) * (2.0 * n + 1.0) / 6.0).sqrt())
}

/// Wilcoxon's stratified test. Langley pp. 190-8.
///
/// Compares two independent stratified samples with comparable strata, one
/// matched pair of measurement sequences per stratum. Rank sums are computed
/// per stratum (ascending only) and pooled across strata before the
/// z formula is applied.
pub fn stratified(strata: &[MatchedSample]) -> Result<f64> {
    if strata.is_empty() {
        return Err(Error::empty_input("stratified test"));
    }

    let mut rank_a = 0.0;
    let mut rank_b = 0.0;
    for stratum in strata {
        let sample_a = Sample::arithmetic(stratum.a().to_vec())?;
        let sample_b = Sample::arithmetic(stratum.b().to_vec())?;
        let (r_a, r_b) = rank_sums(&sample_a, &sample_b, false);
        rank_a += r_a;
        rank_b += r_b;
    }

    let r = rank_a.min(rank_b);
    debug!(rank_a, rank_b, r, "stratified rank totals");

    let numerator = strata
        .iter()
        .fold(-2.0 * r, |acc, m| acc + (m.order() * (2 * m.order() + 1)) as f64);
    let denominator: f64 = strata
        .iter()
        .map(|m| (m.order() * m.order() * (2 * m.order() + 1)) as f64)
        .sum();

    Ok(numerator / (denominator / 3.0).sqrt())
}
