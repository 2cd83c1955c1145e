//! Rank tests over three or more samples: Kruskal-Wallis and Friedman.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use langley_core::math::array_to_rank;
use langley_core::{Error, Result, Sample};

/// Kruskal and Wallis' test. Langley pp. 212-21.
///
/// Compares 3 or more unmatched random samples of measurements by pooling
/// all values, ranking them with mid-rank ties, and comparing per-sample
/// rank sums. Returns a chi-square statistic, convertible to a significance
/// estimate via [`langley_core::math::pochisq`].
pub fn kruskal_wallis(samples: &[Sample]) -> Result<f64> {
    if samples.is_empty() {
        return Err(Error::empty_input("Kruskal-Wallis test"));
    }

    let big_n: usize = samples.iter().map(Sample::order).sum();

    let pooled: Vec<f64> = samples
        .iter()
        .flat_map(|s| s.data().iter().copied())
        .collect();
    let pooled_ranks = array_to_rank(&pooled);
    let rank_of: BTreeMap<OrderedFloat<f64>, f64> = pooled
        .iter()
        .zip(&pooled_ranks)
        .map(|(&v, &r)| (OrderedFloat(v), r))
        .collect();

    let ss: f64 = samples
        .iter()
        .map(|s| {
            let rank_sum: f64 = s.data().iter().map(|v| rank_of[&OrderedFloat(*v)]).sum();
            rank_sum * rank_sum / s.order() as f64
        })
        .sum();

    let big_n = big_n as f64;
    Ok(12.0 / (big_n * big_n + big_n) * ss - 3.0 * (big_n + 1.0))
}

/// Friedman's test. Langley pp. 222-9.
///
/// Compares 3 or more matched samples: the i-th values of all samples form
/// one block, ranked against each other with mid-rank ties, and the
/// per-sample rank totals are compared. All samples must share the same
/// order, else [`Error::MismatchedSample`]. Returns a chi-square statistic
/// for [`langley_core::math::pochisq`].
pub fn friedman(samples: &[Sample]) -> Result<f64> {
    if samples.is_empty() {
        return Err(Error::empty_input("Friedman test"));
    }

    let k = samples.len();
    let n = samples[0].order();
    for sample in &samples[1..] {
        if sample.order() != n {
            return Err(Error::MismatchedSample {
                left: n,
                right: sample.order(),
            });
        }
    }

    let mut totals = vec![0.0; k];
    let mut block = vec![0.0; k];
    for i in 0..n {
        for (j, sample) in samples.iter().enumerate() {
            block[j] = sample.data()[i];
        }
        for (total, rank) in totals.iter_mut().zip(array_to_rank(&block)) {
            *total += rank;
        }
    }

    let r: f64 = totals.iter().map(|t| t * t).sum();
    let (n, k) = (n as f64, k as f64);
    Ok(12.0 * r / (n * k * (k + 1.0)) - 3.0 * n * (k + 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn samples(data: &[&[f64]]) -> Vec<Sample> {
        data.iter()
            .map(|d| Sample::arithmetic(d.to_vec()).unwrap())
            .collect()
    }

    #[test]
    fn test_kruskal_wallis_bottlecaps() {
        let groups = samples(&[
            &[340.0, 345.0, 330.0, 342.0, 338.0],
            &[339.0, 333.0, 344.0],
            &[347.0, 343.0, 349.0, 355.0],
        ]);
        assert_abs_diff_eq!(kruskal_wallis(&groups).unwrap(), 5.66, epsilon = 0.01);
    }

    #[test]
    fn test_kruskal_wallis_singers() {
        let groups = samples(&[
            &[36.0, 22.0, 19.0, 16.0],
            &[39.0, 14.0, 20.0, 18.0],
            &[21.0, 32.0, 28.0, 22.0],
        ]);
        assert_abs_diff_eq!(kruskal_wallis(&groups).unwrap(), 1.3, epsilon = 0.1);
    }

    #[test]
    fn test_kruskal_wallis_empty_input() {
        assert!(matches!(kruskal_wallis(&[]), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_friedman_golf_players() {
        let rounds = samples(&[
            &[80.0, 80.0, 85.0, 90.0, 85.0, 81.0],
            &[77.0, 81.0, 82.0, 86.0, 80.0, 82.0],
            &[81.0, 83.0, 84.0, 85.0, 86.0, 82.0],
            &[82.0, 85.0, 87.0, 87.0, 81.0, 79.0],
        ]);
        assert_abs_diff_eq!(friedman(&rounds).unwrap(), 3.15, epsilon = 0.01);
    }

    #[test]
    fn test_friedman_golf_times() {
        let times = samples(&[
            &[80.0, 77.0, 81.0, 82.0],
            &[80.0, 81.0, 83.0, 85.0],
            &[85.0, 82.0, 84.0, 87.0],
            &[90.0, 86.0, 85.0, 87.0],
            &[85.0, 80.0, 86.0, 81.0],
            &[81.0, 82.0, 82.0, 79.0],
        ]);
        assert_abs_diff_eq!(friedman(&times).unwrap(), 11.96, epsilon = 0.01);
    }

    #[test]
    fn test_friedman_tied_blocks() {
        // The 1.5-point block exercises mid-rank ties within a block.
        let rolls = samples(&[
            &[3.0, 2.0, 2.0, 3.0, 3.0, 2.0, 3.0, 1.0],
            &[2.0, 3.0, 3.0, 1.0, 1.5, 3.0, 1.0, 3.0],
            &[1.0, 1.0, 1.0, 2.0, 1.5, 1.0, 2.0, 2.0],
        ]);
        assert_abs_diff_eq!(friedman(&rolls).unwrap(), 3.94, epsilon = 0.01);
    }

    #[test]
    fn test_friedman_mismatched_orders() {
        let bad = samples(&[&[1.0, 2.0, 3.0], &[4.0, 5.0], &[6.0, 7.0, 8.0]]);
        assert_eq!(
            friedman(&bad),
            Err(Error::MismatchedSample { left: 3, right: 2 })
        );
    }
}
