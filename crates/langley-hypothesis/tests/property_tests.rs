//! Property-based tests for the rank machinery and the chi-square tail
//! series, across randomly generated inputs.

use proptest::prelude::*;

use langley_core::math::{array_to_rank, mean_arith, pochisq, spearman_to_z, stddev_arith, z_to_prob};
use langley_core::{MatchedSample, Sample};
use langley_hypothesis::{spearman_correlation, sum_of_ranks};

proptest! {
    // Sample stddev is non-negative, and zero exactly for constant data
    #[test]
    fn prop_stddev_non_negative(data in prop::collection::vec(-1e6f64..1e6, 1..50)) {
        let mean = mean_arith(&data).unwrap();
        let stddev = stddev_arith(&data, mean).unwrap();
        prop_assert!(stddev >= 0.0);

        let all_equal = data.iter().all(|&d| d == data[0]);
        if data.len() == 1 || all_equal {
            prop_assert!(stddev.abs() < 1e-6);
        }
    }

    // Mid-rank averaging conserves total rank mass: ranks always sum to
    // n(n+1)/2, ties or not
    #[test]
    fn prop_rank_mass_conserved(data in prop::collection::vec(-100i32..100, 1..60)) {
        let data: Vec<f64> = data.into_iter().map(f64::from).collect();
        let n = data.len() as f64;
        let total: f64 = array_to_rank(&data).iter().sum();
        prop_assert!((total - n * (n + 1.0) / 2.0).abs() < 1e-6);
    }

    // Ranks are a permutation-consistent mapping: every rank lies in
    // [1, n] and equal values get equal ranks
    #[test]
    fn prop_ranks_in_range(data in prop::collection::vec(-50i32..50, 1..40)) {
        let data: Vec<f64> = data.into_iter().map(f64::from).collect();
        let ranks = array_to_rank(&data);
        let n = data.len() as f64;
        for (i, &r_i) in ranks.iter().enumerate() {
            prop_assert!(r_i >= 1.0 && r_i <= n);
            for (j, &r_j) in ranks.iter().enumerate() {
                if data[i] == data[j] {
                    prop_assert!((r_i - r_j).abs() < 1e-12, "tie at {i},{j} got different ranks");
                }
            }
        }
    }

    // pochisq is 1 for non-positive statistics and, for even df, monotone
    // non-increasing in x and bounded by 1. Odd df > 2 inherits the
    // density base term, which overshoots 1 near zero; that divergence is
    // pinned in the langley-core unit tests and excluded here.
    #[test]
    fn prop_pochisq_monotone(half_df in 1u32..20, x in 0.0f64..80.0, step in 0.01f64..10.0) {
        let df = 2 * half_df;
        prop_assert_eq!(pochisq(-x, df), 1.0);
        let lo = pochisq(x, df);
        let hi = pochisq(x + step, df);
        prop_assert!(
            hi <= lo + 1e-12,
            "pochisq rose from {} to {} at x={}, df={}", lo, hi, x + step, df
        );
        prop_assert!((0.0..=1.0 + 1e-12).contains(&lo));
    }

    // The rank-sum z-statistic is invariant under any shared monotone
    // shift of both samples
    #[test]
    fn prop_sum_of_ranks_shift_invariant(
        a in prop::collection::vec(-100i32..100, 2..15),
        b in prop::collection::vec(-100i32..100, 2..15),
        shift in -1000i32..1000,
    ) {
        let to_sample = |d: &[i32], off: i32| {
            Sample::arithmetic(d.iter().map(|&v| f64::from(v + off)).collect()).unwrap()
        };
        let z = sum_of_ranks(&to_sample(&a, 0), &to_sample(&b, 0));
        let z_shifted = sum_of_ranks(&to_sample(&a, shift), &to_sample(&b, shift));
        prop_assert!((z - z_shifted).abs() < 1e-9);
    }

    // Spearman -> z -> significance stays finite and well-behaved on
    // tie-heavy inputs (values drawn from a tiny alphabet)
    #[test]
    fn prop_spearman_tie_heavy_continuity(
        a in prop::collection::vec(0i32..4, 5..30),
        b in prop::collection::vec(0i32..4, 5..30),
    ) {
        let n = a.len().min(b.len());
        let a: Vec<f64> = a[..n].iter().map(|&v| f64::from(v)).collect();
        let b: Vec<f64> = b[..n].iter().map(|&v| f64::from(v)).collect();
        let m = MatchedSample::new(a, b).unwrap();
        let co_factor = spearman_correlation(&m).unwrap();
        prop_assert!(co_factor.is_finite());
        let p = z_to_prob(spearman_to_z(n, co_factor));
        prop_assert!((0.0..=0.4).contains(&p), "density estimate out of range: {}", p);
    }
}
