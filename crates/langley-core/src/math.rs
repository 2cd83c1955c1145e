//! Arithmetic primitives shared by every test procedure.
//!
//! This module carries the numeric core: means and standard deviations
//! (arithmetic and geometric), the standard-normal density used as the
//! textbook's significance estimate, mid-rank assignment, and the `pochisq`
//! series for the chi-square upper tail. Everything operates on plain `f64`
//! slices; the value objects in [`crate::sample`] build on these.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use ordered_float::OrderedFloat;

use crate::error::{Error, Result};

/// Overflow cutoff for the `pochisq` series: exponents below `-BIGX` are
/// treated as underflowing to zero, and accumulation switches to log space
/// once `x / 2` exceeds it.
pub const BIGX: f64 = 20.0;

/// `1 / sqrt(2 * pi)`, the normalizing factor of the standard normal density.
pub const INV_ROOT_2PI: f64 = 0.398_942_280_401_432_7;

/// Arithmetic mean of `data`.
///
/// Fails with [`Error::InvalidData`] on an empty slice.
pub fn mean_arith(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::empty_input("arithmetic mean"));
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample (Bessel-corrected) standard deviation of `data` about `mean`.
///
/// Returns exactly `0.0` for a single observation, where no variance is
/// definable. Fails with [`Error::InvalidData`] on an empty slice.
pub fn stddev_arith(data: &[f64], mean: f64) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::empty_input("arithmetic stddev"));
    }
    if data.len() == 1 {
        return Ok(0.0);
    }
    let ss: f64 = data.iter().map(|d| (d - mean) * (d - mean)).sum();
    Ok((ss / (data.len() - 1) as f64).sqrt())
}

/// Geometric mean of `data`: `exp(mean(ln x))`.
pub fn mean_geo(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::empty_input("geometric mean"));
    }
    let sum: f64 = data.iter().map(|d| d.ln()).sum();
    Ok((sum / data.len() as f64).exp())
}

/// Geometric standard deviation of `data` about the log-space mean `mean`
/// (i.e. `ln` of the geometric mean).
///
/// Fails with [`Error::InvalidData`] unless at least 2 observations are
/// supplied.
pub fn stddev_geo(data: &[f64], mean: f64) -> Result<f64> {
    if data.len() < 2 {
        return Err(Error::InvalidData(
            "geometric stddev requires at least 2 observations".to_string(),
        ));
    }
    let ss: f64 = data
        .iter()
        .map(|d| (d.ln() - mean) * (d.ln() - mean))
        .sum();
    Ok((ss / (data.len() - 1) as f64).sqrt().exp())
}

/// Standard normal density `phi(z) = exp(-z^2 / 2) / sqrt(2 pi)`.
///
/// The textbook's worked examples use this density value directly as an
/// approximate two-tail significance estimate. It is *not* the cumulative
/// distribution function; the exact formula is load-bearing for every tabled
/// expectation in the test suite and must not be "fixed" into a CDF.
pub fn z_to_prob(z: f64) -> f64 {
    INV_ROOT_2PI * (-z * z / 2.0).exp()
}

/// Map each element of `a` to its 1-based ascending rank, with tied values
/// receiving the mean of the ranks their group occupies (mid-rank
/// convention).
///
/// ```
/// use langley_core::math::array_to_rank;
///
/// assert_eq!(array_to_rank(&[8.0, 22.0, 18.5]), vec![1.0, 3.0, 2.0]);
/// assert_eq!(array_to_rank(&[1.0, 2.0, 2.0, 3.0]), vec![1.0, 2.5, 2.5, 4.0]);
/// ```
pub fn array_to_rank(a: &[f64]) -> Vec<f64> {
    let midrank = midranks(a.iter().copied());
    a.iter().map(|v| midrank[&OrderedFloat(*v)]).collect()
}

/// Mid-rank table for the given values: each distinct value mapped to the
/// mean of the 1-based ascending positions it occupies.
pub(crate) fn midranks(values: impl Iterator<Item = f64>) -> BTreeMap<OrderedFloat<f64>, f64> {
    let mut sorted: Vec<f64> = values.collect();
    sorted.sort_by(f64::total_cmp);

    let mut occupied: BTreeMap<OrderedFloat<f64>, (usize, usize)> = BTreeMap::new();
    for (i, &v) in sorted.iter().enumerate() {
        let entry = occupied.entry(OrderedFloat(v)).or_insert((0, 0));
        entry.0 += i + 1;
        entry.1 += 1;
    }

    occupied
        .into_iter()
        .map(|(v, (sum, count))| (v, sum as f64 / count as f64))
        .collect()
}

/// Convert a Spearman coefficient to a z-statistic: `sqrt(n - 1) * |1 - co_factor|`.
///
/// Computed in `f64` throughout, so a degenerate `n = 0` yields NaN rather
/// than panicking.
pub fn spearman_to_z(n: usize, co_factor: f64) -> f64 {
    (n as f64 - 1.0).sqrt() * (1.0 - co_factor).abs()
}

/// Cutoff-guarded exponential, as in the public-domain pochisq sources.
fn ex(x: f64) -> f64 {
    if x < -BIGX {
        0.0
    } else {
        x.exp()
    }
}

/// Upper-tail chi-square probability for statistic `x` with `df` degrees of
/// freedom, after the public-domain pochisq series.
///
/// Returns `1.0` immediately for `x <= 0` or `df < 1`. The series branches
/// on the parity of `df` and, once `x / 2` exceeds [`BIGX`], accumulates its
/// terms in log space to avoid overflow for large statistics. Odd degrees of
/// freedom inherit the density-based [`z_to_prob`] base term, so for odd `df`
/// the result tracks the textbook's tables rather than the exact incomplete
/// gamma tail.
pub fn pochisq(x: f64, df: u32) -> f64 {
    if x <= 0.0 || df < 1 {
        return 1.0;
    }

    let a = 0.5 * x;
    let even = df % 2 == 0;

    let y = if df > 1 { ex(-a) } else { 0.0 };
    let mut s = if even { y } else { 2.0 * z_to_prob(-x.sqrt()) };

    if df <= 2 {
        return s;
    }

    let last = 0.5 * (df as f64 - 1.0);
    let mut z = if even { 1.0 } else { 0.5 };

    if a > BIGX {
        // Log-space accumulation: e carries ln Gamma(z + 1) built up
        // incrementally, each term is exp(z ln a - a - e).
        let mut e = if even { 0.0 } else { PI.sqrt().ln() };
        let c = a.ln();
        while z <= last {
            e += z.ln();
            s += (c * z - a - e).exp();
            z += 1.0;
        }
        s
    } else {
        let mut e = if even { 1.0 } else { 1.0 / (a * PI).sqrt() };
        let mut c = 0.0;
        while z <= last {
            e *= a / z;
            c += e;
            z += 1.0;
        }
        c * y + s
    }
}
