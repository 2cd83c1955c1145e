//! Chi-square tests over frequency counts.

use langley_core::{Error, Result};

/// Chi-square contingency test. Langley pp. 269-84.
///
/// Checks for evidence of association between two qualities cross-tabulated
/// in a row-major matrix of observed counts. Each expected cell frequency is
/// `rowTotal/grandTotal * colTotal/grandTotal * grandTotal`. Returns the
/// chi-square statistic; [`langley_core::math::pochisq`] converts it to a
/// significance estimate.
///
/// Fails with [`Error::InvalidData`] if the matrix is empty or ragged.
pub fn chi_square_cont(data: &[Vec<f64>]) -> Result<f64> {
    let n_cols = match data.first() {
        Some(row) if !row.is_empty() => row.len(),
        _ => return Err(Error::bad_matrix("contingency test")),
    };
    if data.iter().any(|row| row.len() != n_cols) {
        return Err(Error::bad_matrix("contingency test"));
    }

    let row_sums: Vec<f64> = data.iter().map(|row| row.iter().sum()).collect();
    let col_sums: Vec<f64> = (0..n_cols)
        .map(|j| data.iter().map(|row| row[j]).sum())
        .collect();
    let grand_total: f64 = row_sums.iter().sum();

    let mut chi2 = 0.0;
    for (row, &row_sum) in data.iter().zip(&row_sums) {
        for (&observed, &col_sum) in row.iter().zip(&col_sums) {
            let expected = (row_sum / grand_total) * (col_sum / grand_total) * grand_total;
            chi2 += (observed - expected) * (observed - expected) / expected;
        }
    }
    Ok(chi2)
}

/// Chi-square goodness-of-fit test. Langley pp. 269-84.
///
/// Compares an observed frequency sequence against an expected-basis
/// sequence. The basis is rescaled by `sum(observed) / sum(expected)` so the
/// two totals match before the usual `(observed - expected)^2 / expected`
/// sum is taken.
///
/// Fails with [`Error::MismatchedSample`] if the sequences differ in length.
pub fn chi_square_gof(expected: &[f64], observed: &[f64]) -> Result<f64> {
    if expected.len() != observed.len() {
        return Err(Error::MismatchedSample {
            left: expected.len(),
            right: observed.len(),
        });
    }

    let observed_sum: f64 = observed.iter().sum();
    let expected_sum: f64 = expected.iter().sum();
    let norm = observed_sum / expected_sum;

    Ok(expected
        .iter()
        .zip(observed)
        .map(|(&e, &o)| {
            let e = norm * e;
            (o - e) * (o - e) / e
        })
        .sum())
}
