//! Location tests against a known population: zM and Student's t.

use langley_core::{Error, Population, Result, Sample};

/// The z test for measurements (zM). Langley pp. 152-9.
///
/// Compares a random sample of one or more measurements with a large parent
/// group whose mean and standard deviation are known. The returned
/// z-statistic can be turned into an approximate significance with
/// [`langley_core::math::z_to_prob`] or a table.
///
/// Fails with [`Error::InvalidPopulation`] if the population parameters are
/// unknown, and with [`Error::InvalidData`] if the population stddev is not
/// positive (the statistic would divide by it).
pub fn z_m(population: &Population, sample: &Sample) -> Result<f64> {
    let m_p = population.mean()?;
    let s_p = population.stddev()?;
    if s_p <= 0.0 {
        return Err(Error::InvalidData(
            "zM requires a positive population stddev".to_string(),
        ));
    }

    let n = sample.order() as f64;
    Ok(n.sqrt() * (m_p - sample.mean()).abs() / s_p)
}

/// Student's t test (due to Gosset). Langley pp. 160-5.
///
/// A modified zM for when the population stddev is unknown: the sample's own
/// stddev stands in for it. The sample must be of order 3 or more for a
/// meaningful result, else [`Error::SampleTooSmall`]. Interpreting the t
/// value needs a table; only the population *mean* is consulted here.
pub fn students_t(population: &Population, sample: &Sample) -> Result<f64> {
    if sample.order() < 3 {
        return Err(Error::SampleTooSmall {
            expected: 3,
            actual: sample.order(),
        });
    }

    let n = sample.order() as f64;
    Ok(n.sqrt() * (population.mean()? - sample.mean()).abs() / sample.stddev())
}
