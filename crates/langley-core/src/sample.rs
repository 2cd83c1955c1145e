//! Value objects wrapping raw measurement sequences.
//!
//! A [`Sample`] owns its data and computes mean and standard deviation once
//! at construction; nothing is recomputed or mutated afterwards. Matched
//! observations live in a [`MatchedSample`], and the parent group a sample is
//! compared against is a [`Population`].

use crate::error::{Error, Result};
use crate::math;

/// How a sample's data is distributed, which determines how its mean and
/// standard deviation are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionKind {
    /// Ordinary measurements; standard mean/stddev formulas.
    Arithmetic,
    /// Multiplicative data; mean and stddev are computed in log space.
    Geometric,
}

/// An immutable sample of measurements with eagerly computed statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    data: Vec<f64>,
    kind: DistributionKind,
    mean: f64,
    stddev: f64,
}

impl Sample {
    /// Build an arithmetically distributed sample.
    ///
    /// Fails with [`Error::InvalidData`] on empty input.
    pub fn arithmetic(data: Vec<f64>) -> Result<Self> {
        let mean = math::mean_arith(&data)?;
        let stddev = math::stddev_arith(&data, mean)?;
        Ok(Self {
            data,
            kind: DistributionKind::Arithmetic,
            mean,
            stddev,
        })
    }

    /// Build a geometrically distributed sample.
    ///
    /// The geometric stddev needs at least 2 observations, so construction
    /// fails with [`Error::InvalidData`] below that.
    pub fn geometric(data: Vec<f64>) -> Result<Self> {
        let mean = math::mean_geo(&data)?;
        let stddev = math::stddev_geo(&data, mean.ln())?;
        Ok(Self {
            data,
            kind: DistributionKind::Geometric,
            mean,
            stddev,
        })
    }

    /// The raw measurements.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn kind(&self) -> DistributionKind {
        self.kind
    }

    /// Number of measurements.
    pub fn order(&self) -> usize {
        self.data.len()
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stddev(&self) -> f64 {
        self.stddev
    }
}

/// A pair of equal-length sequences of paired observations, e.g.
/// before/after readings or two treatments applied to the same subjects.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedSample {
    a: Vec<f64>,
    b: Vec<f64>,
}

impl MatchedSample {
    /// Pair up two observation sequences.
    ///
    /// Fails with [`Error::MismatchedSample`] if the lengths differ.
    pub fn new(a: Vec<f64>, b: Vec<f64>) -> Result<Self> {
        if a.len() != b.len() {
            return Err(Error::MismatchedSample {
                left: a.len(),
                right: b.len(),
            });
        }
        Ok(Self { a, b })
    }

    /// The first observation sequence.
    pub fn a(&self) -> &[f64] {
        &self.a
    }

    /// The second observation sequence.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Common length of the two sequences.
    pub fn order(&self) -> usize {
        self.a.len()
    }
}

/// A parent group to compare samples against.
///
/// An unknown population exposes no parameters; an a-priori population
/// carries an externally supplied mean and standard deviation, fixed at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Population {
    Unknown,
    APriori { mean: f64, stddev: f64 },
}

impl Population {
    /// A population with known, externally supplied parameters.
    pub fn a_priori(mean: f64, stddev: f64) -> Self {
        Self::APriori { mean, stddev }
    }

    pub fn mean(&self) -> Result<f64> {
        match self {
            Self::Unknown => Err(Error::InvalidPopulation),
            Self::APriori { mean, .. } => Ok(*mean),
        }
    }

    pub fn stddev(&self) -> Result<f64> {
        match self {
            Self::Unknown => Err(Error::InvalidPopulation),
            Self::APriori { stddev, .. } => Ok(*stddev),
        }
    }
}
