//! Error types shared by the langley-stats crates.

use thiserror::Error;

/// Unified error type for all langley-stats operations.
///
/// Every failure is a validation failure raised at the precondition check
/// nearest the violation; nothing is retried and no partial result is
/// returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Empty or otherwise unusable input where a non-empty numeric
    /// sequence is required
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Mean or standard deviation requested from a population whose
    /// parameters are unknown
    #[error("population parameters are unknown")]
    InvalidPopulation,

    /// Sample order below the minimum for a meaningful statistic
    #[error("sample too small: need at least {expected} observations, got {actual}")]
    SampleTooSmall { expected: usize, actual: usize },

    /// A matched sample's two sequences differ in length
    #[error("matched sample length mismatch: {left} vs {right}")]
    MismatchedSample { left: usize, right: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper constructors for common validation failures

impl Error {
    /// Create an error for an empty input sequence
    pub fn empty_input(context: &str) -> Self {
        Self::InvalidData(format!("{context} requires a non-empty sequence"))
    }

    /// Create an error for a ragged or degenerate matrix
    pub fn bad_matrix(context: &str) -> Self {
        Self::InvalidData(format!("{context} requires a rectangular, non-empty matrix"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidData("mean requires a non-empty sequence".to_string());
        assert_eq!(
            err.to_string(),
            "invalid data: mean requires a non-empty sequence"
        );

        let err = Error::InvalidPopulation;
        assert_eq!(err.to_string(), "population parameters are unknown");

        let err = Error::SampleTooSmall {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "sample too small: need at least 3 observations, got 2"
        );

        let err = Error::MismatchedSample { left: 4, right: 5 };
        assert_eq!(err.to_string(), "matched sample length mismatch: 4 vs 5");
    }

    #[test]
    fn test_helper_constructors() {
        match Error::empty_input("arithmetic mean") {
            Error::InvalidData(msg) => assert!(msg.contains("arithmetic mean")),
            _ => panic!("wrong error kind"),
        }

        match Error::bad_matrix("contingency test") {
            Error::InvalidData(msg) => assert!(msg.contains("rectangular")),
            _ => panic!("wrong error kind"),
        }
    }
}
