//! Error types for pairwise statistical comparisons
//!
//! Provides a unified error type for all pairwise-stats crates.

use thiserror::Error;

/// Core error type for pairwise statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration (unknown enum value, invalid factor combination,
    /// no resolvable pairs). Raised before any statistic is computed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} observations, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// IO error (result-table export)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper constructors for common error patterns

impl Error {
    /// Unknown value for a string-typed configuration enum
    pub fn unknown_variant(field: &str, value: &str, expected: &str) -> Self {
        Self::Config(format!(
            "unknown {field} '{value}', expected one of: {expected}"
        ))
    }

    /// A grouping column resolved to fewer than two levels
    pub fn single_level(column: &str) -> Self {
        Self::Config(format!(
            "grouping column '{column}' must have at least two levels"
        ))
    }

    /// A column selection left nothing to pair
    pub fn no_valid_pairs() -> Self {
        Self::Config("column selection resolves to no valid pairs".to_string())
    }

    /// Too few observations after filtering
    pub fn too_few(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Config("alpha must be in (0, 1)".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: alpha must be in (0, 1)"
        );

        let err = Error::InsufficientData {
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 2 observations, got 1"
        );

        let err = Error::Computation("variance is zero".to_string());
        assert_eq!(err.to_string(), "Computation error: variance is zero");
    }

    #[test]
    fn test_helper_constructors() {
        let err = Error::unknown_variant("tail", "wrong", "two-sided, one-sided");
        assert!(err
            .to_string()
            .contains("unknown tail 'wrong', expected one of: two-sided, one-sided"));

        let err = Error::single_level("Group");
        assert!(err.to_string().contains("'Group'"));

        match Error::too_few(2, 0) {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 0);
            }
            _ => panic!("wrong error type"),
        }
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => assert!(err.to_string().contains("file not found")),
            _ => panic!("wrong error type"),
        }
    }
}
