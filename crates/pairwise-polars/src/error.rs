//! Error types for pairwise-polars

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error(transparent)]
    Core(#[from] pairwise_core::Error),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Type mismatch for column '{column}': expected {expected}, got {got}")]
    TypeMismatch {
        column: String,
        expected: String,
        got: String,
    },
}

impl Error {
    /// Shorthand for a fail-fast configuration error.
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Core(pairwise_core::Error::Config(msg.into()))
    }

    /// True when this is a configuration (validation) failure.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Core(pairwise_core::Error::Config(_)))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
