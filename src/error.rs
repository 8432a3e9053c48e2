//! Error types for statistics operations.

use thiserror::Error;

/// An error raised when a mathematical precondition is violated.
#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("dataset is empty")]
    EmptyDataset,

    #[error("paired datasets differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("start price is zero")]
    ZeroStartPrice,

    #[error("price ratio {ratio} is not strictly positive")]
    NonPositiveRatio { ratio: f64 },

    #[error("series has zero variance")]
    ZeroVariance,
}
