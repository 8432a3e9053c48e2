//! Statistics helpers for analyzing price series.
//!
//! Provides log returns, population variance, standard deviation, and
//! Pearson correlation over in-memory `f64` slices, plus two bundled
//! sample price series for experimentation.

pub mod error;
pub mod prices;
pub mod stats;
pub mod summary;

pub use error::DomainError;
