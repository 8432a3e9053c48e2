//! Descriptive summaries of a price series and their presentation.
//!
//! Supports pretty-printing via tracing and JSON serialization.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::DomainError;
use crate::stats::{mean, stddev, variance};

/// Descriptive statistics for a single price series.
#[derive(Debug, Serialize)]
pub struct SeriesSummary {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
}

impl SeriesSummary {
    /// Builds a summary from a series of prices.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyDataset`] for empty input.
    pub fn from_prices(prices: &[f64]) -> Result<Self, DomainError> {
        let mean = mean(prices)?;
        let variance = variance(prices)?;
        let stddev = stddev(prices)?;
        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(SeriesSummary {
            count: prices.len(),
            mean,
            variance,
            stddev,
            min,
            max,
        })
    }
}

/// Logs a series summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &SeriesSummary) {
    debug!("{:#?}", summary);
}

/// Logs a series summary as pretty-printed JSON.
pub fn print_json(summary: &SeriesSummary) -> Result<(), serde_json::Error> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
