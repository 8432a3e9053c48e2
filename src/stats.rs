//! Scalar statistics over in-memory price series.
//!
//! Every function is a pure computation over its arguments; violated
//! preconditions are surfaced as [`DomainError`] rather than panics.

use crate::error::DomainError;

/// Formats a fraction as a percentage with one decimal digit.
///
/// `0.257` becomes `"25.7%"`. Rounding is pinned to Rust's `{:.1}` float
/// formatting, which rounds the exact binary value half to even.
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Computes the log return between two prices: `ln(end_price / start_price)`.
///
/// # Errors
///
/// Returns [`DomainError::ZeroStartPrice`] when `start_price` is zero, and
/// [`DomainError::NonPositiveRatio`] when `end_price / start_price` is not
/// strictly positive.
pub fn log_return(start_price: f64, end_price: f64) -> Result<f64, DomainError> {
    if start_price == 0.0 {
        return Err(DomainError::ZeroStartPrice);
    }
    let ratio = end_price / start_price;
    if ratio <= 0.0 {
        return Err(DomainError::NonPositiveRatio { ratio });
    }
    Ok(ratio.ln())
}

/// Computes the per-step log returns of consecutive prices.
///
/// Returns `prices.len() - 1` values, one per adjacent pair.
///
/// # Errors
///
/// Returns [`DomainError::EmptyDataset`] when fewer than two prices are
/// given; otherwise each step follows the [`log_return`] contract.
pub fn log_returns(prices: &[f64]) -> Result<Vec<f64>, DomainError> {
    if prices.len() < 2 {
        return Err(DomainError::EmptyDataset);
    }
    prices.windows(2).map(|w| log_return(w[0], w[1])).collect()
}

/// Computes the arithmetic mean of a series.
///
/// # Errors
///
/// Returns [`DomainError::EmptyDataset`] for empty input.
pub fn mean(dataset: &[f64]) -> Result<f64, DomainError> {
    if dataset.is_empty() {
        return Err(DomainError::EmptyDataset);
    }
    Ok(dataset.iter().sum::<f64>() / dataset.len() as f64)
}

/// Computes the population variance (divisor `n`, not `n - 1`).
///
/// Uses the two-pass algorithm: mean first, then the mean of squared
/// deviations.
///
/// # Errors
///
/// Returns [`DomainError::EmptyDataset`] for empty input.
pub fn variance(dataset: &[f64]) -> Result<f64, DomainError> {
    let m = mean(dataset)?;
    let sum_sq = dataset.iter().map(|v| (v - m).powi(2)).sum::<f64>();
    Ok(sum_sq / dataset.len() as f64)
}

/// Computes the population standard deviation, `sqrt(variance(dataset))`.
///
/// # Errors
///
/// Returns [`DomainError::EmptyDataset`] for empty input.
pub fn stddev(dataset: &[f64]) -> Result<f64, DomainError> {
    Ok(variance(dataset)?.sqrt())
}

/// Computes the Pearson correlation coefficient of two paired series using
/// the raw-score formula:
///
/// ```text
/// r = (n·Σxy − Σx·Σy) / sqrt((n·Σx² − (Σx)²)·(n·Σy² − (Σy)²))
/// ```
///
/// The result is mathematically in [-1, 1]; rounding may push it marginally
/// outside for near-degenerate input, and it is not clamped here.
///
/// # Errors
///
/// Returns [`DomainError::LengthMismatch`] for series of unequal length,
/// [`DomainError::EmptyDataset`] for empty input, and
/// [`DomainError::ZeroVariance`] when either series is constant.
pub fn correlation(set_x: &[f64], set_y: &[f64]) -> Result<f64, DomainError> {
    if set_x.len() != set_y.len() {
        return Err(DomainError::LengthMismatch {
            left: set_x.len(),
            right: set_y.len(),
        });
    }
    if set_x.is_empty() {
        return Err(DomainError::EmptyDataset);
    }

    let n = set_x.len() as f64;
    let sum_x: f64 = set_x.iter().sum();
    let sum_y: f64 = set_y.iter().sum();
    let sum_x2: f64 = set_x.iter().map(|x| x * x).sum();
    let sum_y2: f64 = set_y.iter().map(|y| y * y).sum();
    let sum_xy: f64 = set_x.iter().zip(set_y).map(|(x, y)| x * y).sum();

    let spread_x = n * sum_x2 - sum_x * sum_x;
    let spread_y = n * sum_y2 - sum_y * sum_y;

    // <= catches tiny negatives from rounding on constant series
    if spread_x <= 0.0 || spread_y <= 0.0 {
        return Err(DomainError::ZeroVariance);
    }

    Ok((n * sum_xy - sum_x * sum_y) / (spread_x * spread_y).sqrt())
}
