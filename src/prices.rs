//! Bundled sample price series for demonstration and testing.

/// Thirteen Amazon closing prices.
pub const AMAZON_PRICES: [f64; 13] = [
    1699.8, 1777.44, 2012.71, 2003.0, 1598.01, 1690.17, 1501.97, 1718.73, 1639.83, 1780.75,
    1926.52, 1775.07, 1893.63,
];

/// Thirteen eBay closing prices, time-aligned with [`AMAZON_PRICES`].
pub const EBAY_PRICES: [f64; 13] = [
    35.98, 33.2, 34.35, 32.77, 28.81, 29.62, 27.86, 33.39, 37.01, 37.0, 38.6, 35.93, 39.5,
];
