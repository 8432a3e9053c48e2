use anyhow::Result;
use price_stats::prices::{AMAZON_PRICES, EBAY_PRICES};
use price_stats::stats::{correlation, format_percentage, log_return, log_returns};
use price_stats::summary::{SeriesSummary, print_json};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("price_stats=debug")
        .try_init();
}

#[test]
fn test_bundled_series_correlation() {
    let r = correlation(&AMAZON_PRICES, &EBAY_PRICES).expect("Failed to correlate series");

    assert!((-1.0..=1.0).contains(&r));
    // Regression baseline for the bundled series
    assert!((r - 0.5304921683060496).abs() < 1e-12);
}

#[test]
fn test_bundled_series_full_report() -> Result<()> {
    init_tracing();

    for series in [&AMAZON_PRICES[..], &EBAY_PRICES[..]] {
        let summary = SeriesSummary::from_prices(series)?;
        print_json(&summary)?;

        assert_eq!(summary.count, 13);
        assert!(summary.stddev > 0.0);
        assert!(summary.min <= summary.mean && summary.mean <= summary.max);
    }

    Ok(())
}

#[test]
fn test_bundled_series_overall_return() -> Result<()> {
    let overall = log_return(AMAZON_PRICES[0], AMAZON_PRICES[12])?;
    let steps = log_returns(&AMAZON_PRICES)?;

    // Per-step log returns sum to the overall log return
    assert_eq!(steps.len(), 12);
    assert!((steps.iter().sum::<f64>() - overall).abs() < 1e-12);
    assert_eq!(format_percentage(overall), "10.8%");

    Ok(())
}
