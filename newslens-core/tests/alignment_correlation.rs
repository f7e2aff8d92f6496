//! Integration scenarios across aggregation, alignment, and correlation.

use chrono::NaiveDate;
use newslens_core::align::{align, MissingReturnPolicy};
use newslens_core::domain::{DailySentiment, PriceBar, ReturnPoint, ReturnSeries};
use newslens_core::indicators::IndicatorSeries;
use newslens_core::returns::daily_returns;
use newslens_core::stats::correlate;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn bars_from_closes(closes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            PriceBar {
                date: d("2024-01-01") + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000,
            }
        })
        .collect()
}

/// Two sentiment days joined against three return days: exactly the two
/// shared dates survive, and two points are always perfectly correlated
/// (here both series fall together, so r = +1).
#[test]
fn two_day_overlap_scenario() {
    let sentiment: DailySentiment = [
        (d("2024-01-01"), "AAPL".to_string(), 0.5),
        (d("2024-01-02"), "AAPL".to_string(), -0.2),
    ]
    .into_iter()
    .collect();

    let returns = ReturnSeries {
        points: vec![
            ReturnPoint {
                date: d("2024-01-01"),
                ret: 0.01,
            },
            ReturnPoint {
                date: d("2024-01-02"),
                ret: 0.0,
            },
            ReturnPoint {
                date: d("2024-01-03"),
                ret: -0.01,
            },
        ],
    };

    let sample = align(
        &sentiment.for_symbol("AAPL"),
        &returns,
        MissingReturnPolicy::ImputeZero,
    );

    assert_eq!(sample.len(), 2);
    assert_eq!(sample.rows[0].date, d("2024-01-01"));
    assert_eq!(sample.rows[1].date, d("2024-01-02"));

    let result = correlate(&sample.sentiment_values(), &sample.return_values());
    assert!(result.is_defined());
    assert!((result.coefficient.abs() - 1.0).abs() < 1e-12);
    assert!((result.coefficient - 1.0).abs() < 1e-12);
    assert_eq!(result.n, 2);
}

/// End-to-end through returns: bars → returns → align → correlate.
#[test]
fn bars_to_correlation() {
    let bars = bars_from_closes(&[100.0, 101.0, 100.0, 102.0, 101.0]);
    let returns = daily_returns(&bars);

    // Sentiment tracking the sign of each day's move exactly.
    let sentiment: DailySentiment = bars
        .iter()
        .zip(returns.points.iter())
        .skip(1)
        .map(|(bar, point)| {
            let score = if point.ret > 0.0 { 0.8 } else { -0.8 };
            (bar.date, "AAPL".to_string(), score)
        })
        .collect();

    let sample = align(
        &sentiment.for_symbol("AAPL"),
        &returns,
        MissingReturnPolicy::ImputeZero,
    );
    assert_eq!(sample.len(), 4);

    let result = correlate(&sample.sentiment_values(), &sample.return_values());
    assert!(result.is_defined());
    assert!(
        result.coefficient > 0.9,
        "sentiment tracked returns, got r={}",
        result.coefficient
    );
}

/// An empty market-data response means no correlation is computable —
/// an undefined result, not a failure.
#[test]
fn no_market_data_is_undefined_not_fatal() {
    let sentiment: DailySentiment = [(d("2024-01-01"), "AAPL".to_string(), 0.5)]
        .into_iter()
        .collect();
    let sample = align(
        &sentiment.for_symbol("AAPL"),
        &ReturnSeries::default(),
        MissingReturnPolicy::ImputeZero,
    );
    assert!(sample.is_empty());

    let result = correlate(&sample.sentiment_values(), &sample.return_values());
    assert!(!result.is_defined());
}

/// Indicator warm-up stays NaN through the whole derived pipeline.
#[test]
fn indicator_warm_up_is_explicit() {
    let bars = bars_from_closes(&[100.0; 30]);
    let series = IndicatorSeries::compute(&bars);
    for i in 0..19 {
        assert!(series.ma20[i].is_nan(), "warm-up leaked a value at {i}");
    }
    assert!((series.ma20[19] - 100.0).abs() < 1e-12);
    // 30 bars is inside the MA50 warm-up entirely.
    assert!(series.ma50.iter().all(|v| v.is_nan()));
}
