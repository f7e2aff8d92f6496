//! Technical indicator engine.
//!
//! All kernels operate on closing prices only and are precomputed in one
//! pass per symbol. Warm-up values (fewer than `period` bars of history) are
//! NaN, never zero — downstream correlation filters on defined values and a
//! silent zero would skew it.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use ema::ema;
pub use macd::{macd, MacdOutput};
pub use rsi::rsi;
pub use sma::sma;

use crate::domain::PriceBar;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Standard periods matching the analysis contract.
pub const MA_SHORT: usize = 20;
pub const MA_LONG: usize = 50;
pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;

/// Named indicator columns of an [`IndicatorSeries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorColumn {
    Ma20,
    Ma50,
    Rsi14,
    Macd,
    MacdSignal,
}

impl IndicatorColumn {
    /// Columns in report order.
    pub const ALL: [IndicatorColumn; 5] = [
        IndicatorColumn::Ma20,
        IndicatorColumn::Ma50,
        IndicatorColumn::Rsi14,
        IndicatorColumn::Macd,
        IndicatorColumn::MacdSignal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IndicatorColumn::Ma20 => "ma20",
            IndicatorColumn::Ma50 => "ma50",
            IndicatorColumn::Rsi14 => "rsi14",
            IndicatorColumn::Macd => "macd",
            IndicatorColumn::MacdSignal => "macd_signal",
        }
    }
}

/// Date-aligned indicator columns for one symbol.
///
/// Every column has the same length as `dates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSeries {
    pub dates: Vec<NaiveDate>,
    pub ma20: Vec<f64>,
    pub ma50: Vec<f64>,
    pub rsi14: Vec<f64>,
    pub macd: Vec<f64>,
    pub macd_signal: Vec<f64>,
}

impl IndicatorSeries {
    /// Compute all columns from an ordered bar sequence.
    pub fn compute(bars: &[PriceBar]) -> Self {
        let dates: Vec<NaiveDate> = bars.iter().map(|b| b.date).collect();
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

        let MacdOutput { macd, signal } = macd(&closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL);

        Self {
            dates,
            ma20: sma(&closes, MA_SHORT),
            ma50: sma(&closes, MA_LONG),
            rsi14: rsi(&closes, RSI_PERIOD),
            macd,
            macd_signal: signal,
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn column(&self, column: IndicatorColumn) -> &[f64] {
        match column {
            IndicatorColumn::Ma20 => &self.ma20,
            IndicatorColumn::Ma50 => &self.ma50,
            IndicatorColumn::Rsi14 => &self.rsi14,
            IndicatorColumn::Macd => &self.macd,
            IndicatorColumn::MacdSignal => &self.macd_signal,
        }
    }
}

/// Create synthetic bars from close prices for testing.
///
/// Generates plausible OHLV: open = prev_close (or close for the first bar),
/// high = max(open,close) + 1.0, low = min(open,close) - 1.0, volume = 1000.
#[cfg(test)]
pub fn make_bars(closes: &[f64]) -> Vec<PriceBar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            PriceBar {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000,
            }
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_columns_share_length() {
        let bars = make_bars(&[100.0; 60]);
        let series = IndicatorSeries::compute(&bars);
        assert_eq!(series.len(), 60);
        for column in IndicatorColumn::ALL {
            assert_eq!(series.column(column).len(), 60, "{}", column.name());
        }
    }

    #[test]
    fn constant_series_ma_equals_constant() {
        let bars = make_bars(&[42.0; 60]);
        let series = IndicatorSeries::compute(&bars);
        for i in 0..60 {
            if i >= MA_SHORT - 1 {
                assert_approx(series.ma20[i], 42.0, DEFAULT_EPSILON);
            } else {
                assert!(series.ma20[i].is_nan());
            }
            if i >= MA_LONG - 1 {
                assert_approx(series.ma50[i], 42.0, DEFAULT_EPSILON);
            }
        }
    }

    #[test]
    fn empty_bars_yield_empty_series() {
        let series = IndicatorSeries::compute(&[]);
        assert!(series.is_empty());
        assert!(series.ma20.is_empty());
    }

    #[test]
    fn column_names_match_report_order() {
        let names: Vec<&str> = IndicatorColumn::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["ma20", "ma50", "rsi14", "macd", "macd_signal"]);
    }
}
