//! Daily return derivation.
//!
//! return[i] = (close[i] - close[i-1]) / close[i-1]. The first bar has no
//! prior close, so its return is NaN — explicitly undefined, not zero.

use crate::domain::{PriceBar, ReturnPoint, ReturnSeries};

/// Derive the daily return series from an ordered bar sequence.
///
/// NaN closes (void bars) propagate NaN into every return they touch.
/// A zero prior close also yields NaN; division by it is meaningless.
pub fn daily_returns(bars: &[PriceBar]) -> ReturnSeries {
    let points = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let ret = if i == 0 {
                f64::NAN
            } else {
                let prev = bars[i - 1].close;
                let curr = bar.close;
                if prev.is_nan() || curr.is_nan() || prev == 0.0 {
                    f64::NAN
                } else {
                    (curr - prev) / prev
                }
            };
            ReturnPoint {
                date: bar.date,
                ret,
            }
        })
        .collect();

    ReturnSeries { points }
}
