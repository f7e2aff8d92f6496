//! Relative Strength Index.
//!
//! Wilder smoothing of average gains and average losses over close-to-close
//! changes. RSI = 100 - 100 / (1 + avg_gain / avg_loss). First defined value
//! at index `period` (needs `period` changes). Edge cases: avg_loss == 0 →
//! 100; avg_gain == 0 → 0; both zero (flat series) → 50.

/// Wilder RSI of `values` over `period`. Output length equals input length.
pub fn rsi(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if period == 0 || n < period + 1 {
        return result;
    }

    let mut changes = vec![f64::NAN; n];
    for i in 1..n {
        let (prev, curr) = (values[i - 1], values[i]);
        if !prev.is_nan() && !curr.is_nan() {
            changes[i] = curr - prev;
        }
    }

    // Seed: plain averages over the first `period` changes.
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for &ch in &changes[1..=period] {
        if ch.is_nan() {
            return result;
        }
        if ch > 0.0 {
            avg_gain += ch;
        } else {
            avg_loss -= ch;
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;

    result[period] = rs_to_rsi(avg_gain, avg_loss);

    // Wilder smoothing: alpha = 1/period.
    let alpha = 1.0 / period as f64;
    for i in (period + 1)..n {
        let ch = changes[i];
        if ch.is_nan() {
            // Broken change chain: the smoothed state is unusable from here on.
            return result;
        }
        let gain = if ch > 0.0 { ch } else { 0.0 };
        let loss = if ch < 0.0 { -ch } else { 0.0 };
        avg_gain = alpha * gain + (1.0 - alpha) * avg_gain;
        avg_loss = alpha * loss + (1.0 - alpha) * avg_loss;
        result[i] = rs_to_rsi(avg_gain, avg_loss);
    }

    result
}

fn rs_to_rsi(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0 // no movement at all
    } else if avg_loss == 0.0 {
        100.0
    } else if avg_gain == 0.0 {
        0.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::assert_approx;

    #[test]
    fn rsi_monotonic_gains_is_100() {
        // Strictly increasing prices: no losses anywhere → RSI pinned at 100.
        let values: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let result = rsi(&values, 14);
        for (i, &v) in result.iter().enumerate() {
            if i >= 14 {
                assert_approx(v, 100.0, 1e-9);
            } else {
                assert!(v.is_nan());
            }
        }
    }

    #[test]
    fn rsi_monotonic_losses_is_0() {
        let values: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
        let result = rsi(&values, 14);
        assert_approx(result[14], 0.0, 1e-9);
        assert_approx(result[29], 0.0, 1e-9);
    }

    #[test]
    fn rsi_flat_series_is_50() {
        let result = rsi(&[100.0; 20], 14);
        assert_approx(result[14], 50.0, 1e-9);
    }

    #[test]
    fn rsi_warm_up_is_nan() {
        let values: Vec<f64> = (0..20).map(|i| 100.0 + (i % 3) as f64).collect();
        let result = rsi(&values, 14);
        for i in 0..14 {
            assert!(result[i].is_nan(), "expected NaN at index {i}");
        }
        assert!(!result[14].is_nan());
    }

    #[test]
    fn rsi_stays_in_bounds() {
        let values = [
            100.0, 105.0, 98.0, 110.0, 95.0, 115.0, 90.0, 120.0, 85.0, 125.0,
        ];
        let result = rsi(&values, 3);
        for (i, &v) in result.iter().enumerate() {
            if !v.is_nan() {
                assert!((0.0..=100.0).contains(&v), "RSI out of bounds at {i}: {v}");
            }
        }
    }

    #[test]
    fn rsi_nan_in_seed_voids_series() {
        let mut values = vec![100.0, 101.0, 102.0, 103.0, 104.0];
        values[2] = f64::NAN;
        let result = rsi(&values, 3);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn rsi_too_few_values() {
        let result = rsi(&[100.0, 101.0], 14);
        assert!(result.iter().all(|v| v.is_nan()));
    }
}
