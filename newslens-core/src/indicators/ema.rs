//! Exponential Moving Average.
//!
//! Recursive: EMA[t] = alpha * x[t] + (1 - alpha) * EMA[t-1], with
//! alpha = 2 / (period + 1). Seed: simple mean of the first `period` values
//! after any leading NaN run. The leading-NaN skip lets the same kernel seed
//! the MACD signal line, whose input starts with a warm-up window.
//!
//! A NaN after the seed taints the remainder of the series.

/// EMA of `values` over `period`. Output length equals input length.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if period == 0 {
        return result;
    }

    // Skip the leading NaN run (warm-up of an upstream indicator).
    let first = values.iter().position(|v| !v.is_nan()).unwrap_or(n);
    if n.saturating_sub(first) < period {
        return result;
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let seed_end = first + period;

    let mut sum = 0.0;
    for &v in &values[first..seed_end] {
        if v.is_nan() {
            // NaN inside the seed window: nothing usable follows.
            return result;
        }
        sum += v;
    }
    let mut prev = sum / period as f64;
    result[seed_end - 1] = prev;

    for i in seed_end..n {
        if values[i].is_nan() {
            return result;
        }
        prev = alpha * values[i] + (1.0 - alpha) * prev;
        result[i] = prev;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn ema_period_1_is_identity() {
        let result = ema(&[100.0, 200.0, 300.0], 1);
        assert_approx(result[0], 100.0, DEFAULT_EPSILON);
        assert_approx(result[1], 200.0, DEFAULT_EPSILON);
        assert_approx(result[2], 300.0, DEFAULT_EPSILON);
    }

    #[test]
    fn ema_3_known_values() {
        // alpha = 2/(3+1) = 0.5
        // Seed at index 2: SMA(10,11,12) = 11.0
        // EMA[3] = 0.5*13 + 0.5*11.0 = 12.0
        // EMA[4] = 0.5*14 + 0.5*12.0 = 13.0
        let result = ema(&[10.0, 11.0, 12.0, 13.0, 14.0], 3);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_approx(result[2], 11.0, DEFAULT_EPSILON);
        assert_approx(result[3], 12.0, DEFAULT_EPSILON);
        assert_approx(result[4], 13.0, DEFAULT_EPSILON);
    }

    #[test]
    fn ema_skips_leading_nan_run() {
        // Leading NaNs shift the seed window, they do not void the series.
        let values = [f64::NAN, f64::NAN, 10.0, 11.0, 12.0, 13.0];
        let result = ema(&values, 3);
        assert!(result[0].is_nan());
        assert!(result[3].is_nan());
        // Seed at index 4: SMA(10,11,12) = 11.0; EMA[5] = 0.5*13 + 0.5*11 = 12.0
        assert_approx(result[4], 11.0, DEFAULT_EPSILON);
        assert_approx(result[5], 12.0, DEFAULT_EPSILON);
    }

    #[test]
    fn ema_nan_after_seed_taints_rest() {
        let values = [10.0, 11.0, 12.0, f64::NAN, 14.0];
        let result = ema(&values, 3);
        assert_approx(result[2], 11.0, DEFAULT_EPSILON);
        assert!(result[3].is_nan());
        assert!(result[4].is_nan());
    }

    #[test]
    fn ema_too_few_values() {
        let result = ema(&[10.0, 11.0], 5);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn ema_constant_series_is_constant() {
        let result = ema(&[5.0; 40], 12);
        for (i, &v) in result.iter().enumerate() {
            if i >= 11 {
                assert_approx(v, 5.0, DEFAULT_EPSILON);
            } else {
                assert!(v.is_nan());
            }
        }
    }
}
