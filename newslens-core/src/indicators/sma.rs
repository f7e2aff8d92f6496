//! Simple Moving Average.
//!
//! Rolling mean over a trailing window. First defined value at index
//! period-1; any NaN inside the window makes that window's output NaN.

/// Rolling mean of `values` over `period`. Output length equals input length.
pub fn sma(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if period == 0 || n < period {
        return result;
    }

    // Rolling sum with a NaN occupancy count: sum only tracks finite
    // entries, nan_in_window tells us whether the window is usable.
    let mut sum = 0.0;
    let mut nan_in_window = 0usize;

    for i in 0..n {
        let entering = values[i];
        if entering.is_nan() {
            nan_in_window += 1;
        } else {
            sum += entering;
        }

        if i >= period {
            let leaving = values[i - period];
            if leaving.is_nan() {
                nan_in_window -= 1;
            } else {
                sum -= leaving;
            }
        }

        if i + 1 >= period && nan_in_window == 0 {
            result[i] = sum / period as f64;
        }
    }

    result
}
