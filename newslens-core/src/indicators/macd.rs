//! Moving Average Convergence Divergence.
//!
//! MACD = EMA(fast) - EMA(slow); signal = EMA(signal_period) of the MACD
//! line. Both EMAs are seeded with the simple mean of their first `period`
//! inputs (standard convention), so the MACD line is defined from index
//! slow-1 and the signal line from index slow-1 + signal_period-1.

use super::ema::ema;

/// MACD line and its signal line, both the length of the input.
#[derive(Debug, Clone)]
pub struct MacdOutput {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
}

/// Compute MACD over `values` with the given fast/slow/signal periods.
pub fn macd(values: &[f64], fast: usize, slow: usize, signal_period: usize) -> MacdOutput {
    let n = values.len();
    let fast_ema = ema(values, fast);
    let slow_ema = ema(values, slow);

    let mut line = vec![f64::NAN; n];
    for i in 0..n {
        if !fast_ema[i].is_nan() && !slow_ema[i].is_nan() {
            line[i] = fast_ema[i] - slow_ema[i];
        }
    }

    // The signal EMA skips the MACD warm-up (leading NaN run).
    let signal = ema(&line, signal_period);

    MacdOutput { macd: line, signal }
}
