//! Pearson product-moment correlation with two-sided significance.

use super::tdist::two_sided_p;
use serde::{Deserialize, Serialize};

/// Correlation coefficient and significance for one aligned sample.
///
/// Undefined results carry NaN in both fields; they serialize to JSON null
/// and print as "NaN" — missing is always marked, never substituted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Pearson r in [-1, 1], or NaN when undefined.
    #[serde(deserialize_with = "super::nullable::f64_or_nan")]
    pub coefficient: f64,
    /// Two-sided p-value in [0, 1], or NaN when undefined.
    #[serde(deserialize_with = "super::nullable::f64_or_nan")]
    pub p_value: f64,
    /// Number of sample pairs the statistics were computed over.
    pub n: usize,
}

impl CorrelationResult {
    /// Undefined result: fewer than 2 pairs or zero variance.
    pub fn undefined(n: usize) -> Self {
        Self {
            coefficient: f64::NAN,
            p_value: f64::NAN,
            n,
        }
    }

    pub fn is_defined(&self) -> bool {
        !self.coefficient.is_nan()
    }
}

/// Pearson r of two equal-length series. NaN when undefined (n < 2, length
/// mismatch, zero variance, or NaN in either input).
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return f64::NAN;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        // Degenerate: a constant series correlates with nothing.
        return f64::NAN;
    }

    (cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0)
}

/// Pearson r plus its two-sided p-value under H0: no correlation, using the
/// t approximation with n-2 degrees of freedom.
///
/// Degenerate inputs produce an undefined result, never a panic. With
/// exactly two pairs the coefficient is ±1 by construction and the test has
/// zero degrees of freedom; p is reported as 1.0 (no evidence).
pub fn correlate(x: &[f64], y: &[f64]) -> CorrelationResult {
    let n = x.len();
    let r = pearson(x, y);
    if r.is_nan() {
        return CorrelationResult::undefined(n.min(y.len()));
    }

    if n == 2 {
        return CorrelationResult {
            coefficient: r,
            p_value: 1.0,
            n,
        };
    }

    let df = (n - 2) as f64;
    let denom = 1.0 - r * r;
    let p_value = if denom <= f64::EPSILON {
        // Perfectly (anti-)correlated: the t statistic diverges.
        0.0
    } else {
        two_sided_p(r * (df / denom).sqrt(), df)
    };

    CorrelationResult {
        coefficient: r,
        p_value,
        n,
    }
}
