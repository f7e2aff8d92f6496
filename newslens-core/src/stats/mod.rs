//! Correlation statistics.

pub mod matrix;
pub mod pearson;
pub mod tdist;

pub use matrix::{cross_correlate, CorrelationMatrix, CrossAlignment, DatedSeries};
pub use pearson::{correlate, pearson, CorrelationResult};
pub use tdist::{ln_gamma, regularized_incomplete_beta, t_cdf, two_sided_p};

/// JSON writes non-finite floats as null; read those back as NaN so a
/// persisted undefined statistic survives a round trip.
pub(crate) mod nullable {
    use serde::{Deserialize, Deserializer};

    pub fn f64_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }

    pub fn matrix_or_nan<'de, D>(deserializer: D) -> Result<Vec<Vec<f64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<Option<f64>>>::deserialize(deserializer)?;
        Ok(rows
            .into_iter()
            .map(|row| row.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
            .collect())
    }
}
