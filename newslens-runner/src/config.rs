//! Serializable analysis configuration.

use chrono::NaiveDate;
use newslens_core::align::MissingReturnPolicy;
use newslens_core::indicators::IndicatorColumn;
use newslens_core::stats::CrossAlignment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Unique identifier for an analysis run (content-addressable hash).
pub type RunId = String;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config has no symbols")]
    NoSymbols,

    #[error("start date {start} is after end date {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },
}

/// Configuration for a single analysis run.
///
/// Captures everything needed to reproduce the run: the symbol universe,
/// the price date range, and the two behavioral policies the pipeline
/// exposes (missing-return handling and cross-matrix row alignment).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    /// Symbols to analyze.
    pub symbols: Vec<String>,

    /// Price history start date (inclusive).
    pub start_date: NaiveDate,

    /// Price history end date (inclusive).
    pub end_date: NaiveDate,

    /// How matched rows with undefined returns are handled.
    #[serde(default)]
    pub missing_return_policy: MissingReturnPolicy,

    /// How cross-symbol matrix rows are matched.
    #[serde(default)]
    pub cross_alignment: CrossAlignment,

    /// Indicator columns to build cross-symbol matrices for.
    #[serde(default = "default_matrix_columns")]
    pub matrix_columns: Vec<IndicatorColumn>,
}

fn default_matrix_columns() -> Vec<IndicatorColumn> {
    IndicatorColumn::ALL.to_vec()
}

impl AnalysisConfig {
    /// Load and validate a TOML config file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Parse and validate a TOML config string.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::NoSymbols);
        }
        if self.start_date > self.end_date {
            return Err(ConfigError::InvertedDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Deterministic hash id for this configuration.
    ///
    /// Two runs with identical configs share a RunId, which makes artifact
    /// directories comparable across invocations.
    pub fn run_id(&self) -> RunId {
        let json = serde_json::to_string(self).expect("AnalysisConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}
