//! Cross-symbol correlation matrices.
//!
//! For one indicator column, builds a symbol × symbol matrix of pairwise
//! Pearson coefficients over complete cases — rows where EVERY symbol has a
//! defined value. Two row-alignment modes exist because the symbols'
//! trading-day sets may differ (holidays, listing gaps):
//!
//! - `ByDate` (default): rows are matched on calendar date, the correct
//!   behavior when per-symbol series were fetched independently.
//! - `ByIndex`: rows are matched on raw positional index, kept only for
//!   strict output parity with legacy runs.

use super::pearson::pearson;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One symbol's indicator values with their date axis.
#[derive(Debug, Clone)]
pub struct DatedSeries {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

impl DatedSeries {
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Self {
        debug_assert_eq!(dates.len(), values.len());
        Self { dates, values }
    }
}

/// How to match rows across independently-fetched per-symbol series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossAlignment {
    #[default]
    ByDate,
    ByIndex,
}

/// Symmetric symbol × symbol Pearson matrix.
///
/// `values[i][j]` is the correlation between `symbols[i]` and `symbols[j]`;
/// NaN where undefined (no complete cases, or zero variance).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub symbols: Vec<String>,
    #[serde(deserialize_with = "super::nullable::matrix_or_nan")]
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.symbols.iter().position(|s| s == a)?;
        let j = self.symbols.iter().position(|s| s == b)?;
        Some(self.values[i][j])
    }
}

/// Build the pairwise correlation matrix for one indicator column.
///
/// Symbols come out in sorted order (BTreeMap input keeps this deterministic).
pub fn cross_correlate(
    series_by_symbol: &BTreeMap<String, DatedSeries>,
    alignment: CrossAlignment,
) -> CorrelationMatrix {
    let symbols: Vec<String> = series_by_symbol.keys().cloned().collect();
    let columns = match alignment {
        CrossAlignment::ByDate => complete_cases_by_date(series_by_symbol, &symbols),
        CrossAlignment::ByIndex => complete_cases_by_index(series_by_symbol, &symbols),
    };

    let k = symbols.len();
    let mut values = vec![vec![f64::NAN; k]; k];
    for i in 0..k {
        for j in i..k {
            let r = pearson(&columns[i], &columns[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix { symbols, values }
}

/// Per-symbol value columns restricted to dates where every symbol has a
/// defined (non-NaN) value.
fn complete_cases_by_date(
    series_by_symbol: &BTreeMap<String, DatedSeries>,
    symbols: &[String],
) -> Vec<Vec<f64>> {
    // date → defined value, per symbol
    let lookups: Vec<BTreeMap<NaiveDate, f64>> = symbols
        .iter()
        .map(|symbol| {
            let series = &series_by_symbol[symbol];
            series
                .dates
                .iter()
                .zip(series.values.iter())
                .filter(|(_, v)| !v.is_nan())
                .map(|(d, v)| (*d, *v))
                .collect()
        })
        .collect();

    // Intersect date sets, seeded from the first symbol.
    let shared: Vec<NaiveDate> = match lookups.first() {
        Some(first) => first
            .keys()
            .filter(|date| lookups[1..].iter().all(|m| m.contains_key(date)))
            .copied()
            .collect(),
        None => Vec::new(),
    };

    lookups
        .iter()
        .map(|lookup| shared.iter().map(|date| lookup[date]).collect())
        .collect()
}

/// Per-symbol value columns restricted to positional indices where every
/// symbol has a defined value. Unsound across differing trading calendars;
/// retained for parity only.
fn complete_cases_by_index(
    series_by_symbol: &BTreeMap<String, DatedSeries>,
    symbols: &[String],
) -> Vec<Vec<f64>> {
    let min_len = symbols
        .iter()
        .map(|s| series_by_symbol[s].values.len())
        .min()
        .unwrap_or(0);

    let usable: Vec<usize> = (0..min_len)
        .filter(|&i| {
            symbols
                .iter()
                .all(|s| !series_by_symbol[s].values[i].is_nan())
        })
        .collect();

    symbols
        .iter()
        .map(|s| {
            let values = &series_by_symbol[s].values;
            usable.iter().map(|&i| values[i]).collect()
        })
        .collect()
}
