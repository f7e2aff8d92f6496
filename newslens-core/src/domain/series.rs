//! Derived series — daily sentiment, returns, aligned samples.
//!
//! All of these are immutable snapshots produced once per pipeline run.
//! `BTreeMap` keys keep iteration deterministic so two runs over the same
//! inputs emit byte-identical artifacts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Mean sentiment per (date, stock) key. Keys are unique by construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailySentiment {
    by_key: BTreeMap<(NaiveDate, String), f64>,
}

impl DailySentiment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate, stock: &str, score: f64) {
        self.by_key.insert((date, stock.to_string()), score);
    }

    pub fn get(&self, date: NaiveDate, stock: &str) -> Option<f64> {
        self.by_key.get(&(date, stock.to_string())).copied()
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(NaiveDate, String), &f64)> {
        self.by_key.iter()
    }

    /// All distinct stock symbols present, sorted.
    pub fn symbols(&self) -> BTreeSet<String> {
        self.by_key.keys().map(|(_, s)| s.clone()).collect()
    }

    /// Restrict to a single symbol: date → mean score, sorted by date.
    pub fn for_symbol(&self, stock: &str) -> BTreeMap<NaiveDate, f64> {
        self.by_key
            .iter()
            .filter(|((_, s), _)| s == stock)
            .map(|((d, _), score)| (*d, *score))
            .collect()
    }

    /// Mean of all daily scores for a symbol. `None` if the symbol is absent.
    pub fn mean_for_symbol(&self, stock: &str) -> Option<f64> {
        let scores = self.for_symbol(stock);
        if scores.is_empty() {
            return None;
        }
        Some(scores.values().sum::<f64>() / scores.len() as f64)
    }
}

impl FromIterator<(NaiveDate, String, f64)> for DailySentiment {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, String, f64)>>(iter: T) -> Self {
        let mut out = Self::new();
        for (date, stock, score) in iter {
            out.insert(date, &stock, score);
        }
        out
    }
}

/// One daily return observation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReturnPoint {
    pub date: NaiveDate,
    /// (close[i] - close[i-1]) / close[i-1]. NaN for the first bar (no prior
    /// close) and wherever either close involved is NaN.
    pub ret: f64,
}

/// Per-symbol daily returns, ascending by date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReturnSeries {
    pub points: Vec<ReturnPoint>,
}

impl ReturnSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One row of an aligned sentiment/return sample.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AlignedRow {
    pub date: NaiveDate,
    pub sentiment: f64,
    pub ret: f64,
}

/// Inner join of daily sentiment with daily returns for one symbol.
///
/// Invariant: dates are strictly ascending (no duplicates), and every date
/// was present in both inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlignedSample {
    pub rows: Vec<AlignedRow>,
}

impl AlignedSample {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn sentiment_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.sentiment).collect()
    }

    pub fn return_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.ret).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn daily_sentiment_symbol_restriction() {
        let ds: DailySentiment = [
            (d("2024-01-01"), "AAPL".to_string(), 0.5),
            (d("2024-01-02"), "AAPL".to_string(), -0.2),
            (d("2024-01-01"), "MSFT".to_string(), 0.1),
        ]
        .into_iter()
        .collect();

        let aapl = ds.for_symbol("AAPL");
        assert_eq!(aapl.len(), 2);
        assert_eq!(aapl[&d("2024-01-01")], 0.5);
        assert!(!aapl.contains_key(&d("2024-01-03")));

        let symbols = ds.symbols();
        assert!(symbols.contains("AAPL"));
        assert!(symbols.contains("MSFT"));
        assert_eq!(symbols.len(), 2);
    }

    #[test]
    fn daily_sentiment_mean_per_symbol() {
        let ds: DailySentiment = [
            (d("2024-01-01"), "AAPL".to_string(), 0.4),
            (d("2024-01-02"), "AAPL".to_string(), 0.2),
        ]
        .into_iter()
        .collect();
        let mean = ds.mean_for_symbol("AAPL").unwrap();
        assert!((mean - 0.3).abs() < 1e-12);
        assert!(ds.mean_for_symbol("TSLA").is_none());
    }

    #[test]
    fn aligned_sample_column_extraction() {
        let sample = AlignedSample {
            rows: vec![
                AlignedRow {
                    date: d("2024-01-01"),
                    sentiment: 0.5,
                    ret: 0.01,
                },
                AlignedRow {
                    date: d("2024-01-02"),
                    sentiment: -0.2,
                    ret: 0.0,
                },
            ],
        };
        assert_eq!(sample.sentiment_values(), vec![0.5, -0.2]);
        assert_eq!(sample.return_values(), vec![0.01, 0.0]);
    }
}
