//! Descriptive statistics over the headline dataset.
//!
//! Pure functions: records in, scalars/tables out. These feed the report
//! only — nothing downstream depends on them.

use crate::domain::HeadlineRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Summary of headline lengths (in characters).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlineStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: usize,
    pub max: usize,
}

impl HeadlineStats {
    /// Compute length statistics. Empty input yields zeroed stats.
    pub fn describe(records: &[HeadlineRecord]) -> Self {
        if records.is_empty() {
            return Self {
                count: 0,
                mean: 0.0,
                std: 0.0,
                min: 0,
                max: 0,
            };
        }

        let lengths: Vec<usize> = records.iter().map(|r| r.headline.chars().count()).collect();
        let n = lengths.len() as f64;
        let mean = lengths.iter().sum::<usize>() as f64 / n;
        let variance = lengths
            .iter()
            .map(|&l| {
                let d = l as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        Self {
            count: lengths.len(),
            mean,
            std: variance.sqrt(),
            min: *lengths.iter().min().unwrap(),
            max: *lengths.iter().max().unwrap(),
        }
    }
}

/// Article counts per publisher, descending (ties broken by name).
pub fn publisher_counts(records: &[HeadlineRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.publisher.as_str()).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Article counts per calendar day, over rows with a parsed date.
pub fn articles_per_day(records: &[HeadlineRecord]) -> BTreeMap<NaiveDate, usize> {
    let mut out = BTreeMap::new();
    for record in records {
        if let Some(date) = record.date {
            *out.entry(date).or_default() += 1;
        }
    }
    out
}
