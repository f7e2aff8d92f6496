//! Sentiment/return date alignment.
//!
//! Inner join on calendar date: a row exists in the output only when the
//! date is present in BOTH the sentiment table (for the symbol) and the
//! return series. Rows never duplicate a date and come out date-ascending.

use crate::domain::{AlignedRow, AlignedSample, ReturnSeries};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What to do with a matched row whose return is undefined (NaN).
///
/// `ImputeZero` records the day as flat, a documented lossy policy rather
/// than a hidden default. `DropRow` excludes the row instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingReturnPolicy {
    #[default]
    ImputeZero,
    DropRow,
}

/// Inner-join one symbol's daily sentiment with its return series.
///
/// Either input empty → empty sample.
pub fn align(
    sentiment: &BTreeMap<NaiveDate, f64>,
    returns: &ReturnSeries,
    policy: MissingReturnPolicy,
) -> AlignedSample {
    if sentiment.is_empty() || returns.is_empty() {
        return AlignedSample::default();
    }

    // Provider contract guarantees date-deduplicated returns; a BTreeMap
    // lookup keeps the join O(n log n) and date-ordered via the sentiment side.
    let returns_by_date: BTreeMap<NaiveDate, f64> =
        returns.points.iter().map(|p| (p.date, p.ret)).collect();

    let mut rows = Vec::new();
    for (&date, &score) in sentiment {
        let Some(&ret) = returns_by_date.get(&date) else {
            continue;
        };
        let ret = if ret.is_nan() {
            match policy {
                MissingReturnPolicy::ImputeZero => 0.0,
                MissingReturnPolicy::DropRow => continue,
            }
        } else {
            ret
        };
        rows.push(AlignedRow {
            date,
            sentiment: score,
            ret,
        });
    }

    AlignedSample { rows }
}
